//! Home and error pages

use super::{layout, Notice};

/// GET / content, optionally carrying the outcome of the last write
pub fn home_page(notice: Option<&Notice>) -> String {
    layout(
        "Home",
        notice,
        r#"<h1>Fyyur</h1>
<p class="muted">Book local talent at local venues.</p>
<ul class="items">
    <li><a href="/venues">Browse venues</a> or <a href="/venues/create">post a venue</a></li>
    <li><a href="/artists">Browse artists</a> or <a href="/artists/create">post an artist</a></li>
    <li><a href="/shows">Browse shows</a> or <a href="/shows/create">book a show</a></li>
</ul>"#,
    )
}

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        None,
        r#"<h1>404</h1>
<p>The page or record you were looking for does not exist.</p>
<p><a href="/">Back home</a></p>"#,
    )
}

pub fn server_error_page() -> String {
    layout(
        "Server Error",
        None,
        r#"<h1>500</h1>
<p>Something went wrong on our side. Please try again.</p>
<p><a href="/">Back home</a></p>"#,
    )
}
