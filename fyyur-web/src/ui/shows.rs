//! Show pages

use super::{escape_html, layout, web_link, Notice};
use crate::db::shows::Choice;
use crate::forms::ShowForm;
use crate::models::ShowListing;

/// GET /shows
pub fn show_list_page(shows: &[ShowListing]) -> String {
    let mut content = String::from(
        "<h1>Shows</h1>\n<p><a href=\"/shows/create\">Book a show</a></p>\n",
    );

    if shows.is_empty() {
        content.push_str(r#"<p class="muted">No shows booked yet.</p>"#);
        return layout("Shows", None, &content);
    }

    content.push_str("<ul class=\"items\">\n");
    for show in shows {
        let image = web_link(show.artist_image_link.as_deref())
            .map(|url| {
                format!(
                    r#"<img src="{}" alt="{}" width="60"> "#,
                    escape_html(url),
                    escape_html(&show.artist_name)
                )
            })
            .unwrap_or_default();

        content.push_str(&format!(
            r#"<li>{image}<span class="muted">{time}</span> <a href="/artists/{artist_id}">{artist}</a> playing at <a href="/venues/{venue_id}">{venue}</a></li>"#,
            image = image,
            time = escape_html(&show.formatted_start_time),
            artist_id = show.artist_id,
            artist = escape_html(&show.artist_name),
            venue_id = show.venue_id,
            venue = escape_html(&show.venue_name),
        ));
        content.push('\n');
    }
    content.push_str("</ul>");

    layout("Shows", None, &content)
}

/// GET /shows/create
///
/// Venue and artist pickers list every record; a previously submitted id is
/// preselected.
pub fn show_form_page(
    form: &ShowForm,
    venues: &[Choice],
    artists: &[Choice],
    notice: Option<&Notice>,
) -> String {
    let content = format!(
        r#"<h1>Book a show</h1>
<form class="record" method="post" action="/shows/create">
<label for="artist_id">Artist</label>
<select id="artist_id" name="artist_id">
{artists}
</select>
<label for="venue_id">Venue</label>
<select id="venue_id" name="venue_id">
{venues}
</select>
<label for="start_time">Start time (YYYY-MM-DD HH:MM)</label>
<input type="text" id="start_time" name="start_time" value="{start_time}">
<button type="submit">Create show</button>
</form>"#,
        artists = options(artists, &form.artist_id),
        venues = options(venues, &form.venue_id),
        start_time = escape_html(&form.start_time),
    );

    layout("Book a show", notice, &content)
}

fn options(choices: &[Choice], selected: &str) -> String {
    choices
        .iter()
        .map(|choice| {
            let id = choice.id.to_string();
            format!(
                r#"<option value="{}"{}>{} (#{})</option>"#,
                id,
                if id == selected.trim() { " selected" } else { "" },
                escape_html(&choice.name),
                id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
