//! Artist pages

use super::{
    checkbox_field, escape_html, external_link, genre_tags, layout, search_box, text_field,
    web_link, FormMode, Notice,
};
use crate::forms::ArtistForm;
use crate::models::{ArtistDetail, EntitySummary, SearchResults, ShowEntry};

pub fn artist_list_page(artists: &[EntitySummary]) -> String {
    let mut content = format!(
        "<h1>Artists</h1>\n{}\n<p><a href=\"/artists/create\">Post an artist</a></p>\n",
        search_box("/artists/search", "Find an artist")
    );

    if artists.is_empty() {
        content.push_str(r#"<p class="muted">No artists listed yet.</p>"#);
    } else {
        content.push_str(&summary_list(artists));
    }

    layout("Artists", None, &content)
}

pub fn artist_search_page(results: &SearchResults) -> String {
    let content = format!(
        "<h1>Artists</h1>\n{}\n<h2>Number of search results for \"{}\": {}</h2>\n{}",
        search_box("/artists/search", "Find an artist"),
        escape_html(&results.search_term),
        results.count,
        summary_list(&results.data)
    );

    layout("Artist Search", None, &content)
}

pub fn artist_detail_page(detail: &ArtistDetail, notice: Option<&Notice>) -> String {
    let artist = &detail.artist;

    let seeking = if artist.seeking_venue {
        format!(
            "<p><strong>Currently seeking performance venues</strong></p><p>{}</p>",
            escape_html(artist.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        r#"<p class="muted">Not currently seeking performance venues</p>"#.to_string()
    };

    let image = web_link(artist.image_link.as_deref())
        .map(|url| {
            format!(
                r#"<img src="{}" alt="{}" width="300">"#,
                escape_html(url),
                escape_html(&artist.name)
            )
        })
        .unwrap_or_default();

    let content = format!(
        r#"<h1>{name}</h1>
<p class="muted">ID: {id}</p>
<div>{genres}</div>
<p>{city}, {state}</p>
<p>{phone}</p>
{website}{facebook}{seeking}
{image}
<p><a href="/artists/{id}/edit">Edit artist</a></p>
<h2>{past_count} Past Shows</h2>
{past}
<h2>{upcoming_count} Upcoming Shows</h2>
{upcoming}"#,
        name = escape_html(&artist.name),
        id = artist.id,
        genres = genre_tags(&detail.genres),
        city = escape_html(&artist.city),
        state = escape_html(&artist.state),
        phone = escape_html(artist.phone.as_deref().unwrap_or("No phone listed")),
        website = external_link("Website", artist.website.as_deref()),
        facebook = external_link("Facebook", artist.facebook_link.as_deref()),
        seeking = seeking,
        image = image,
        past_count = detail.past_shows_count,
        past = venue_show_list(&detail.past_shows),
        upcoming_count = detail.upcoming_shows_count,
        upcoming = venue_show_list(&detail.upcoming_shows),
    );

    layout(&artist.name, notice, &content)
}

pub fn artist_form_page(form: &ArtistForm, mode: FormMode, notice: Option<&Notice>) -> String {
    let title = match mode {
        FormMode::Create => "List a new artist",
        FormMode::Edit(_) => "Edit artist",
    };

    let fields = [
        text_field("name", "Name", &form.name),
        text_field("city", "City", &form.city),
        text_field("state", "State", &form.state),
        text_field("phone", "Phone", &form.phone),
        text_field("genres", "Genres (comma separated)", &form.genres),
        text_field("image_link", "Image link", &form.image_link),
        text_field("facebook_link", "Facebook link", &form.facebook_link),
        text_field("website", "Website", &form.website),
        checkbox_field("seeking_venue", "Seeking venues", form.seeking_venue.is_some()),
        text_field(
            "seeking_description",
            "Seeking description",
            &form.seeking_description,
        ),
    ];

    let content = format!(
        "<h1>{}</h1>\n<form class=\"record\" method=\"post\" action=\"{}\">\n{}\n<button type=\"submit\">{}</button>\n</form>",
        title,
        mode.action("/artists"),
        fields.join("\n"),
        match mode {
            FormMode::Create => "Create artist",
            FormMode::Edit(_) => "Save changes",
        }
    );

    layout(title, notice, &content)
}

fn summary_list(artists: &[EntitySummary]) -> String {
    let items: Vec<String> = artists
        .iter()
        .map(|artist| {
            format!(
                r#"<li><a href="/artists/{}">{}</a> <span class="muted">{} upcoming</span></li>"#,
                artist.id,
                escape_html(&artist.name),
                artist.num_upcoming_shows
            )
        })
        .collect();

    format!("<ul class=\"items\">\n{}\n</ul>", items.join("\n"))
}

fn venue_show_list(shows: &[ShowEntry]) -> String {
    if shows.is_empty() {
        return r#"<p class="muted">None</p>"#.to_string();
    }

    let items: Vec<String> = shows
        .iter()
        .map(|show| {
            format!(
                r#"<li><a href="/venues/{}">{}</a> <span class="muted">{}</span></li>"#,
                show.counterpart_id,
                escape_html(&show.counterpart_name),
                escape_html(&show.formatted_start_time)
            )
        })
        .collect();

    format!("<ul class=\"items\">\n{}\n</ul>", items.join("\n"))
}
