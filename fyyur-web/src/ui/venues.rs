//! Venue pages

use super::{
    checkbox_field, escape_html, external_link, genre_tags, layout, search_box, text_field,
    web_link, FormMode, Notice,
};
use crate::forms::VenueForm;
use crate::models::{SearchResults, ShowEntry, VenueArea, VenueDetail};

/// GET /venues: venues grouped by city and state
pub fn venue_list_page(areas: &[VenueArea]) -> String {
    let mut content = String::from("<h1>Venues</h1>\n");
    content.push_str(&search_box("/venues/search", "Find a venue"));
    content.push_str(r#"<p><a href="/venues/create">Post a venue</a></p>"#);

    if areas.is_empty() {
        content.push_str(r#"<p class="muted">No venues listed yet.</p>"#);
    }

    for area in areas {
        content.push_str(&format!(
            "<h2>{}, {}</h2>\n<ul class=\"items\">\n",
            escape_html(&area.city),
            escape_html(&area.state)
        ));
        for venue in &area.venues {
            content.push_str(&format!(
                r#"<li><a href="/venues/{}">{}</a> <span class="muted">{} upcoming</span></li>"#,
                venue.id,
                escape_html(&venue.name),
                venue.num_upcoming_shows
            ));
            content.push('\n');
        }
        content.push_str("</ul>\n");
    }

    layout("Venues", None, &content)
}

/// POST /venues/search results
pub fn venue_search_page(results: &SearchResults) -> String {
    let mut content = format!(
        "<h1>Venues</h1>\n{}\n<h2>Number of search results for \"{}\": {}</h2>\n<ul class=\"items\">\n",
        search_box("/venues/search", "Find a venue"),
        escape_html(&results.search_term),
        results.count
    );
    for venue in &results.data {
        content.push_str(&format!(
            r#"<li><a href="/venues/{}">{}</a> <span class="muted">{} upcoming</span></li>"#,
            venue.id,
            escape_html(&venue.name),
            venue.num_upcoming_shows
        ));
        content.push('\n');
    }
    content.push_str("</ul>");

    layout("Venue Search", None, &content)
}

/// GET /venues/{id}
pub fn venue_detail_page(detail: &VenueDetail, notice: Option<&Notice>) -> String {
    let venue = &detail.venue;

    let seeking = if venue.seeking_talent {
        format!(
            "<p><strong>Currently seeking talent</strong></p><p>{}</p>",
            escape_html(venue.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        r#"<p class="muted">Not currently seeking talent</p>"#.to_string()
    };

    let content = format!(
        r#"<h1>{name}</h1>
<p class="muted">ID: {id}</p>
<div>{genres}</div>
<p>{address}<br>{city}, {state}</p>
<p>{phone}</p>
{website}{facebook}{seeking}
{image}
<p><a href="/venues/{id}/edit">Edit venue</a></p>
<button class="danger" id="delete-venue" data-id="{id}">Delete venue</button>
<script>
    document.getElementById('delete-venue').addEventListener('click', async (e) => {{
        const id = e.target.dataset.id;
        const response = await fetch('/venues/' + id, {{ method: 'DELETE' }});
        document.open();
        document.write(await response.text());
        document.close();
        history.pushState(null, '', '/');
    }});
</script>
<h2>{past_count} Past Shows</h2>
{past}
<h2>{upcoming_count} Upcoming Shows</h2>
{upcoming}"#,
        name = escape_html(&venue.name),
        id = venue.id,
        genres = genre_tags(&detail.genres),
        address = escape_html(&venue.address),
        city = escape_html(&venue.city),
        state = escape_html(&venue.state),
        phone = escape_html(venue.phone.as_deref().unwrap_or("No phone listed")),
        website = external_link("Website", venue.website.as_deref()),
        facebook = external_link("Facebook", venue.facebook_link.as_deref()),
        seeking = seeking,
        image = venue_image(venue.image_link.as_deref(), &venue.name),
        past_count = detail.past_shows_count,
        past = artist_show_list(&detail.past_shows),
        upcoming_count = detail.upcoming_shows_count,
        upcoming = artist_show_list(&detail.upcoming_shows),
    );

    layout(&venue.name, notice, &content)
}

/// GET /venues/create and GET /venues/{id}/edit
pub fn venue_form_page(form: &VenueForm, mode: FormMode, notice: Option<&Notice>) -> String {
    let title = match mode {
        FormMode::Create => "List a new venue",
        FormMode::Edit(_) => "Edit venue",
    };

    let content = format!(
        r#"<h1>{title}</h1>
<form class="record" method="post" action="{action}">
{name}
{city}
{state}
{address}
{phone}
{genres}
{image}
{facebook}
{website}
{seeking}
{description}
<button type="submit">{submit}</button>
</form>"#,
        title = title,
        action = mode.action("/venues"),
        name = text_field("name", "Name", &form.name),
        city = text_field("city", "City", &form.city),
        state = text_field("state", "State", &form.state),
        address = text_field("address", "Address", &form.address),
        phone = text_field("phone", "Phone", &form.phone),
        genres = text_field("genres", "Genres (comma separated)", &form.genres),
        image = text_field("image_link", "Image link", &form.image_link),
        facebook = text_field("facebook_link", "Facebook link", &form.facebook_link),
        website = text_field("website", "Website", &form.website),
        seeking = checkbox_field(
            "seeking_talent",
            "Seeking talent",
            form.seeking_talent.is_some()
        ),
        description = text_field(
            "seeking_description",
            "Seeking description",
            &form.seeking_description
        ),
        submit = match mode {
            FormMode::Create => "Create venue",
            FormMode::Edit(_) => "Save changes",
        },
    );

    layout(title, notice, &content)
}

fn venue_image(link: Option<&str>, name: &str) -> String {
    web_link(link)
        .map(|url| {
            format!(
                r#"<img src="{}" alt="{}" width="300">"#,
                escape_html(url),
                escape_html(name)
            )
        })
        .unwrap_or_default()
}

fn artist_show_list(shows: &[ShowEntry]) -> String {
    if shows.is_empty() {
        return r#"<p class="muted">None</p>"#.to_string();
    }

    let items: Vec<String> = shows
        .iter()
        .map(|show| {
            format!(
                r#"<li><a href="/artists/{}">{}</a> <span class="muted">{}</span></li>"#,
                show.counterpart_id,
                escape_html(&show.counterpart_name),
                escape_html(&show.formatted_start_time)
            )
        })
        .collect();

    format!("<ul class=\"items\">\n{}\n</ul>", items.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntitySummary;

    #[test]
    fn test_list_page_groups_by_area() {
        let areas = vec![VenueArea {
            city: "SF".to_string(),
            state: "CA".to_string(),
            venues: vec![EntitySummary {
                id: 1,
                name: "The Hop".to_string(),
                num_upcoming_shows: 0,
            }],
        }];

        let html = venue_list_page(&areas);

        assert!(html.contains("<h2>SF, CA</h2>"));
        assert!(html.contains(r#"<a href="/venues/1">The Hop</a>"#));
        assert!(html.contains("0 upcoming"));
    }

    #[test]
    fn test_form_page_keeps_submitted_values() {
        let form = VenueForm {
            name: "The <Hop>".to_string(),
            phone: "not-a-number".to_string(),
            seeking_talent: Some("y".to_string()),
            ..Default::default()
        };

        let html = venue_form_page(&form, FormMode::Edit(7), Some(&Notice::error("bad phone")));

        assert!(html.contains(r#"action="/venues/7/edit""#));
        assert!(html.contains(r#"value="The &lt;Hop&gt;""#));
        assert!(html.contains(r#"value="not-a-number""#));
        assert!(html.contains(" checked"));
        assert!(html.contains("bad phone"));
    }
}
