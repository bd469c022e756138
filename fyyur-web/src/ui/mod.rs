//! Server-rendered HTML pages
//!
//! # Structure
//! - **Layout** (this module): shared page chrome, notices, escaping
//! - **Pages** (`pages`): home, 404 and 500 pages
//! - **Venues** (`venues`), **Artists** (`artists`), **Shows** (`shows`):
//!   listing, search, detail and form pages
//!
//! Every value that came from a user or the database goes through
//! [`escape_html`] before it is spliced into markup.

pub mod artists;
pub mod pages;
pub mod shows;
pub mod venues;

use crate::forms::is_web_url;

/// Kind of notice shown at the top of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot message rendered above the page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    fn render(&self) -> String {
        let class = match self.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        };
        format!(
            r#"<div class="{}" role="alert">{}</div>"#,
            class,
            escape_html(&self.message)
        )
    }
}

/// Whether a form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    /// Form action URL under `base` (`/venues`, `/artists`)
    pub(crate) fn action(self, base: &str) -> String {
        match self {
            FormMode::Create => format!("{}/create", base),
            FormMode::Edit(id) => format!("{}/{}/edit", base, id),
        }
    }
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared layout
pub fn layout(title: &str, notice: Option<&Notice>, content: &str) -> String {
    let notice = notice.map(Notice::render).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
            margin: 0;
        }}
        header {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 16px 20px;
            display: flex;
            gap: 20px;
            align-items: center;
        }}
        header .brand {{
            font-size: 22px;
            font-weight: 600;
            color: #4a9eff;
            text-decoration: none;
        }}
        nav a {{
            color: #e0e0e0;
            margin-right: 14px;
            text-decoration: none;
        }}
        nav a:hover, main a:hover {{
            text-decoration: underline;
        }}
        main {{
            padding: 20px;
            max-width: 960px;
        }}
        main a {{
            color: #4a9eff;
        }}
        .notice {{
            padding: 10px 14px;
            border-radius: 4px;
            margin-bottom: 20px;
        }}
        .notice-success {{
            background-color: #1f3d2b;
            border: 1px solid #2f7a4b;
        }}
        .notice-error {{
            background-color: #4a1f1f;
            border: 1px solid #a33;
        }}
        .muted {{
            color: #888;
        }}
        .items {{
            list-style: none;
            padding: 0;
        }}
        .items li {{
            padding: 6px 0;
            border-bottom: 1px solid #2a2a2a;
        }}
        .tag {{
            display: inline-block;
            padding: 2px 8px;
            margin-right: 6px;
            border-radius: 10px;
            background-color: #333;
            font-size: 13px;
        }}
        form.record label {{
            display: block;
            margin-top: 10px;
        }}
        input[type=text], textarea, select {{
            width: 100%;
            max-width: 480px;
            padding: 6px;
            background-color: #2a2a2a;
            color: #e0e0e0;
            border: 1px solid #3a3a3a;
        }}
        button {{
            margin-top: 14px;
            padding: 6px 16px;
            background-color: #4a9eff;
            color: #fff;
            border: none;
            border-radius: 4px;
            cursor: pointer;
        }}
        button.danger {{
            background-color: #c0392b;
        }}
    </style>
</head>
<body>
    <header>
        <a class="brand" href="/">Fyyur</a>
        <nav>
            <a href="/venues">Venues</a>
            <a href="/artists">Artists</a>
            <a href="/shows">Shows</a>
        </nav>
    </header>
    <main>
        {notice}
        {content}
    </main>
</body>
</html>
"#,
        title = escape_html(title),
        notice = notice,
        content = content,
    )
}

/// Search box posting `search_term` to `action`
pub(crate) fn search_box(action: &str, placeholder: &str) -> String {
    format!(
        r#"<form method="post" action="{}">
    <input type="text" name="search_term" placeholder="{}">
    <button type="submit">Search</button>
</form>"#,
        action,
        escape_html(placeholder)
    )
}

/// Genre tags for a detail page
pub(crate) fn genre_tags(genres: &[String]) -> String {
    genres
        .iter()
        .map(|g| format!(r#"<span class="tag">{}</span>"#, escape_html(g)))
        .collect::<Vec<_>>()
        .join("")
}

/// Labeled single-line text input
pub(crate) fn text_field(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{value}">"#,
        name = name,
        label = escape_html(label),
        value = escape_html(value),
    )
}

/// Labeled checkbox submitting `y` when ticked
pub(crate) fn checkbox_field(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{}" value="y"{}> {}</label>"#,
        name,
        if checked { " checked" } else { "" },
        escape_html(label)
    )
}

/// Stored link if it is safe to place in `href`/`src`
pub(crate) fn web_link(url: Option<&str>) -> Option<&str> {
    url.filter(|u| is_web_url(u))
}

/// Optional external link, or nothing
pub(crate) fn external_link(label: &str, url: Option<&str>) -> String {
    match web_link(url) {
        Some(url) => format!(
            r#"<p><a href="{}" rel="noopener" target="_blank">{}</a></p>"#,
            escape_html(url),
            escape_html(label)
        ),
        None => String::new(),
    }
}
