//! Server-rendered HTML pages.
//!
//! Every page is a plain `String` wrapped in the shared [`layout`]. All
//! catalog and visitor text goes through [`escape`] before interpolation.

pub mod contact;
pub mod projects;
pub mod services;
pub mod static_pages;

use std::fmt::Write;

use danawood_core::site::{self, NAV_LINKS};

/// Number of services featured on the home page.
pub const HOME_SERVICES: usize = 6;

/// Number of projects featured on the home page.
pub const HOME_PROJECTS: usize = 4;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap a page body in the shared document, header and footer.
pub fn layout(title: &str, body: &str) -> String {
    let mut nav = String::new();
    for link in NAV_LINKS {
        let _ = write!(
            nav,
            r#"<a href="{}">{}</a>"#,
            escape(link.href),
            escape(link.name)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {company}</title>
</head>
<body>
<header class="site-header">
<div class="top-bar"><a href="tel:{dial}">{phone}</a> <a href="mailto:{email}">{email}</a></div>
<a class="logo" href="/">{company}</a>
<nav>{nav}</nav>
<a class="cta" href="/contact">Get Free Consultation</a>
</header>
<main>
{body}
</main>
<footer class="site-footer">
<p>{tagline}</p>
<address>{address}<br><a href="tel:{dial}">{phone}</a><br><a href="mailto:{email}">{email}</a></address>
<p>&copy; {company}. All rights reserved.</p>
</footer>
</body>
</html>
"#,
        title = escape(title),
        company = escape(site::COMPANY_NAME),
        dial = escape(site::PHONE_DIAL),
        phone = escape(site::PHONE_DISPLAY),
        email = escape(site::EMAIL),
        tagline = escape(site::TAGLINE),
        address = escape(site::ADDRESS),
    )
}

/// Render an ordered list of strings as `<ul>` items.
fn bullet_list(items: &[String]) -> String {
    let mut out = String::from("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape("Media Units"), "Media Units");
    }

    #[test]
    fn layout_includes_navigation_and_title() {
        let html = layout("About", "<p>body</p>");
        assert!(html.contains("<title>About | Dana Woodworks</title>"));
        assert!(html.contains(r#"<a href="/projects">Projects</a>"#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn bullet_list_escapes_items() {
        let html = bullet_list(&["85\" TV".to_string()]);
        assert_eq!(html, "<ul><li>85&quot; TV</li></ul>");
    }
}
