//! HTML pages served by the analyser.
//!
//! Every value that came from the user or from an analysed page passes
//! through `html_escape` before it is written into markup.

use std::collections::BTreeSet;
use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use web_analyser_core::Summary;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 56rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
h1 { font-size: 1.6rem; }
form { display: flex; gap: .5rem; }
input[type=url] { flex: 1; padding: .5rem; font-size: 1rem; }
button { padding: .5rem 1rem; font-size: 1rem; }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { text-align: left; padding: .25rem 1rem .25rem 0; vertical-align: top; }
.error { color: #a00; }
details { margin: .5rem 0; }
li { word-break: break-all; }
"#;

/// Message shown when the URL fails the syntax check.
pub const INVALID_URL_MESSAGE: &str =
    "Invalid URL provided, please ensure the URL format is correct, for example: https://www.google.com";

/// Message shown when the page could not be fetched.
pub const UNREACHABLE_URL_MESSAGE: &str =
    "The URL provided is not reachable, please check your internet connection and ensure that the URL is correct";

/// What went wrong, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    pub message: &'static str,
    /// Status code returned by the analysed site, if it answered at all.
    pub upstream_status: Option<u16>,
}

impl ErrorPage {
    pub fn invalid_url() -> Self {
        Self { message: INVALID_URL_MESSAGE, upstream_status: None }
    }

    pub fn unreachable(upstream_status: Option<u16>) -> Self {
        Self { message: UNREACHABLE_URL_MESSAGE, upstream_status }
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = encode_text(title),
    )
}

fn url_form(value: &str) -> String {
    format!(
        r#"<form method="post" action="/summary">
<input type="url" name="url" placeholder="https://www.example.com" value="{}" required>
<button type="submit">Analyse</button>
</form>"#,
        encode_double_quoted_attribute(value)
    )
}

pub fn index_page() -> String {
    let body = format!(
        "<h1>Web Analyser</h1>\n<p>Enter the address of a page to summarise its markup.</p>\n{}",
        url_form("")
    );
    layout("Web Analyser", &body)
}

pub fn error_page(error: &ErrorPage, url: &str) -> String {
    let mut body = String::from("<h1>Web Analyser</h1>\n");
    writeln!(body, r#"<p class="error">{}</p>"#, encode_text(error.message)).ok();
    if let Some(status) = error.upstream_status {
        writeln!(body, r#"<p class="error">HTTP status code: {}</p>"#, status).ok();
    }
    body.push_str(&url_form(url));
    layout("Web Analyser - Error", &body)
}

pub fn summary_page(summary: &Summary) -> String {
    let mut body = String::new();
    let source = summary.source_url().as_str();

    body.push_str("<h1>Summary</h1>\n");
    writeln!(
        body,
        r#"<p><a href="{}">{}</a></p>"#,
        encode_double_quoted_attribute(source),
        encode_text(source)
    )
    .ok();

    body.push_str("<table>\n");
    table_row(&mut body, "HTML version", summary.version());
    table_row(&mut body, "Page title", summary.title().unwrap_or(""));
    table_row(&mut body, "Login form", if summary.has_login_form() { "Yes" } else { "No" });
    body.push_str("</table>\n");

    body.push_str("<h2>Headings</h2>\n");
    if summary.header_counts().is_empty() {
        body.push_str("<p>No headings found.</p>\n");
    } else {
        body.push_str("<table>\n");
        for (tag, count) in summary.header_counts() {
            table_row(&mut body, tag, &count.to_string());
        }
        body.push_str("</table>\n");
    }

    body.push_str("<h2>Links</h2>\n");
    link_section(&mut body, "Internal", summary.internal_links());
    link_section(&mut body, "External", summary.external_links());
    link_section(&mut body, "Inaccessible", summary.inaccessible_links());

    body.push_str(&url_form(source));
    layout("Web Analyser - Summary", &body)
}

fn table_row(body: &mut String, label: &str, value: &str) {
    writeln!(body, "<tr><th>{}</th><td>{}</td></tr>", encode_text(label), encode_text(value)).ok();
}

fn link_section(body: &mut String, label: &str, links: &BTreeSet<String>) {
    writeln!(body, "<details><summary>{} links: {}</summary>", label, links.len()).ok();
    if !links.is_empty() {
        body.push_str("<ul>\n");
        for link in links {
            writeln!(body, "<li>{}</li>", encode_text(link)).ok();
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</details>\n");
}
