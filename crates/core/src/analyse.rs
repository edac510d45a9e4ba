//! Single-pass analysis of a parsed document.
//!
//! The walker visits every node of the tree once, depth-first and in
//! document order, and routes each one to the matching heuristic:
//!
//! | Node                 | Action                                        |
//! |----------------------|-----------------------------------------------|
//! | doctype              | [`detect_version`], upper-cased, overwrites   |
//! | `<title>`            | [`extract_text`], first title wins            |
//! | `<h1>`..`<h6>`       | header count incremented                      |
//! | `<a>`                | [`classify_link`] on the first `href`         |
//! | `<form>`             | [`is_login_form`]                             |
//!
//! Traversal uses an explicit stack, so nesting depth is bounded by memory
//! rather than by the thread's call stack.
//!
//! # Example
//!
//! ```rust
//! use url::Url;
//! use web_analyser_core::analyse_html;
//!
//! let url = Url::parse("https://example.com").unwrap();
//! let summary = analyse_html("<!DOCTYPE html><title>Hi</title><h1>One</h1>", &url);
//!
//! assert_eq!(summary.version(), "HTML 5");
//! assert_eq!(summary.title(), Some("Hi"));
//! assert_eq!(summary.header_count("h1"), 1);
//! ```

use ego_tree::NodeRef;
use scraper::node::Element;
use scraper::{Html, Node};
use url::Url;

use crate::links::classify_link;
use crate::login::is_login_form;
use crate::parse::Document;
use crate::summary::Summary;
use crate::text::extract_text;
use crate::version::detect_version;

const HEADER_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Parses `html` and analyses it as the page found at `source_url`.
pub fn analyse_html(html: &str, source_url: &Url) -> Summary {
    let html = Html::parse_document(html);
    analyse_root(html.tree.root(), source_url)
}

/// Analyses an already parsed document.
pub fn analyse_document(doc: &Document, source_url: &Url) -> Summary {
    analyse_root(doc.root(), source_url)
}

fn analyse_root(root: NodeRef<'_, Node>, source_url: &Url) -> Summary {
    let mut summary = Summary::new(source_url.clone());
    walk(&mut summary, root);
    tracing::debug!(
        url = %source_url,
        version = summary.version(),
        links = summary.link_count(),
        login_form = summary.has_login_form(),
        "analysed document"
    );
    summary
}

/// Visits `node` and all of its descendants in pre-order, recording what
/// each one contributes into `summary`.
pub fn walk(summary: &mut Summary, node: NodeRef<'_, Node>) {
    let mut stack = vec![node];

    while let Some(current) = stack.pop() {
        visit(summary, current);
        // reversed so the leftmost child is popped first
        stack.extend(current.children().rev());
    }
}

fn visit(summary: &mut Summary, node: NodeRef<'_, Node>) {
    match node.value() {
        Node::Doctype(doctype) => summary.set_version(detect_version(doctype).to_uppercase()),
        Node::Element(element) => visit_element(summary, node, element),
        _ => {}
    }
}

fn visit_element(summary: &mut Summary, node: NodeRef<'_, Node>, element: &Element) {
    match element.name() {
        "title" => summary.set_title(extract_text(node)),
        tag if HEADER_TAGS.contains(&tag) => summary.increment_header_count(tag),
        "a" => {
            let href = element.attr("href").unwrap_or_default();
            let kind = classify_link(href, summary.source_url());
            summary.add_link(kind, href);
        }
        "form" => {
            if is_login_form(node) {
                summary.mark_login_form();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://example.com/start").unwrap()
    }

    #[test]
    fn test_end_to_end_basic_page() {
        let summary = analyse_html("<!DOCTYPE HTML><html><title>T</title><h1>X<h2>Y</h2></h1></html>", &url());

        assert_eq!(summary.version(), "HTML 5");
        assert_eq!(summary.title(), Some("T"));
        assert_eq!(summary.header_count("h1"), 1);
        assert_eq!(summary.header_count("h2"), 1);
        assert_eq!(summary.header_counts().len(), 2);
        assert_eq!(summary.link_count(), 0);
        assert!(!summary.has_login_form());
    }

    #[test]
    fn test_links_without_usable_base() {
        let blank = Url::parse("about:blank").unwrap();
        let summary = analyse_html(r#"<a href="/about">a</a><a href="%zz">b</a><a href="https://rust-lang.org">c</a>"#, &blank);

        assert!(summary.internal_links().contains("/about"));
        assert!(summary.inaccessible_links().contains("%zz"));
        assert!(summary.external_links().contains("https://rust-lang.org"));
    }

    #[test]
    fn test_repeated_headers_counted() {
        let summary = analyse_html("<h1>a</h1><h1>b</h1>", &url());
        assert_eq!(summary.header_count("h1"), 2);
        assert_eq!(summary.header_counts().len(), 1);
    }

    #[test]
    fn test_no_doctype_keeps_unknown() {
        let summary = analyse_html("<html><body><p>hi</p></body></html>", &url());
        assert_eq!(summary.version(), "unknown");
    }

    #[test]
    fn test_legacy_doctype_upper_cased() {
        let summary = analyse_html(
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML Basic 1.1//EN\" \"http://www.w3.org/TR/xhtml-basic/xhtml-basic11.dtd\"><html></html>",
            &url(),
        );
        assert_eq!(summary.version(), "XHTML BASIC 1.1");
    }

    #[test]
    fn test_links_are_classified() {
        let html = r#"
            <a href="/about">About</a>
            <a href="/about">About again</a>
            <a href="https://example.com/contact">Contact</a>
            <a href="https://rust-lang.org">Rust</a>
            <a href="http://[::1">Broken</a>
            <a href="mailto:a@b.c">Mail</a>
            <a href="tel:123">Call</a>
            <a href="javascript:void(0)">Script</a>
            <a name="anchor-without-href">Anchor</a>
        "#;
        let summary = analyse_html(html, &url());

        let internal: Vec<_> = summary.internal_links().iter().map(String::as_str).collect();
        assert_eq!(internal, vec!["", "/about", "https://example.com/contact"]);
        assert!(summary.external_links().contains("https://rust-lang.org"));
        assert_eq!(summary.external_links().len(), 1);
        assert!(summary.inaccessible_links().contains("http://[::1"));
        assert_eq!(summary.inaccessible_links().len(), 1);
    }

    #[test]
    fn test_ignored_links_recorded_nowhere() {
        let summary = analyse_html(r#"<a href="mailto:x@y.z"></a><a href="tel:1"></a>"#, &url());
        assert_eq!(summary.link_count(), 0);
    }

    #[test]
    fn test_login_form_detected() {
        let html = r#"
            <form action="/search"><input type="text" name="q"></form>
            <form action="/session"><input type="email"><input type="password"></form>
        "#;
        let summary = analyse_html(html, &url());
        assert!(summary.has_login_form());
    }

    #[test]
    fn test_later_forms_do_not_reset_login_flag() {
        let html = r#"
            <form action="/login"></form>
            <form action="/signup"><input type="email"><input type="password"></form>
        "#;
        assert!(analyse_html(html, &url()).has_login_form());
    }

    #[test]
    fn test_first_title_wins() {
        let html = "<html><head><title>Head title</title></head><body><svg><title>Icon</title></svg></body></html>";
        let summary = analyse_html(html, &url());
        assert_eq!(summary.title(), Some("Head title"));
    }

    #[test]
    fn test_children_of_unhandled_elements_are_visited() {
        let html = "<main><section><article><div><h3>Deep</h3></div></article></section></main>";
        assert_eq!(analyse_html(html, &url()).header_count("h3"), 1);
    }

    #[test]
    fn test_deeply_nested_input_does_not_overflow() {
        let depth = 5_000;
        let mut html = "<div>".repeat(depth);
        html.push_str("<h4>bottom</h4>");
        html.push_str(&"</div>".repeat(depth));

        let summary = analyse_html(&html, &url());
        assert_eq!(summary.header_count("h4"), 1);
    }

    #[test]
    fn test_analyse_document_matches_analyse_html() {
        let html = "<!DOCTYPE html><title>Same</title><a href='https://other.org'>o</a>";
        let doc = Document::parse(html).unwrap();
        assert_eq!(analyse_document(&doc, &url()), analyse_html(html, &url()));
    }
}
