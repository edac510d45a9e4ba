//! Library API integration tests
use url::Url;
use web_analyser_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).expect("fixture should exist")
}

fn login_page_url() -> Url {
    Url::parse("https://example.com/login").unwrap()
}

#[test]
fn test_analyse_login_page() {
    let summary = analyse_html(&read_fixture("login_page.html"), &login_page_url());

    assert_eq!(summary.version(), "HTML 5");
    assert_eq!(summary.title(), Some("Sign in to Example"));
    assert_eq!(summary.header_count("h1"), 1);
    assert_eq!(summary.header_count("h2"), 2);
    assert_eq!(summary.header_counts().len(), 2);
    assert!(summary.has_login_form());
}

#[test]
fn test_login_page_links() {
    let summary = analyse_html(&read_fixture("login_page.html"), &login_page_url());

    let internal: Vec<&str> = summary.internal_links().iter().map(String::as_str).collect();
    assert_eq!(internal, vec!["/", "/account/new#form", "/pricing", "https://example.com/docs"]);

    let external: Vec<&str> = summary.external_links().iter().map(String::as_str).collect();
    assert_eq!(external, vec!["https://github.com/example", "https://status.example.net/"]);

    let inaccessible: Vec<&str> = summary.inaccessible_links().iter().map(String::as_str).collect();
    assert_eq!(inaccessible, vec!["http://[fe80::1"]);
}

#[test]
fn test_link_sets_are_disjoint() {
    let summary = analyse_html(&read_fixture("login_page.html"), &login_page_url());

    for link in summary.internal_links() {
        assert!(!summary.external_links().contains(link));
        assert!(!summary.inaccessible_links().contains(link));
    }
    for link in summary.external_links() {
        assert!(!summary.inaccessible_links().contains(link));
    }

    let all = [summary.internal_links(), summary.external_links(), summary.inaccessible_links()];
    for set in all {
        assert!(set.iter().all(|l| !l.starts_with("mailto") && !l.starts_with("tel") && !l.starts_with("javascript")));
    }
}

#[test]
fn test_same_page_other_host_flips_classification() {
    let html = read_fixture("login_page.html");
    let summary = analyse_html(&html, &Url::parse("https://github.com/").unwrap());

    assert!(summary.internal_links().contains("https://github.com/example"));
    assert!(summary.external_links().contains("https://example.com/docs"));
}

#[test]
fn test_analyse_legacy_xhtml() {
    let url = Url::parse("http://intranet.example.org/portal/").unwrap();
    let summary = analyse_html(&read_fixture("legacy_xhtml.html"), &url);

    assert_eq!(summary.version(), "XHTML 1.0");
    assert_eq!(summary.title(), Some("Legacy Portal"));
    assert_eq!(summary.header_count("h1"), 1);
    assert_eq!(summary.header_count("h3"), 2);
    assert_eq!(summary.header_count("h2"), 0);
    assert_eq!(summary.internal_links().len(), 2);
    assert!(!summary.has_login_form(), "registration forms never count as login");
}

#[test]
fn test_malformed_markup_still_analysed() {
    let url = Url::parse("https://example.com/").unwrap();
    let summary = analyse_html(&read_fixture("malformed_html.html"), &url);

    assert_eq!(summary.version(), "HTML 5");
    assert_eq!(summary.title(), Some("Unclosed tags"));
    assert_eq!(summary.header_count("h1"), 1);
    assert_eq!(summary.header_count("h2"), 1);
    assert!(summary.internal_links().contains("/one"));
    assert!(summary.external_links().contains("https://elsewhere.org/two"));
    assert!(summary.has_login_form());
}

#[test]
fn test_document_api() {
    let doc = Document::parse(&read_fixture("legacy_xhtml.html")).expect("should parse");

    let doctype = doc.doctype().expect("doctype present");
    assert_eq!(detect_version(doctype), "xhtml 1.0");

    let summary = analyse_document(&doc, &Url::parse("http://intranet.example.org/").unwrap());
    assert_eq!(summary.version(), "XHTML 1.0");
}

#[test]
fn test_walk_subtree_only() {
    let doc = Document::parse("<div id='a'><h1>in</h1></div><h1>out</h1>").unwrap();
    let div = doc
        .root()
        .descendants()
        .find(|n| n.value().as_element().is_some_and(|e| e.id() == Some("a")))
        .unwrap();

    let mut summary = Summary::new(Url::parse("https://example.com/").unwrap());
    walk(&mut summary, div);
    assert_eq!(summary.header_count("h1"), 1);
}

#[test]
fn test_output_formats() {
    let summary = analyse_html(&read_fixture("login_page.html"), &login_page_url());

    let json = convert_to_json(&summary, &JsonConfig { pretty: true }).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["has_login_form"], true);
    assert_eq!(value["header_counts"]["h2"], 2);

    let text = convert_to_text(&summary, &TextConfig { list_links: true }).unwrap();
    assert!(text.starts_with("Sign in to Example"));
    assert!(text.contains("    - http://[fe80::1"));
}

#[test]
fn test_fetch_file_then_analyse() {
    let html = fetch_file(&get_fixture_path("legacy_xhtml.html")).unwrap();
    let summary = analyse_html(&html, &Url::parse("http://intranet.example.org/").unwrap());
    assert_eq!(summary.title(), Some("Legacy Portal"));
}

#[test]
fn test_url_gate() {
    assert!(is_valid_url("https://example.com/login"));
    assert!(!is_valid_url("example.com/login"));
}
