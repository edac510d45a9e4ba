//! HTML version detection from the document type declaration.

use std::sync::LazyLock;

use regex::Regex;
use scraper::node::Doctype;

use crate::summary::UNKNOWN_VERSION;

/// Version assumed for an `html` doctype without a recognisable public identifier.
pub const HTML5_VERSION: &str = "html 5";

/// Matches `html 4.01`, `xhtml 1.0`, `xhtml basic 1.1` and friends inside a
/// lower-cased public identifier such as `-//w3c//dtd xhtml basic 1.1//en`.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|.*\s)((?:xhtml|html) (?:[a-z]+ )?[0-9]+(?:\.[0-9]+)?)").expect("version pattern is valid")
});

/// Infers the markup version label from a doctype node.
///
/// Returns `"unknown"` unless the doctype names `html`. A bare `<!DOCTYPE html>`
/// means HTML 5; legacy doctypes carry the version in their public identifier.
///
/// # Example
///
/// ```rust
/// use web_analyser_core::{Document, detect_version};
///
/// let doc = Document::parse(r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN"><html></html>"#).unwrap();
/// let doctype = doc.doctype().unwrap();
/// assert_eq!(detect_version(doctype), "html 4.01");
/// ```
pub fn detect_version(doctype: &Doctype) -> String {
    if !doctype.name().eq_ignore_ascii_case("html") {
        return UNKNOWN_VERSION.to_string();
    }

    let public_id = doctype.public_id();
    if public_id.is_empty() {
        return HTML5_VERSION.to_string();
    }

    version_from_public_id(public_id).unwrap_or_else(|| HTML5_VERSION.to_string())
}

/// Pulls the `(x)html <version>` token out of a public identifier.
pub fn version_from_public_id(public_id: &str) -> Option<String> {
    let lowered = public_id.to_lowercase();
    VERSION_RE
        .captures(&lowered)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
