//! Syntactic URL gate applied to user input before anything is fetched.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^http(s?)(://)((www\.)?)(([^.]+)\.)?([a-zA-Z0-9\-_]+)(\.[a-zA-Z0-9\-_]+)(/[^\s]*)?")
        .expect("url pattern is valid")
});

/// Returns true when `input` looks like an `http(s)://host.tld[/path]` URL.
///
/// This is a cheap shape check, not a parser: it rejects bare hostnames,
/// missing or misspelled schemes, and hosts without a dot.
///
/// # Example
///
/// ```rust
/// use web_analyser_core::is_valid_url;
///
/// assert!(is_valid_url("https://www.rust-lang.org/learn"));
/// assert!(!is_valid_url("www.rust-lang.org"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    URL_RE.is_match(input.trim())
}
