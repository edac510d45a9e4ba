//! Hyperlink classification.
//!
//! An anchor's `href` is sorted into one of three buckets relative to the
//! page it was found on, or dropped when it points at a non-navigational
//! scheme:
//!
//! - **Internal**: relative paths, fragments, and absolute links to the same host.
//! - **External**: absolute links to any other host.
//! - **Inaccessible**: references that cannot be parsed at all, including
//!   broken percent-escapes and a colon in the first segment of a relative
//!   reference.
//!
//! Hrefs are parsed on their own, so a source URL that cannot act as a base
//! (such as `about:blank` for piped input) still yields internal relative links.

use serde::Serialize;
use url::{ParseError, Url};

/// Prefixes of hrefs that are not page links and are never recorded.
const IGNORED_PREFIXES: [&str; 3] = ["mailto", "tel", "javascript"];

/// Classification outcome for a single href.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Internal,
    External,
    Inaccessible,
    Ignored,
}

/// Classifies `href` as found on the page at `source_url`.
///
/// # Example
///
/// ```rust
/// use url::Url;
/// use web_analyser_core::{LinkKind, classify_link};
///
/// let page = Url::parse("https://example.com/blog/").unwrap();
/// assert_eq!(classify_link("/about", &page), LinkKind::Internal);
/// assert_eq!(classify_link("https://rust-lang.org", &page), LinkKind::External);
/// assert_eq!(classify_link("mailto:me@example.com", &page), LinkKind::Ignored);
/// assert_eq!(classify_link("http://[::1", &page), LinkKind::Inaccessible);
/// ```
pub fn classify_link(href: &str, source_url: &Url) -> LinkKind {
    if IGNORED_PREFIXES.iter().any(|prefix| href.starts_with(prefix)) {
        return LinkKind::Ignored;
    }
    if has_malformed_escape(href) {
        return LinkKind::Inaccessible;
    }

    let host = match Url::parse(href) {
        Ok(url) => url.host_str().map(str::to_owned),
        Err(ParseError::RelativeUrlWithoutBase) => match relative_host(href) {
            Ok(host) => host,
            Err(()) => return LinkKind::Inaccessible,
        },
        Err(_) => return LinkKind::Inaccessible,
    };

    match host {
        None => LinkKind::Internal,
        Some(host) if Some(host.as_str()) == source_url.host_str() => LinkKind::Internal,
        Some(_) => LinkKind::External,
    }
}

/// Host of a relative reference: only scheme-relative `//host/path` has one.
fn relative_host(href: &str) -> Result<Option<String>, ()> {
    let trimmed = href.trim();
    if trimmed.starts_with("//") {
        let url = Url::parse(&format!("http:{trimmed}")).map_err(|_| ())?;
        return Ok(url.host_str().map(str::to_owned));
    }

    let first_segment = trimmed.split(['/', '?', '#']).next().unwrap_or_default();
    if first_segment.contains(':') {
        return Err(());
    }
    Ok(None)
}

/// True when a `%` outside the query is not followed by two hex digits.
fn has_malformed_escape(href: &str) -> bool {
    let (before_fragment, fragment) = href.split_once('#').unwrap_or((href, ""));
    let path = before_fragment.split_once('?').map_or(before_fragment, |(path, _)| path);

    [path, fragment].iter().any(|part| {
        let bytes = part.as_bytes();
        bytes.iter().enumerate().any(|(i, &b)| {
            b == b'%'
                && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                    && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
        })
    })
}
