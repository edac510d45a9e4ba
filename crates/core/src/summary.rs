//! The analysis result and its accumulation operations.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use url::Url;

use crate::links::LinkKind;

/// Version label used until a doctype is seen.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Structured summary of one HTML page.
///
/// A Summary is created empty for a source URL and filled in by a single
/// traversal. Every field only moves forward: counts grow, sets collect
/// unique hrefs, and the login flag never goes back to `false`.
///
/// # Example
///
/// ```rust
/// use url::Url;
/// use web_analyser_core::Summary;
///
/// let mut summary = Summary::new(Url::parse("https://example.com").unwrap());
/// summary.increment_header_count("h1");
/// summary.add_internal_link("/about");
/// summary.add_internal_link("/about");
///
/// assert_eq!(summary.header_count("h1"), 1);
/// assert_eq!(summary.internal_links().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    source_url: Url,
    version: String,
    title: Option<String>,
    header_counts: BTreeMap<String, usize>,
    internal_links: BTreeSet<String>,
    external_links: BTreeSet<String>,
    inaccessible_links: BTreeSet<String>,
    has_login_form: bool,
}

impl Summary {
    pub fn new(source_url: Url) -> Self {
        Self {
            source_url,
            version: UNKNOWN_VERSION.to_string(),
            title: None,
            header_counts: BTreeMap::new(),
            internal_links: BTreeSet::new(),
            external_links: BTreeSet::new(),
            inaccessible_links: BTreeSet::new(),
            has_login_form: false,
        }
    }

    /// URL of the analysed page.
    pub fn source_url(&self) -> &Url {
        &self.source_url
    }

    /// Markup version label, e.g. `HTML 5` or `XHTML BASIC 1.1`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Text of the first `<title>` element, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn header_counts(&self) -> &BTreeMap<String, usize> {
        &self.header_counts
    }

    /// Number of times `tag` was seen; zero for tags never observed.
    pub fn header_count(&self, tag: &str) -> usize {
        self.header_counts.get(tag).copied().unwrap_or(0)
    }

    pub fn internal_links(&self) -> &BTreeSet<String> {
        &self.internal_links
    }

    pub fn external_links(&self) -> &BTreeSet<String> {
        &self.external_links
    }

    pub fn inaccessible_links(&self) -> &BTreeSet<String> {
        &self.inaccessible_links
    }

    pub fn has_login_form(&self) -> bool {
        self.has_login_form
    }

    /// Overwrites the version. The last doctype in document order wins.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    /// Records the page title. Only the first call has an effect.
    pub fn set_title(&mut self, title: impl Into<String>) {
        if self.title.is_none() {
            self.title = Some(title.into());
        }
    }

    pub fn increment_header_count(&mut self, tag: &str) {
        *self.header_counts.entry(tag.to_string()).or_insert(0) += 1;
    }

    pub fn add_internal_link(&mut self, link: &str) {
        insert_link(&mut self.internal_links, link);
    }

    pub fn add_external_link(&mut self, link: &str) {
        insert_link(&mut self.external_links, link);
    }

    pub fn add_inaccessible_link(&mut self, link: &str) {
        insert_link(&mut self.inaccessible_links, link);
    }

    /// Adds `link` to the set matching `kind`. Ignored links are dropped.
    pub fn add_link(&mut self, kind: LinkKind, link: &str) {
        match kind {
            LinkKind::Internal => self.add_internal_link(link),
            LinkKind::External => self.add_external_link(link),
            LinkKind::Inaccessible => self.add_inaccessible_link(link),
            LinkKind::Ignored => {}
        }
    }

    /// Marks the page as containing a login form. There is no way to unset it.
    pub fn mark_login_form(&mut self) {
        self.has_login_form = true;
    }

    /// Total number of distinct links across all three sets.
    pub fn link_count(&self) -> usize {
        self.internal_links.len() + self.external_links.len() + self.inaccessible_links.len()
    }
}

fn insert_link(set: &mut BTreeSet<String>, link: &str) {
    if !set.contains(link) {
        set.insert(link.to_string());
    }
}
