//! HTML parsing.
//!
//! This module provides the [`Document`] type, a thin wrapper over
//! `scraper::Html` that exposes the parsed node tree to the analyser.
//!
//! # Example
//!
//! ```rust
//! use web_analyser_core::Document;
//!
//! let html = r#"
//!     <!DOCTYPE html>
//!     <html>
//!         <head><title>Title</title></head>
//!         <body><h1>Heading</h1></body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! assert!(doc.doctype().is_some());
//! ```

use ego_tree::NodeRef;
use scraper::node::Doctype;
use scraper::{Html, Node};

use crate::Result;

/// Represents a parsed HTML document.
///
/// html5ever never rejects input, so parsing cannot fail on malformed
/// markup; missing tags are synthesised the way browsers do.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use web_analyser_core::Document;
    ///
    /// let doc = Document::parse("<html><body><h1>Title</h1></body></html>").unwrap();
    /// ```
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Gets the raw HTML representation.
    ///
    /// Returns a reference to the underlying `scraper::Html` instance.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// The document node at the top of the tree.
    pub fn root(&self) -> NodeRef<'_, Node> {
        self.html.tree.root()
    }

    /// The first doctype declaration, if the document has one.
    pub fn doctype(&self) -> Option<&Doctype> {
        self.root().children().find_map(|n| n.value().as_doctype())
    }
}
