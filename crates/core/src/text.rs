use ego_tree::NodeRef;
use scraper::Node;

/// Returns the text under `node`.
///
/// A text node yields its own content. An element yields the concatenation,
/// in document order, of every text node below it. Any other kind of node
/// (doctype, comment, processing instruction) yields an empty string.
pub fn extract_text(node: NodeRef<'_, Node>) -> String {
    match node.value() {
        Node::Text(text) => String::from(&**text),
        Node::Element(_) => node
            .descendants()
            .filter_map(|n| n.value().as_text())
            .map(|t| &**t)
            .collect(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    fn first_element<'a>(doc: &'a Document, tag: &str) -> NodeRef<'a, Node> {
        doc.html()
            .tree
            .root()
            .descendants()
            .find(|n| n.value().as_element().is_some_and(|e| e.name() == tag))
            .unwrap()
    }

    #[test]
    fn test_text_of_nested_element() {
        let doc =
            Document::parse("<html><p>Halo, <b>wie geht's</b>. It means, \"Hello, how are you\".</p></html>").unwrap();
        let p = first_element(&doc, "p");
        assert_eq!(extract_text(p), "Halo, wie geht's. It means, \"Hello, how are you\".");
    }

    #[test]
    fn test_empty_element_has_no_text() {
        let doc = Document::parse("<html><p></p></html>").unwrap();
        assert_eq!(extract_text(first_element(&doc, "p")), "");
    }

    #[test]
    fn test_comments_contribute_nothing() {
        let doc = Document::parse("<div>a<!-- hidden -->b</div>").unwrap();
        assert_eq!(extract_text(first_element(&doc, "div")), "ab");
    }

    #[test]
    fn test_text_node_returns_its_content() {
        let doc = Document::parse("<title>Hello</title>").unwrap();
        let title = first_element(&doc, "title");
        let text = title.first_child().unwrap();
        assert_eq!(extract_text(text), "Hello");
    }

    #[test]
    fn test_doctype_yields_empty() {
        let doc = Document::parse("<!DOCTYPE html><html></html>").unwrap();
        let doctype = doc.html().tree.root().first_child().unwrap();
        assert!(doctype.value().is_doctype());
        assert_eq!(extract_text(doctype), "");
    }
}
