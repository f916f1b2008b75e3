//! The node tree.

use crate::document::HtmlDocument;
use crate::element::Element;
use crate::fragment::Fragment;
use crate::text::{RawText, Text};
use tessera_core::Builder;

/// A renderable unit of an HTML document.
///
/// The variants are a closed set and rendering dispatches with an
/// exhaustive match, so adding a variant without a render arm is a
/// compile error.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(Text),
    Raw(RawText),
    Fragment(Fragment),
    Document(HtmlDocument),
}

impl Node {
    /// Serialize this node into the builder's buffer.
    pub fn to_html(&self, builder: &mut Builder) {
        match self {
            Node::Element(element) => element.to_html(builder),
            Node::Text(text) => text.to_html(builder),
            Node::Raw(raw) => raw.to_html(builder),
            Node::Fragment(fragment) => fragment.to_html(builder),
            Node::Document(document) => document.to_html(builder),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<RawText> for Node {
    fn from(raw: RawText) -> Self {
        Node::Raw(raw)
    }
}

impl From<Fragment> for Node {
    fn from(fragment: Fragment) -> Self {
        Node::Fragment(fragment)
    }
}

impl From<HtmlDocument> for Node {
    fn from(document: HtmlDocument) -> Self {
        Node::Document(document)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::Text(Text::new(content))
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::Text(Text::new(content))
    }
}
