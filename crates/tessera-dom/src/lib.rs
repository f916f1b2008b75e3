//! Tessera DOM
//!
//! In-memory HTML node trees and their serializer. Pages are built from
//! [`Node`] values — tag elements, text, fragments, and the document
//! root — then rendered to a string in a single depth-first pass.
//!
//! ```
//! use tessera_dom::{html, render_html, tags, Node};
//!
//! let page: Node = html(
//!     tags::head().child(tags::title().text("My Doc")),
//!     tags::body().child(tags::div().text("hello")),
//! )
//! .into();
//!
//! assert_eq!(
//!     render_html(&page),
//!     "<!DOCTYPE html>\n<html><head><title>My Doc</title></head><body><div>hello</div></body></html>",
//! );
//! ```

pub mod document;
pub mod element;
pub mod fragment;
pub mod meta;
pub mod node;
pub mod tags;
pub mod text;
pub mod void;

pub use document::{html, HtmlDocument};
pub use element::{Element, NodeError};
pub use fragment::{fragment, Fragment};
pub use node::Node;
pub use text::{raw, text, RawText, Text};
pub use void::is_void_tag;

use tessera_core::{Builder, DiagnosticSink, RenderOptions, StderrSink};

/// Render a node to an HTML string with the default settings. See
/// [`render_html_opts`] for more fine-grained control.
pub fn render_html(node: &Node) -> String {
    render_html_opts(node, RenderOptions::default(), None)
}

/// Render a node to an HTML string with explicit [`RenderOptions`] and an
/// optional diagnostic sink. A `None` sink reports to stderr.
pub fn render_html_opts(
    node: &Node,
    options: RenderOptions,
    sink: Option<&mut dyn DiagnosticSink>,
) -> String {
    let mut stderr = StderrSink;
    let sink: &mut dyn DiagnosticSink = match sink {
        Some(sink) => sink,
        None => &mut stderr,
    };
    let mut builder = Builder::new(options, sink);
    node.to_html(&mut builder);
    builder.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{body, div, head, span, title};
    use pretty_assertions::assert_eq;
    use tessera_core::{Attrs, EmptyElementStyle, MemorySink};

    fn deterministic() -> RenderOptions {
        RenderOptions {
            deterministic_attrs: true,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_render_text_with_default_options() {
        let node: Node = "Hello world".into();
        assert_eq!(render_html(&node), "Hello world");
    }

    #[test]
    fn test_render_div_with_attrs_and_children() {
        let node: Node = div().attr("class", "foo").text("bar").into();
        let result = render_html_opts(&node, deterministic(), None);
        assert_eq!(result, "<div class=\"foo\">bar</div>");
    }

    #[test]
    fn test_deterministic_attribute_ordering() {
        let node: Node = div()
            .attrs(Attrs::from([
                ("hello".to_string(), "world".to_string()),
                ("foo".to_string(), "bar".to_string()),
            ]))
            .into();
        let result = render_html_opts(&node, deterministic(), None);
        assert_eq!(result, "<div foo=\"bar\" hello=\"world\"></div>");
    }

    #[test]
    fn test_self_close_option() {
        let options = RenderOptions {
            deterministic_attrs: true,
            empty_elements: EmptyElementStyle::SelfClose,
        };
        let node: Node = div().attr("foo", "bar").into();
        let result = render_html_opts(&node, options, None);
        assert_eq!(result, "<div foo=\"bar\" />");
    }

    #[test]
    fn test_end_to_end_document() {
        let page: Node = html(
            head().child(title().text("My Doc")),
            body().child(div().text("hello")),
        )
        .into();
        let mut sink = MemorySink::new();
        let result = render_html_opts(&page, RenderOptions::default(), Some(&mut sink));
        assert_eq!(
            result,
            "<!DOCTYPE html>\n<html><head><title>My Doc</title></head><body><div>hello</div></body></html>",
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_fragment_transparency() {
        let node: Node = fragment(vec![
            span().text("Foo").into(),
            div().text("Bar").into(),
        ])
        .into();
        assert_eq!(render_html(&node), "<span>Foo</span><div>Bar</div>");
    }
}
