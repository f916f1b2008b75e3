//! The document root.

use crate::element::Element;
use tessera_core::{Attrs, Builder};

/// The top of an HTML document: the `<!DOCTYPE html>` preamble plus an
/// `html` element wrapping the `head` and `body`.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlDocument {
    pub attrs: Attrs,
    pub head: Element,
    pub body: Element,
}

impl HtmlDocument {
    pub fn new(head: Element, body: Element) -> Self {
        Self {
            attrs: Attrs::new(),
            head,
            body,
        }
    }

    /// Set an attribute on the `html` element (e.g. `lang`).
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn to_html(&self, builder: &mut Builder) {
        builder.push_str("<!DOCTYPE html>\n");
        builder.write_opening_tag("html", &self.attrs);
        self.head.to_html(builder);
        self.body.to_html(builder);
        builder.write_closing_tag("html");
    }
}

/// Create a document root from a `head` and a `body` element.
pub fn html(head: Element, body: Element) -> HtmlDocument {
    HtmlDocument::new(head, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::render_html_opts;
    use crate::tags::{body, head};
    use pretty_assertions::assert_eq;
    use tessera_core::RenderOptions;

    #[test]
    fn test_renders_doctype_and_root_attrs() {
        let node: Node = html(head(), body()).attr("lang", "en").into();
        let options = RenderOptions {
            deterministic_attrs: true,
            ..RenderOptions::default()
        };
        let result = render_html_opts(&node, options, None);
        assert_eq!(
            result,
            "<!DOCTYPE html>\n<html lang=\"en\"><head></head><body></body></html>",
        );
    }
}
