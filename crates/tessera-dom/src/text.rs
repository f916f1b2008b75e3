//! Text nodes.
//!
//! [`Text`] escapes HTML-significant characters at render time so
//! arbitrary strings cannot inject markup. [`RawText`] opts out for
//! trusted content such as inline scripts and styles.

use tessera_core::Builder;

/// A text node, escaped when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn to_html(&self, builder: &mut Builder) {
        for c in self.content.chars() {
            match c {
                '&' => builder.push_str("&amp;"),
                '<' => builder.push_str("&lt;"),
                '>' => builder.push_str("&gt;"),
                _ => builder.push(c),
            }
        }
    }
}

/// A text node emitted verbatim, with no escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText {
    pub content: String,
}

impl RawText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn to_html(&self, builder: &mut Builder) {
        builder.push_str(&self.content);
    }
}

/// Create an escaped text node.
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

/// Create a verbatim text node.
pub fn raw(content: impl Into<String>) -> RawText {
    RawText::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tessera_core::{Builder, MemorySink, RenderOptions};

    fn render_text(node: &Text) -> String {
        let mut sink = MemorySink::new();
        let mut builder = Builder::new(RenderOptions::default(), &mut sink);
        node.to_html(&mut builder);
        builder.into_string()
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(render_text(&text("Hello world")), "Hello world");
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(
            render_text(&text("a < b && c > d")),
            "a &lt; b &amp;&amp; c &gt; d",
        );
    }

    #[test]
    fn test_raw_text_is_not_escaped() {
        let node = raw("<b>bold</b>");
        let mut sink = MemorySink::new();
        let mut builder = Builder::new(RenderOptions::default(), &mut sink);
        node.to_html(&mut builder);
        assert_eq!(builder.into_string(), "<b>bold</b>");
    }
}
