//! The string-building render context.
//!
//! A [`Builder`] is exclusively owned by a single render pass: the tree
//! walk writes serialized output into its buffer and the finished string
//! is taken out with [`Builder::into_string`]. Rendering independent
//! trees concurrently requires one builder per tree.

use crate::sink::DiagnosticSink;
use crate::Attrs;
use std::fmt;

/// How childless elements are serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyElementStyle {
    /// HTML5 semantics: void tags emit only an opening tag (`<br>`) and
    /// other childless tags emit an explicit closing tag (`<div></div>`).
    #[default]
    ExplicitClose,
    /// XML-flavored output: every childless tag self-closes (`<br />`,
    /// `<div />`).
    SelfClose,
}

/// Rendering configuration threaded through the tree walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Sort attribute keys lexicographically for reproducible output, at
    /// the cost of a sort pass per element. Off by default; the unsorted
    /// order is the insertion order of the attribute map.
    pub deterministic_attrs: bool,
    /// Serialization of childless elements.
    pub empty_elements: EmptyElementStyle,
}

/// Accumulates serialized output during a render pass.
pub struct Builder<'s> {
    buf: String,
    pub options: RenderOptions,
    sink: &'s mut dyn DiagnosticSink,
}

impl<'s> Builder<'s> {
    pub fn new(options: RenderOptions, sink: &'s mut dyn DiagnosticSink) -> Self {
        Self {
            buf: String::new(),
            options,
            sink,
        }
    }

    /// Report a recoverable problem to the diagnostic sink.
    pub fn report(&mut self, error: &dyn fmt::Display) {
        self.sink.report(&error.to_string());
    }

    pub fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Write ` key="value"` for every attribute. Insertion order, unless
    /// deterministic attributes are enabled, in which case keys are
    /// sorted first.
    pub fn write_attrs(&mut self, attrs: &Attrs) {
        if self.options.deterministic_attrs {
            let mut pairs: Vec<_> = attrs.iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(b.0));
            for (key, value) in pairs {
                self.write_attr(key, value);
            }
        } else {
            for (key, value) in attrs {
                self.write_attr(key, value);
            }
        }
    }

    fn write_attr(&mut self, key: &str, value: &str) {
        self.push(' ');
        self.push_str(key);
        self.push_str("=\"");
        self.push_str(value);
        self.push('"');
    }

    pub fn write_opening_tag(&mut self, tag: &str, attrs: &Attrs) {
        self.push('<');
        self.push_str(tag);
        self.write_attrs(attrs);
        self.push('>');
    }

    pub fn write_closing_tag(&mut self, tag: &str) {
        self.push_str("</");
        self.push_str(tag);
        self.push('>');
    }

    /// Write a void tag (`<br>`). Void tags have no closing form.
    pub fn write_void_tag(&mut self, tag: &str, attrs: &Attrs) {
        self.write_opening_tag(tag, attrs);
    }

    /// Write a self-closing tag (`<br />`).
    pub fn write_self_closing_tag(&mut self, tag: &str, attrs: &Attrs) {
        self.push('<');
        self.push_str(tag);
        self.write_attrs(attrs);
        self.push_str(" />");
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
