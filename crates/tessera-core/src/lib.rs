//! Tessera core
//!
//! The rendering machinery shared by every tessera output format: the
//! accumulating [`Builder`] buffer, the [`RenderOptions`] threaded through
//! a render pass, the pluggable [`DiagnosticSink`], and the vocabulary
//! types for attributes and class names.
//!
//! A render pass is a synchronous depth-first walk that writes serialized
//! output into a single builder and hands the finished string back. The
//! diagnostic sink is the only side channel: recoverable problems are
//! reported there and rendering always runs to completion.

pub mod builder;
pub mod class;
pub mod sink;

pub use builder::{Builder, EmptyElementStyle, RenderOptions};
pub use class::{class_names, ClassArg, ClassName, Classes};
pub use sink::{DiagnosticSink, MemorySink, StderrSink};

use indexmap::IndexMap;

/// An HTML tag name ("div", "span", ...).
pub type Tag = String;

/// A single HTML attribute, e.g. `{key: "href", value: "/about"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub key: String,
    pub value: String,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A map of HTML attributes. Keys are unique and insertion order is
/// preserved; writing an existing key replaces its value in place.
pub type Attrs = IndexMap<String, String>;

/// Shorthand for an `id` attribute.
pub fn id(id: impl Into<String>) -> Attr {
    Attr::new("id", id)
}

/// Merge `src` into `dst`, replacing values for duplicate keys.
/// Existing keys keep their original position.
pub fn merge_attrs(dst: &mut Attrs, src: Attrs) {
    dst.extend(src);
}
