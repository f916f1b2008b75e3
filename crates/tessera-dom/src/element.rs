//! Tag elements and their fluent builder.

use crate::node::Node;
use crate::text::Text;
use crate::void::is_void_tag;
use tessera_core::{
    class_names, merge_attrs, Attr, Attrs, Builder, ClassArg, ClassName, Classes,
    EmptyElementStyle, Tag,
};

/// A recoverable problem recorded while constructing a node. Recorded
/// errors are flushed to the diagnostic sink when the node is rendered;
/// rendering proceeds as if the offending argument had been omitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("Void element <{0}> cannot have children")]
    VoidWithChildren(Tag),
}

/// A node that renders to a single HTML tag with optional attributes and
/// children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub attrs: Attrs,
    pub children: Vec<Node>,
    errors: Vec<NodeError>,
}

impl Element {
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Set a single attribute, replacing any existing value for the key.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Apply a prebuilt attribute pair (see [`tessera_core::id`]).
    pub fn with(mut self, attr: Attr) -> Self {
        self.attrs.insert(attr.key, attr.value);
        self
    }

    /// Merge an attribute map into the element. Later values win for
    /// duplicate keys.
    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.assign_attrs(attrs);
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.push_child(child.into());
        self
    }

    /// Append several children in order.
    pub fn children(mut self, children: Vec<Node>) -> Self {
        self.assign_children(children);
        self
    }

    /// Append an escaped text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Text::new(content))
    }

    /// Append a class name to the `class` attribute.
    pub fn class(mut self, name: impl Into<ClassName>) -> Self {
        self.merge_class_arg(ClassArg::Name(name.into().0));
        self
    }

    /// Merge a conditional class set into the `class` attribute.
    pub fn classes(mut self, classes: Classes) -> Self {
        self.merge_class_arg(ClassArg::Conditional(classes));
        self
    }

    /// Merge new attributes into the element in place, replacing values
    /// for keys that already exist.
    pub fn assign_attrs(&mut self, attrs: Attrs) {
        merge_attrs(&mut self.attrs, attrs);
    }

    /// Append more children to the end of the element in place.
    pub fn assign_children(&mut self, children: Vec<Node>) {
        for child in children {
            self.push_child(child);
        }
    }

    /// Problems recorded during construction.
    pub fn errors(&self) -> &[NodeError] {
        &self.errors
    }

    fn push_child(&mut self, child: Node) {
        // Children on a void tag are dropped; the error surfaces through
        // the sink at render time.
        if is_void_tag(&self.tag) {
            self.errors.push(NodeError::VoidWithChildren(self.tag.clone()));
            return;
        }
        self.children.push(child);
    }

    fn merge_class_arg(&mut self, arg: ClassArg) {
        let existing = self.attrs.get("class").cloned().unwrap_or_default();
        let merged = class_names([ClassArg::Name(existing), arg]);
        self.attrs.insert("class".to_string(), merged);
    }

    /// Serialize this element into the builder's buffer.
    pub fn to_html(&self, builder: &mut Builder) {
        for error in &self.errors {
            builder.report(error);
        }

        if !self.children.is_empty() {
            builder.write_opening_tag(&self.tag, &self.attrs);
            for child in &self.children {
                child.to_html(builder);
            }
            builder.write_closing_tag(&self.tag);
        } else if is_void_tag(&self.tag) {
            match builder.options.empty_elements {
                EmptyElementStyle::ExplicitClose => builder.write_void_tag(&self.tag, &self.attrs),
                EmptyElementStyle::SelfClose => {
                    builder.write_self_closing_tag(&self.tag, &self.attrs)
                }
            }
        } else {
            match builder.options.empty_elements {
                EmptyElementStyle::ExplicitClose => {
                    builder.write_opening_tag(&self.tag, &self.attrs);
                    builder.write_closing_tag(&self.tag);
                }
                EmptyElementStyle::SelfClose => {
                    builder.write_self_closing_tag(&self.tag, &self.attrs)
                }
            }
        }
    }
}
