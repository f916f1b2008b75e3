//! Transparent node grouping.
//!
//! Sometimes sibling nodes need to travel as a single unit without
//! wrapping them in a `div` or `span` that would alter the generated
//! markup. A [`Fragment`] renders its children in order with no
//! enclosing tag.

use crate::node::Node;
use tessera_core::Builder;

/// A group of sibling nodes rendered without a wrapping element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    pub children: Vec<Node>,
}

impl Fragment {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Append more children to the end of the fragment.
    pub fn assign_children(&mut self, children: Vec<Node>) {
        self.children.extend(children);
    }

    pub fn to_html(&self, builder: &mut Builder) {
        for child in &self.children {
            child.to_html(builder);
        }
    }
}

/// Create a fragment from the given children.
pub fn fragment(children: Vec<Node>) -> Fragment {
    Fragment::new(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_html;
    use crate::tags::{div, span};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_renders_children_without_wrapper() {
        let node: Node = fragment(vec![
            span().text("Foo").into(),
            div().text("Bar").into(),
        ])
        .into();
        assert_eq!(render_html(&node), "<span>Foo</span><div>Bar</div>");
    }

    #[test]
    fn test_empty_fragment_renders_nothing() {
        let node: Node = Fragment::default().into();
        assert_eq!(render_html(&node), "");
    }

    #[test]
    fn test_assign_children_appends() {
        let mut fragment = fragment(vec![span().text("a").into()]);
        fragment.assign_children(vec![span().text("b").into()]);
        let node: Node = fragment.into();
        assert_eq!(render_html(&node), "<span>a</span><span>b</span>");
    }
}
