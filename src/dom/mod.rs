//! The slice of a host document the startup sequence touches.

mod headless;
#[cfg(target_arch = "wasm32")]
mod web;

pub use headless::{HeadlessDocument, HeadlessElement};
#[cfg(target_arch = "wasm32")]
pub use web::{BrowserDocument, BrowserElement};

use crate::error::HostError;

/// A rendered tree handed to [`Element::append`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    pub fn element<T: Into<String>>(tag: T) -> Self {
        Self::Element {
            tag: tag.into(),
            attrs: vec![],
            children: vec![],
        }
    }

    pub fn text<T: Into<String>>(text: T) -> Self {
        Self::Text(text.into())
    }

    pub fn attr<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.push((key.into(), value.into()));
        }
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }
}

pub trait Element: Clone {
    fn append(&self, node: &Node) -> Result<(), HostError>;

    /// Removes every child.
    fn clear(&self) -> Result<(), HostError>;
}

pub trait Document {
    type Element: Element;

    /// First element in document order matching `selector`.
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Element>, HostError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_ignores_attrs_on_text() {
        let n = Node::text("hi").attr("id", "x").child(Node::text("y"));
        assert_eq!(n, Node::Text("hi".into()));
    }

    #[test]
    fn builder_keeps_order() {
        let n = Node::element("ul")
            .attr("class", "list")
            .child(Node::element("li").child(Node::text("a")))
            .child(Node::element("li").child(Node::text("b")));
        match n {
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                assert_eq!(tag, "ul");
                assert_eq!(attrs, vec![("class".to_owned(), "list".to_owned())]);
                assert_eq!(children.len(), 2);
            }
            Node::Text(_) => panic!("expected element"),
        }
    }
}
