use super::{Document, Element, Node};
use crate::error::HostError;

#[derive(Clone)]
pub struct BrowserElement(web_sys::Element);

impl BrowserElement {
    pub fn raw(&self) -> &web_sys::Element {
        &self.0
    }
}

fn build(document: &web_sys::Document, node: &Node) -> Result<web_sys::Node, HostError> {
    match node {
        Node::Text(t) => Ok(document.create_text_node(t).into()),
        Node::Element {
            tag,
            attrs,
            children,
        } => {
            let el = document.create_element(tag)?;
            for (k, v) in attrs {
                el.set_attribute(k, v)?;
            }
            for c in children {
                el.append_child(&build(document, c)?)?;
            }
            Ok(el.into())
        }
    }
}

impl Element for BrowserElement {
    fn append(&self, node: &Node) -> Result<(), HostError> {
        let document = self.0.owner_document().ok_or(HostError::NoDocument)?;
        let child = build(&document, node)?;
        self.0.append_child(&child)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), HostError> {
        self.0.set_inner_html("");
        Ok(())
    }
}

pub struct BrowserDocument(web_sys::Document);

impl BrowserDocument {
    /// `window.document` of the running page.
    pub fn current() -> Result<Self, HostError> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self)
            .ok_or(HostError::NoDocument)
    }
}

impl Document for BrowserDocument {
    type Element = BrowserElement;

    fn query_selector(&self, selector: &str) -> Result<Option<BrowserElement>, HostError> {
        Ok(self.0.query_selector(selector)?.map(BrowserElement))
    }
}
