use std::{
    cell::{Cell, RefCell},
    fmt::Write,
    rc::Rc,
};

use super::{Document, Element, Node};
use crate::error::HostError;

enum Child {
    Element(HeadlessElement),
    Text(String),
}

struct ElementData {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Child>,
    mutations: Rc<Cell<usize>>,
}

/// In-memory element. Clones share the same node.
#[derive(Clone)]
pub struct HeadlessElement(Rc<RefCell<ElementData>>);

impl HeadlessElement {
    fn new(tag: &str, attrs: Vec<(String, String)>, mutations: Rc<Cell<usize>>) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.to_owned(),
            attrs,
            children: vec![],
            mutations,
        })))
    }

    fn build(node: &Node, mutations: &Rc<Cell<usize>>) -> Child {
        match node {
            Node::Text(t) => Child::Text(t.clone()),
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                let el = Self::new(tag, attrs.clone(), mutations.clone());
                {
                    let mut data = el.0.borrow_mut();
                    for c in children {
                        data.children.push(Self::build(c, mutations));
                    }
                }
                Child::Element(el)
            }
        }
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn attr(&self, key: &str) -> Option<String> {
        self.0
            .borrow()
            .attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut s = String::new();
        self.collect_text(&mut s);
        s
    }

    fn collect_text(&self, out: &mut String) {
        for c in &self.0.borrow().children {
            match c {
                Child::Text(t) => out.push_str(t),
                Child::Element(e) => e.collect_text(out),
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut s = String::new();
        self.write_html(&mut s);
        s
    }

    fn write_html(&self, out: &mut String) {
        let data = self.0.borrow();
        let _ = write!(out, "<{}", data.tag);
        for (k, v) in &data.attrs {
            let _ = write!(out, " {}=\"{}\"", k, escape(v, true));
        }
        out.push('>');
        for c in &data.children {
            match c {
                Child::Text(t) => out.push_str(&escape(t, false)),
                Child::Element(e) => e.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", data.tag);
    }

    fn matches(&self, selector: &Selector) -> bool {
        let data = self.0.borrow();
        match selector {
            Selector::Id(id) => data.attrs.iter().any(|(k, v)| k == "id" && v == id),
            Selector::Class(class) => data
                .attrs
                .iter()
                .any(|(k, v)| k == "class" && v.split_whitespace().any(|c| c == class)),
            Selector::Tag(tag) => data.tag.eq_ignore_ascii_case(tag),
        }
    }

    fn find(&self, selector: &Selector) -> Option<HeadlessElement> {
        if self.matches(selector) {
            return Some(self.clone());
        }
        let data = self.0.borrow();
        let found = data.children.iter().find_map(|c| match c {
            Child::Element(e) => e.find(selector),
            Child::Text(_) => None,
        });
        found
    }
}

impl Element for HeadlessElement {
    fn append(&self, node: &Node) -> Result<(), HostError> {
        let mut data = self.0.borrow_mut();
        let child = Self::build(node, &data.mutations);
        data.children.push(child);
        data.mutations.set(data.mutations.get() + 1);
        Ok(())
    }

    fn clear(&self) -> Result<(), HostError> {
        let mut data = self.0.borrow_mut();
        if !data.children.is_empty() {
            data.children.clear();
            data.mutations.set(data.mutations.get() + 1);
        }
        Ok(())
    }
}

fn escape(s: &str, attr: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

enum Selector {
    Id(String),
    Class(String),
    Tag(String),
}

impl Selector {
    fn parse(s: &str) -> Result<Self, HostError> {
        let valid = |name: &str| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };
        let selector = if let Some(id) = s.strip_prefix('#') {
            valid(id).then(|| Selector::Id(id.to_owned()))
        } else if let Some(class) = s.strip_prefix('.') {
            valid(class).then(|| Selector::Class(class.to_owned()))
        } else {
            valid(s).then(|| Selector::Tag(s.to_owned()))
        };
        selector.ok_or_else(|| HostError::InvalidSelector(s.to_owned()))
    }
}

/// A document held in memory, rooted at `<body>`.
pub struct HeadlessDocument {
    body: HeadlessElement,
    mutations: Rc<Cell<usize>>,
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDocument {
    pub fn new() -> Self {
        let mutations = Rc::new(Cell::new(0));
        Self {
            body: HeadlessElement::new("body", vec![], mutations.clone()),
            mutations,
        }
    }

    /// A document whose body holds a single empty `<div id="{id}">`.
    pub fn with_attachment_point(id: &str) -> Self {
        let doc = Self::new();
        let mut data = doc.body.0.borrow_mut();
        data.children.push(Child::Element(HeadlessElement::new(
            "div",
            vec![("id".to_owned(), id.to_owned())],
            doc.mutations.clone(),
        )));
        drop(data);
        doc
    }

    /// A document whose body holds a single empty element that `selector`
    /// matches: `<div id>` for `#id`, `<div class>` for `.class`, or the
    /// bare tag itself.
    pub fn for_selector(selector: &str) -> Result<Self, HostError> {
        let (tag, attrs) = match Selector::parse(selector)? {
            Selector::Id(id) => ("div".to_owned(), vec![("id".to_owned(), id)]),
            Selector::Class(class) => ("div".to_owned(), vec![("class".to_owned(), class)]),
            Selector::Tag(tag) => (tag.to_ascii_lowercase(), vec![]),
        };
        let doc = Self::new();
        let el = HeadlessElement::new(&tag, attrs, doc.mutations.clone());
        doc.body.0.borrow_mut().children.push(Child::Element(el));
        Ok(doc)
    }

    pub fn body(&self) -> &HeadlessElement {
        &self.body
    }

    /// Number of mutations applied through [`Element`] since creation.
    pub fn mutation_count(&self) -> usize {
        self.mutations.get()
    }

    pub fn to_html(&self) -> String {
        self.body.to_html()
    }
}

impl Document for HeadlessDocument {
    type Element = HeadlessElement;

    fn query_selector(&self, selector: &str) -> Result<Option<HeadlessElement>, HostError> {
        let selector = Selector::parse(selector)?;
        Ok(self.body.find(&selector))
    }
}
