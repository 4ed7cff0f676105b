//! XML AST
//!
//! Owned document tree used for translation files.
//!
//! Text and attribute values are stored exactly as they appear in the source
//! (still escaped), so untouched content is written back unchanged.

use indexmap::IndexMap;

use super::{escape_text, escape_xml, unescape_xml};

/// Node type union
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(Text),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
    Declaration(Declaration),
    Doctype(String),
}

impl Node {
    pub fn text(unescaped: &str) -> Self {
        Node::Text(Text::new(unescaped))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// True for text nodes that only contain whitespace.
    pub fn is_whitespace(&self) -> bool {
        match self {
            Node::Text(text) => text.raw.chars().all(char::is_whitespace),
            _ => false,
        }
    }
}

/// XML Text node, raw (escaped) form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub raw: String,
}

impl Text {
    pub fn new(unescaped_value: &str) -> Self {
        Text {
            raw: escape_text(unescaped_value),
        }
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Text { raw: raw.into() }
    }

    pub fn value(&self) -> String {
        unescape_xml(&self.raw)
    }
}

/// XML Declaration node (`<?xml ... ?>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Everything between `<?` and `?>`, e.g. `xml version="1.0" encoding="UTF-8"`.
    pub content: String,
}

/// XML Tag node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Raw attribute values in document order.
    pub attrs: IndexMap<String, String>,
    pub children: Vec<Node>,
    /// Written as `<name/>` when empty.
    pub is_self_closing: bool,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            is_self_closing: false,
        }
    }

    pub fn with_attr(mut self, name: &str, unescaped_value: &str) -> Self {
        self.set_attr(name, unescaped_value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.attrs.get(name).map(|raw| unescape_xml(raw))
    }

    /// Sets an attribute, keeping its position when it already exists.
    pub fn set_attr(&mut self, name: &str, unescaped_value: &str) {
        self.attrs
            .insert(name.to_string(), escape_xml(unescaped_value));
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(Node::as_element_mut)
    }

    pub fn first_child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.name == name)
    }

    pub fn first_child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.child_elements_mut().find(|e| e.name == name)
    }

    /// Index into `children` of the first element child called `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|node| matches!(node, Node::Element(e) if e.name == name))
    }

    /// Concatenated, unescaped text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(&text.value()),
            Node::CData(data) => out.push_str(data),
            Node::Element(element) => collect_text(&element.children, out),
            _ => {}
        }
    }
}

/// A parsed XML document: prolog, root element, epilog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub prolog: Vec<Node>,
    pub root: Element,
    pub epilog: Vec<Node>,
}

impl Document {
    /// Follows a path of child indices from the root.
    pub fn element_at(&self, path: &[usize]) -> Option<&Element> {
        let mut current = &self.root;
        for &index in path {
            current = current.children.get(index)?.as_element()?;
        }
        Some(current)
    }

    pub fn element_at_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let mut current = &mut self.root;
        for &index in path {
            current = current.children.get_mut(index)?.as_element_mut()?;
        }
        Some(current)
    }
}
