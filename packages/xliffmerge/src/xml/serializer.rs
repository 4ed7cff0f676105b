//! XML Serializer
//!
//! Writes the document tree back to text. Raw text and attribute values are
//! emitted unchanged, attributes in document order.

use super::ast::{Document, Element, Node};

/// Visitor trait for XML nodes
pub trait IVisitor {
    fn visit_element(&mut self, element: &Element);
    fn visit_node(&mut self, node: &Node);
}

struct Visitor {
    out: String,
}

impl IVisitor for Visitor {
    fn visit_element(&mut self, element: &Element) {
        self.out.push('<');
        self.out.push_str(&element.name);
        self.serialize_attributes(element);

        if element.children.is_empty() && element.is_self_closing {
            self.out.push_str("/>");
            return;
        }

        self.out.push('>');
        for child in &element.children {
            self.visit_node(child);
        }
        self.out.push_str("</");
        self.out.push_str(&element.name);
        self.out.push('>');
    }

    fn visit_node(&mut self, node: &Node) {
        match node {
            Node::Element(element) => self.visit_element(element),
            Node::Text(text) => self.out.push_str(&text.raw),
            Node::CData(data) => {
                self.out.push_str("<![CDATA[");
                self.out.push_str(data);
                self.out.push_str("]]>");
            }
            Node::Comment(comment) => {
                self.out.push_str("<!--");
                self.out.push_str(comment);
                self.out.push_str("-->");
            }
            Node::ProcessingInstruction(content) => {
                self.out.push_str("<?");
                self.out.push_str(content);
                self.out.push_str("?>");
            }
            Node::Declaration(decl) => {
                self.out.push_str("<?");
                self.out.push_str(&decl.content);
                self.out.push_str("?>");
            }
            Node::Doctype(doctype) => {
                self.out.push_str("<!DOCTYPE ");
                self.out.push_str(doctype);
                self.out.push('>');
            }
        }
    }
}

impl Visitor {
    fn serialize_attributes(&mut self, element: &Element) {
        for (name, raw_value) in &element.attrs {
            // single-quoted values may contain a literal double quote
            let quote = if raw_value.contains('"') { '\'' } else { '"' };
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push('=');
            self.out.push(quote);
            self.out.push_str(raw_value);
            self.out.push(quote);
        }
    }
}

/// Serialize XML nodes to string
pub fn serialize(nodes: &[Node]) -> String {
    let mut visitor = Visitor { out: String::new() };
    for node in nodes {
        visitor.visit_node(node);
    }
    visitor.out
}

pub fn serialize_node(node: &Node) -> String {
    serialize(std::slice::from_ref(node))
}

pub fn serialize_document(document: &Document) -> String {
    let mut visitor = Visitor { out: String::new() };
    for node in &document.prolog {
        visitor.visit_node(node);
    }
    visitor.visit_element(&document.root);
    for node in &document.epilog {
        visitor.visit_node(node);
    }
    visitor.out
}
