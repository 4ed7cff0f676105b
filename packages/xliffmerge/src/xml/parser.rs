//! XML Parser
//!
//! Builds the owned document tree from quick-xml events. Text, attribute
//! values, comments and the DOCTYPE are kept in their raw form.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::ast::{Declaration, Document, Element, Node, Text};
use crate::error::{Error, Result};

const FRAGMENT_TAG: &str = "fragment";

/// Parses a complete document with exactly one root element.
pub fn parse_document(source: &str, url: &str) -> Result<Document> {
    let mut tree = TreeBuilder::new(url);
    tree.run(source)?;

    let root = tree
        .root
        .ok_or_else(|| Error::xml(url, 1, "document has no root element"))?;
    Ok(Document {
        prolog: tree.prolog,
        root,
        epilog: tree.epilog,
    })
}

/// Parses inline markup, e.g. the content of a `<target>` supplied by a translator.
pub fn parse_fragment(markup: &str, url: &str) -> Result<Vec<Node>> {
    let wrapped = format!("<{FRAGMENT_TAG}>{markup}</{FRAGMENT_TAG}>");
    let document = parse_document(&wrapped, url)?;
    Ok(document.root.children)
}

struct TreeBuilder<'u> {
    url: &'u str,
    prolog: Vec<Node>,
    root: Option<Element>,
    epilog: Vec<Node>,
    stack: Vec<Element>,
}

impl<'u> TreeBuilder<'u> {
    fn new(url: &'u str) -> Self {
        TreeBuilder {
            url,
            prolog: Vec::new(),
            root: None,
            epilog: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn run(&mut self, source: &str) -> Result<()> {
        let line_starts = line_starts_of(source);
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text(false);

        loop {
            let event = reader.read_event().map_err(|e| {
                let line = byte_pos_to_line(reader.buffer_position() as usize, &line_starts);
                Error::xml(self.url, line, e.to_string())
            })?;
            let line = byte_pos_to_line(reader.buffer_position() as usize, &line_starts);

            match event {
                Event::Start(start) => {
                    let element = self.open_element(&start, line)?;
                    self.stack.push(element);
                }
                Event::Empty(start) => {
                    let mut element = self.open_element(&start, line)?;
                    element.is_self_closing = true;
                    self.append(Node::Element(element), line)?;
                }
                Event::End(end) => {
                    let element = self.stack.pop().ok_or_else(|| {
                        Error::xml(
                            self.url,
                            line,
                            format!(
                                "unexpected closing tag </{}>",
                                String::from_utf8_lossy(end.name().as_ref())
                            ),
                        )
                    })?;
                    self.append(Node::Element(element), line)?;
                }
                Event::Text(text) => {
                    let raw = utf8(&text, self.url, line)?;
                    self.append(Node::Text(Text::from_raw(raw)), line)?;
                }
                Event::CData(data) => {
                    let raw = utf8(&data, self.url, line)?;
                    self.append(Node::CData(raw), line)?;
                }
                Event::Comment(comment) => {
                    let raw = utf8(&comment, self.url, line)?;
                    self.append(Node::Comment(raw), line)?;
                }
                Event::Decl(decl) => {
                    let content = utf8(&decl, self.url, line)?;
                    self.append(Node::Declaration(Declaration { content }), line)?;
                }
                Event::PI(pi) => {
                    let raw = utf8(&pi, self.url, line)?;
                    self.append(Node::ProcessingInstruction(raw), line)?;
                }
                Event::DocType(doctype) => {
                    let raw = utf8(&doctype, self.url, line)?;
                    self.append(Node::Doctype(raw), line)?;
                }
                Event::Eof => break,
            }
        }

        if let Some(open) = self.stack.last() {
            let line = line_starts.len();
            return Err(Error::xml(
                self.url,
                line,
                format!("unclosed element <{}>", open.name),
            ));
        }
        Ok(())
    }

    fn open_element(&self, start: &BytesStart<'_>, line: usize) -> Result<Element> {
        let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr.map_err(|e| Error::xml(self.url, line, e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = utf8(&attr.value, self.url, line)?;
            element.attrs.insert(key, value);
        }
        Ok(element)
    }

    fn append(&mut self, node: Node, line: usize) -> Result<()> {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
            return Ok(());
        }

        let stray_text = matches!(node, Node::Text(_)) && !node.is_whitespace();
        match node {
            Node::Element(element) => {
                if self.root.is_some() {
                    return Err(Error::xml(
                        self.url,
                        line,
                        format!("second root element <{}>", element.name),
                    ));
                }
                self.root = Some(element);
            }
            Node::Text(text) if stray_text => {
                return Err(Error::xml(
                    self.url,
                    line,
                    format!("text outside of the root element: {:?}", text.raw.trim()),
                ));
            }
            other => {
                if self.root.is_none() {
                    self.prolog.push(other);
                } else {
                    self.epilog.push(other);
                }
            }
        }
        Ok(())
    }
}

fn utf8(bytes: &[u8], url: &str, line: usize) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| Error::xml(url, line, e.to_string()))
}

/// Byte offsets of the start of every line.
fn line_starts_of(text: &str) -> Vec<usize> {
    let mut starts = Vec::with_capacity(256);
    starts.push(0);
    for (i, b) in text.as_bytes().iter().enumerate() {
        if *b == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}

/// Byte position to 1-based line number.
fn byte_pos_to_line(pos: usize, starts: &[usize]) -> usize {
    starts.partition_point(|&s| s <= pos).max(1)
}
