//! Rich Text Module
//!
//! Dialect-neutral message content: text interleaved with placeholders.
//!
//! Reading scans inline nodes left to right and replaces every element the
//! dialect treats as a placeholder by a canonical [`Placeholder`], whatever
//! children it carries. Text is kept in its escaped form so entity references
//! survive a round trip exactly. Foreign elements are kept as opaque markup.
//! Writing emits each placeholder in the dialect's own element shape.

use crate::error::Result;
use crate::i18n::format::I18nFormat;
use crate::i18n::placeholder::Placeholder;
use crate::xml::{self, Node, Text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Raw (escaped) text.
    Text(String),
    Placeholder(Placeholder),
    /// Inline node that is not a placeholder, kept verbatim.
    Markup(Node),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    fragments: Vec<Fragment>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_plain(text: &str) -> Self {
        Self::new().text(text)
    }

    /// Builder: appends unescaped text.
    pub fn text(mut self, unescaped: &str) -> Self {
        self.push_text(unescaped);
        self
    }

    /// Builder: appends a placeholder.
    pub fn placeholder(mut self, placeholder: Placeholder) -> Self {
        self.push_placeholder(placeholder);
        self
    }

    pub fn push_text(&mut self, unescaped: &str) {
        self.push_raw_text(&xml::escape_text(unescaped));
    }

    /// Appends already escaped text, joining it with a preceding text fragment.
    pub fn push_raw_text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        if let Some(Fragment::Text(last)) = self.fragments.last_mut() {
            last.push_str(raw);
        } else {
            self.fragments.push(Fragment::Text(raw.to_string()));
        }
    }

    pub fn push_placeholder(&mut self, placeholder: Placeholder) {
        self.fragments.push(Fragment::Placeholder(placeholder));
    }

    pub fn push_markup(&mut self, node: Node) {
        self.fragments.push(Fragment::Markup(node));
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.fragments.iter().filter_map(|fragment| match fragment {
            Fragment::Placeholder(placeholder) => Some(placeholder),
            _ => None,
        })
    }

    /// Normalizes the inline nodes of a `<source>`, `<target>` or `<msg>`.
    pub fn from_nodes<'a, I>(nodes: I, format: I18nFormat) -> Self
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let serializer = format.serializer();
        let mut text = RichText::new();
        for node in nodes {
            match node {
                Node::Text(t) => text.push_raw_text(&t.raw),
                Node::CData(data) => text.push_raw_text(&xml::escape_text(data)),
                Node::Element(element) => match serializer.placeholder_name(element) {
                    Some(name) => text.push_placeholder(Placeholder::new(name)),
                    None => text.push_markup(node.clone()),
                },
                other => text.push_markup(other.clone()),
            }
        }
        text
    }

    /// Renders the content as inline nodes of the given dialect.
    pub fn to_nodes(&self, format: I18nFormat) -> Vec<Node> {
        let serializer = format.serializer();
        self.fragments
            .iter()
            .map(|fragment| match fragment {
                Fragment::Text(raw) => Node::Text(Text::from_raw(raw.clone())),
                Fragment::Placeholder(placeholder) => serializer.placeholder_node(placeholder),
                Fragment::Markup(node) => node.clone(),
            })
            .collect()
    }

    /// Parses translator supplied markup, e.g.
    /// `Item <x id="INTERPOLATION"/> added.` for XLIFF.
    pub fn parse_markup(markup: &str, format: I18nFormat) -> Result<Self> {
        let nodes = xml::parse_fragment(markup, "<translation>")?;
        Ok(Self::from_nodes(&nodes, format))
    }

    pub fn to_markup(&self, format: I18nFormat) -> String {
        xml::serialize(&self.to_nodes(format))
    }

    /// Unescaped text with `{$NAME}` markers for placeholders, for display.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(raw) => out.push_str(&xml::unescape_xml(raw)),
                Fragment::Placeholder(placeholder) => {
                    out.push_str("{$");
                    out.push_str(placeholder.name());
                    out.push('}');
                }
                Fragment::Markup(Node::Element(element)) => out.push_str(&element.text_content()),
                Fragment::Markup(_) => {}
            }
        }
        out
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        RichText::from_plain(text)
    }
}
