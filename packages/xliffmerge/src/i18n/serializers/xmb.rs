//! XMB Serializer Module
//!
//! XMB (XML Message Bundle) dialect. A language file is a copy of the master
//! bundle whose `<msg>` contents have been replaced by the translation, so
//! there is no separate target, no translation state and no language metadata.

use smallvec::SmallVec;

use super::serializer::{ContainerPath, Serializer};
use crate::error::Result;
use crate::i18n::format::I18nFormat;
use crate::i18n::placeholder::Placeholder;
use crate::i18n::trans_unit::SourceReference;
use crate::xml::{Element, Node};

const MESSAGES_TAG: &str = "messagebundle";
const MESSAGE_TAG: &str = "msg";
const PLACEHOLDER_TAG: &str = "ph";
const EXAMPLE_TAG: &str = "ex";
const SOURCE_TAG: &str = "source";

/// XMB dialect
pub struct Xmb;

impl Serializer for Xmb {
    fn format(&self) -> I18nFormat {
        I18nFormat::Xmb
    }

    fn root_tag(&self) -> &'static str {
        MESSAGES_TAG
    }

    fn unit_tag(&self) -> &'static str {
        MESSAGE_TAG
    }

    fn container_path(&self, _root: &Element, _url: &str) -> Result<ContainerPath> {
        Ok(SmallVec::new())
    }

    fn has_separate_target(&self) -> bool {
        false
    }

    fn source_nodes<'a>(&self, unit: &'a Element) -> Vec<&'a Node> {
        content_nodes(unit).collect()
    }

    fn target_nodes<'a>(&self, unit: &'a Element) -> Option<Vec<&'a Node>> {
        Some(content_nodes(unit).collect())
    }

    /// Keeps the `<source>` references and replaces everything after them.
    fn set_target_nodes(&self, unit: &mut Element, nodes: Vec<Node>) {
        unit.children.retain(is_source_reference);
        unit.children.extend(nodes);
    }

    fn adopt_target(&self, unit: &mut Element, existing: &Element) {
        let translation = content_nodes(existing).cloned().collect();
        self.set_target_nodes(unit, translation);
    }

    fn placeholder_name(&self, element: &Element) -> Option<String> {
        if element.name == PLACEHOLDER_TAG {
            element.attr("name")
        } else {
            None
        }
    }

    /// `<ph name="NAME"><ex>NAME</ex></ph>`
    fn placeholder_node(&self, placeholder: &Placeholder) -> Node {
        let example = Element::new(EXAMPLE_TAG).with_child(Node::text(placeholder.name()));
        let ph = Element::new(PLACEHOLDER_TAG)
            .with_attr("name", placeholder.name())
            .with_child(Node::Element(example));
        Node::Element(ph)
    }

    fn source_references(&self, unit: &Element) -> Vec<SourceReference> {
        unit.child_elements()
            .filter(|e| e.name == SOURCE_TAG)
            .filter_map(|source| SourceReference::parse(&source.text_content()))
            .collect()
    }

    fn meaning(&self, unit: &Element) -> Option<String> {
        unit.attr("meaning")
    }

    fn description(&self, unit: &Element) -> Option<String> {
        unit.attr("desc")
    }
}

fn is_source_reference(node: &Node) -> bool {
    matches!(node, Node::Element(e) if e.name == SOURCE_TAG)
}

/// Inline content of a `<msg>`: everything except its `<source>` references.
fn content_nodes(unit: &Element) -> impl Iterator<Item = &Node> {
    unit.children.iter().filter(|node| !is_source_reference(node))
}
