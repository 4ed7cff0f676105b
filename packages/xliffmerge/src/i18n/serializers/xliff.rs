//! XLIFF Serializer Module
//!
//! XLIFF 1.2 dialect as written by Angular's extractor.
//! See https://docs.oasis-open.org/xliff/v1.2/os/xliff-core.html

use smallvec::smallvec;

use super::serializer::{ContainerPath, Serializer};
use crate::error::{Error, Result};
use crate::i18n::format::{I18nFormat, TargetState};
use crate::i18n::placeholder::Placeholder;
use crate::i18n::trans_unit::SourceReference;
use crate::xml::{Element, Node};

pub const VERSION: &str = "1.2";
pub const XMLNS: &str = "urn:oasis:names:tc:xliff:document:1.2";
const ROOT_TAG: &str = "xliff";
const PLACEHOLDER_TAG: &str = "x";
const FILE_TAG: &str = "file";
const BODY_TAG: &str = "body";
const SOURCE_TAG: &str = "source";
const TARGET_TAG: &str = "target";
const UNIT_TAG: &str = "trans-unit";
const NOTE_TAG: &str = "note";
const CONTEXT_GROUP_TAG: &str = "context-group";
const CONTEXT_TAG: &str = "context";

const SOURCE_LANGUAGE_ATTR: &str = "source-language";
const TARGET_LANGUAGE_ATTR: &str = "target-language";
const STATE_ATTR: &str = "state";

/// XLIFF 1.2 dialect
pub struct Xliff;

impl Serializer for Xliff {
    fn format(&self) -> I18nFormat {
        I18nFormat::Xlf
    }

    fn root_tag(&self) -> &'static str {
        ROOT_TAG
    }

    fn unit_tag(&self) -> &'static str {
        UNIT_TAG
    }

    fn container_path(&self, root: &Element, url: &str) -> Result<ContainerPath> {
        let file_index = root.position_of(FILE_TAG).ok_or_else(|| Error::MissingElement {
            url: url.to_string(),
            name: FILE_TAG.to_string(),
        })?;
        let file = root.children[file_index]
            .as_element()
            .ok_or_else(|| Error::MissingElement {
                url: url.to_string(),
                name: FILE_TAG.to_string(),
            })?;
        let body_index = file.position_of(BODY_TAG).ok_or_else(|| Error::MissingElement {
            url: url.to_string(),
            name: BODY_TAG.to_string(),
        })?;
        Ok(smallvec![file_index, body_index])
    }

    fn source_language(&self, root: &Element) -> Option<String> {
        root.first_child(FILE_TAG)?.attr(SOURCE_LANGUAGE_ATTR)
    }

    fn set_source_language(&self, root: &mut Element, language: &str) -> bool {
        match root.first_child_mut(FILE_TAG) {
            Some(file) => {
                file.set_attr(SOURCE_LANGUAGE_ATTR, language);
                true
            }
            None => false,
        }
    }

    fn target_language(&self, root: &Element) -> Option<String> {
        root.first_child(FILE_TAG)?.attr(TARGET_LANGUAGE_ATTR)
    }

    fn set_target_language(&self, root: &mut Element, language: &str) -> bool {
        match root.first_child_mut(FILE_TAG) {
            Some(file) => {
                file.set_attr(TARGET_LANGUAGE_ATTR, language);
                true
            }
            None => false,
        }
    }

    fn has_separate_target(&self) -> bool {
        true
    }

    fn source_nodes<'a>(&self, unit: &'a Element) -> Vec<&'a Node> {
        unit.first_child(SOURCE_TAG)
            .map(|source| source.children.iter().collect())
            .unwrap_or_default()
    }

    fn target_nodes<'a>(&self, unit: &'a Element) -> Option<Vec<&'a Node>> {
        unit.first_child(TARGET_TAG)
            .map(|target| target.children.iter().collect())
    }

    fn set_target_nodes(&self, unit: &mut Element, nodes: Vec<Node>) {
        match unit.first_child_mut(TARGET_TAG) {
            Some(target) => target.children = nodes,
            None => {
                let mut target = Element::new(TARGET_TAG);
                target.children = nodes;
                insert_after_source(unit, target);
            }
        }
    }

    fn target_state(&self, unit: &Element) -> Option<TargetState> {
        unit.first_child(TARGET_TAG)?
            .attr(STATE_ATTR)
            .map(|state| TargetState::from(state.as_str()))
    }

    fn set_target_state(&self, unit: &mut Element, state: &TargetState) {
        if unit.first_child(TARGET_TAG).is_none() {
            insert_after_source(unit, Element::new(TARGET_TAG));
        }
        if let Some(target) = unit.first_child_mut(TARGET_TAG) {
            target.set_attr(STATE_ATTR, state.as_str());
        }
    }

    fn adopt_target(&self, unit: &mut Element, existing: &Element) {
        remove_target(unit);
        if let Some(target) = existing.first_child(TARGET_TAG) {
            insert_after_source(unit, target.clone());
        }
    }

    fn placeholder_name(&self, element: &Element) -> Option<String> {
        if element.name == PLACEHOLDER_TAG {
            element.attr("id")
        } else {
            None
        }
    }

    fn placeholder_node(&self, placeholder: &Placeholder) -> Node {
        let mut x = Element::new(PLACEHOLDER_TAG).with_attr("id", placeholder.name());
        x.is_self_closing = true;
        Node::Element(x)
    }

    fn source_references(&self, unit: &Element) -> Vec<SourceReference> {
        unit.child_elements()
            .filter(|group| {
                group.name == CONTEXT_GROUP_TAG
                    && group.attr("purpose").as_deref() == Some("location")
            })
            .filter_map(|group| {
                let source_file = context_value(group, "sourcefile")?;
                let line_number = context_value(group, "linenumber")
                    .and_then(|line| line.trim().parse().ok())
                    .unwrap_or(0);
                Some(SourceReference {
                    source_file,
                    line_number,
                })
            })
            .collect()
    }

    fn meaning(&self, unit: &Element) -> Option<String> {
        note_value(unit, "meaning").or_else(|| x_context_value(unit, "x-meaning"))
    }

    fn description(&self, unit: &Element) -> Option<String> {
        note_value(unit, "description").or_else(|| x_context_value(unit, "x-description"))
    }
}

/// Inserts `element` right after `<source>`, indented like `<source>`.
fn insert_after_source(unit: &mut Element, element: Element) {
    let Some(source_index) = unit.position_of(SOURCE_TAG) else {
        unit.children.push(Node::Element(element));
        return;
    };

    let indent = source_index
        .checked_sub(1)
        .map(|i| &unit.children[i])
        .filter(|node| node.is_whitespace())
        .cloned();

    let mut insert_at = source_index + 1;
    if let Some(indent) = indent {
        unit.children.insert(insert_at, indent);
        insert_at += 1;
    }
    unit.children.insert(insert_at, Node::Element(element));
}

/// Removes `<target>` together with the whitespace in front of it.
fn remove_target(unit: &mut Element) {
    if let Some(index) = unit.position_of(TARGET_TAG) {
        unit.children.remove(index);
        if index > 0 && unit.children[index - 1].is_whitespace() {
            unit.children.remove(index - 1);
        }
    }
}

fn context_value(group: &Element, context_type: &str) -> Option<String> {
    group
        .child_elements()
        .find(|c| c.name == CONTEXT_TAG && c.attr("context-type").as_deref() == Some(context_type))
        .map(Element::text_content)
}

fn note_value(unit: &Element, from: &str) -> Option<String> {
    unit.child_elements()
        .find(|note| note.name == NOTE_TAG && note.attr("from").as_deref() == Some(from))
        .map(Element::text_content)
}

fn x_context_value(unit: &Element, context_type: &str) -> Option<String> {
    unit.child_elements()
        .filter(|group| group.name == CONTEXT_GROUP_TAG)
        .find_map(|group| context_value(group, context_type))
}
