//! Serializer Module
//!
//! The capability interface every dialect adapter implements. A file picks
//! its adapter once, from its [`I18nFormat`], when it is parsed.

use smallvec::SmallVec;

use crate::error::Result;
use crate::i18n::format::{I18nFormat, TargetState};
use crate::i18n::placeholder::Placeholder;
use crate::i18n::trans_unit::SourceReference;
use crate::xml::{Element, Node};

/// Child indices from the root element to the element holding the units.
pub type ContainerPath = SmallVec<[usize; 4]>;

/// Base trait for translation file dialects
pub trait Serializer: Sync {
    fn format(&self) -> I18nFormat;

    fn root_tag(&self) -> &'static str;

    fn unit_tag(&self) -> &'static str;

    /// Attribute carrying the unit id.
    fn id_attr(&self) -> &'static str {
        "id"
    }

    /// Locates the element whose children are the trans-units.
    fn container_path(&self, root: &Element, url: &str) -> Result<ContainerPath>;

    fn source_language(&self, _root: &Element) -> Option<String> {
        None
    }

    /// Returns `false` when the dialect has no language metadata.
    fn set_source_language(&self, _root: &mut Element, _language: &str) -> bool {
        false
    }

    fn target_language(&self, _root: &Element) -> Option<String> {
        None
    }

    fn set_target_language(&self, _root: &mut Element, _language: &str) -> bool {
        false
    }

    /// Whether source and target are stored separately, so that source drift
    /// of a translated unit can be detected.
    fn has_separate_target(&self) -> bool;

    fn source_nodes<'a>(&self, unit: &'a Element) -> Vec<&'a Node>;

    fn target_nodes<'a>(&self, unit: &'a Element) -> Option<Vec<&'a Node>>;

    fn set_target_nodes(&self, unit: &mut Element, nodes: Vec<Node>);

    fn target_state(&self, _unit: &Element) -> Option<TargetState> {
        None
    }

    fn set_target_state(&self, _unit: &mut Element, _state: &TargetState) {}

    /// Replaces the translation held by `unit` with the one held by `existing`,
    /// leaving everything else in `unit` as is.
    fn adopt_target(&self, unit: &mut Element, existing: &Element);

    /// Name of the placeholder when `element` is this dialect's placeholder tag.
    fn placeholder_name(&self, element: &Element) -> Option<String>;

    fn placeholder_node(&self, placeholder: &Placeholder) -> Node;

    fn source_references(&self, unit: &Element) -> Vec<SourceReference>;

    fn meaning(&self, unit: &Element) -> Option<String>;

    fn description(&self, unit: &Element) -> Option<String>;
}
