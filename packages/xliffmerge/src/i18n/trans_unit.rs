//! Trans-Unit Module
//!
//! One translatable message: a `<trans-unit>` (XLIFF) or `<msg>` (XMB)
//! element together with the formatting nodes in front of it. All accessors
//! go through the dialect adapter chosen when the file was parsed.

use crate::error::{Error, Result};
use crate::i18n::format::{I18nFormat, TargetState};
use crate::i18n::rich_text::RichText;
use crate::i18n::serializers::Serializer;
use crate::xml::{Element, Node};

/// Location of a message in the application sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReference {
    pub source_file: String,
    pub line_number: usize,
}

impl SourceReference {
    /// Parses `path:line` or `path:start,end`.
    pub fn parse(text: &str) -> Option<Self> {
        let (source_file, lines) = text.trim().rsplit_once(':')?;
        let first_line = lines.split(',').next()?.trim();
        Some(SourceReference {
            source_file: source_file.to_string(),
            line_number: first_line.parse().ok()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransUnit {
    format: I18nFormat,
    id: String,
    element: Element,
    /// Whitespace and comments between the previous unit and this one.
    leading: Vec<Node>,
}

impl TransUnit {
    pub(crate) fn from_element(
        format: I18nFormat,
        element: Element,
        leading: Vec<Node>,
        url: &str,
    ) -> Result<Self> {
        let id_attr = format.serializer().id_attr();
        let id = element.attr(id_attr).ok_or_else(|| Error::MissingAttribute {
            url: url.to_string(),
            element: element.name.clone(),
            attribute: id_attr.to_string(),
        })?;
        Ok(TransUnit {
            format,
            id,
            element,
            leading,
        })
    }

    fn serializer(&self) -> &'static dyn Serializer {
        self.format.serializer()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn format(&self) -> I18nFormat {
        self.format
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub(crate) fn leading(&self) -> &[Node] {
        &self.leading
    }

    pub fn source_content(&self) -> RichText {
        RichText::from_nodes(self.serializer().source_nodes(&self.element), self.format)
    }

    /// `None` when an XLIFF unit has no `<target>` yet.
    pub fn target_content(&self) -> Option<RichText> {
        self.serializer()
            .target_nodes(&self.element)
            .map(|nodes| RichText::from_nodes(nodes, self.format))
    }

    /// Always `None` for dialects without state tracking.
    pub fn target_state(&self) -> Option<TargetState> {
        self.serializer().target_state(&self.element)
    }

    pub fn set_target_content(&mut self, content: &RichText) {
        let nodes = content.to_nodes(self.format);
        self.serializer().set_target_nodes(&mut self.element, nodes);
    }

    /// No-op for dialects without state tracking.
    pub fn set_target_state(&mut self, state: TargetState) {
        self.serializer().set_target_state(&mut self.element, &state);
    }

    /// Same message with the same source text.
    pub fn is_compatible_with(&self, other: &TransUnit) -> bool {
        self.id == other.id
            && self.format == other.format
            && self.source_content() == other.source_content()
    }

    pub fn meaning(&self) -> Option<String> {
        self.serializer().meaning(&self.element)
    }

    pub fn description(&self) -> Option<String> {
        self.serializer().description(&self.element)
    }

    pub fn source_references(&self) -> Vec<SourceReference> {
        self.serializer().source_references(&self.element)
    }

    /// Fills a unit that is new to a language file: the source markup is
    /// copied verbatim into the target, final for the default language, new
    /// for all others.
    pub(crate) fn use_source_as_target(&mut self, is_default_language: bool) {
        let serializer = self.serializer();
        if !serializer.has_separate_target() {
            return;
        }
        let source: Vec<Node> = serializer
            .source_nodes(&self.element)
            .into_iter()
            .cloned()
            .collect();
        serializer.set_target_nodes(&mut self.element, source);
        self.set_target_state(if is_default_language {
            TargetState::Final
        } else {
            TargetState::New
        });
    }

    /// Takes over the translation of `existing`, a unit with the same id from
    /// the language file.
    pub(crate) fn adopt_target_from(&mut self, existing: &TransUnit) {
        self.serializer()
            .adopt_target(&mut self.element, &existing.element);
    }

    /// Whether the source text changed since `existing` was translated.
    pub(crate) fn source_drifted_from(&self, existing: &TransUnit) -> bool {
        self.serializer().has_separate_target() && !self.is_compatible_with(existing)
    }
}
