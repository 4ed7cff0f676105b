//! Translation Messages File
//!
//! One translation file of either dialect. The file owns its document with
//! the unit container emptied out, plus the ordered, id-keyed units that are
//! written back into the container on serialization.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::i18n::format::{I18nFormat, TargetState};
use crate::i18n::rich_text::RichText;
use crate::i18n::serializers::{ContainerPath, Serializer};
use crate::i18n::trans_unit::TransUnit;
use crate::xml::{self, Document, Node};

#[derive(Debug, Clone)]
pub struct TranslationMessagesFile {
    format: I18nFormat,
    url: String,
    document: Document,
    container_path: ContainerPath,
    units: IndexMap<String, TransUnit>,
    /// Nodes after the last unit, e.g. the indentation of the closing tag.
    trailing: Vec<Node>,
}

impl TranslationMessagesFile {
    /// Parses `source` as a file of the given dialect.
    ///
    /// Fails on malformed markup, an unexpected root element, units without
    /// id and duplicate ids.
    pub fn parse(source: &str, format: I18nFormat, url: &str) -> Result<Self> {
        let document = xml::parse_document(source, url)?;
        Self::from_document(document, format, url)
    }

    /// Parses `source`, detecting the dialect from the root element.
    pub fn parse_any(source: &str, url: &str) -> Result<Self> {
        let document = xml::parse_document(source, url)?;
        let format = I18nFormat::from_root_tag(&document.root.name).ok_or_else(|| {
            Error::UnknownRoot {
                url: url.to_string(),
                expected: I18nFormat::ALL
                    .iter()
                    .map(|f| f.serializer().root_tag())
                    .collect::<Vec<_>>()
                    .join("> or <"),
                found: document.root.name.clone(),
            }
        })?;
        Self::from_document(document, format, url)
    }

    pub fn from_file(path: impl AsRef<Path>, format: I18nFormat) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source, format, &path.to_string_lossy())
    }

    fn from_document(mut document: Document, format: I18nFormat, url: &str) -> Result<Self> {
        let serializer = format.serializer();
        if document.root.name != serializer.root_tag() {
            return Err(Error::UnknownRoot {
                url: url.to_string(),
                expected: serializer.root_tag().to_string(),
                found: document.root.name.clone(),
            });
        }

        let container_path = serializer.container_path(&document.root, url)?;
        let container = document
            .element_at_mut(&container_path)
            .ok_or_else(|| Error::MissingElement {
                url: url.to_string(),
                name: serializer.unit_tag().to_string(),
            })?;

        let mut units = IndexMap::new();
        let mut pending = Vec::new();
        for node in std::mem::take(&mut container.children) {
            match node {
                Node::Element(element) if element.name == serializer.unit_tag() => {
                    let leading = std::mem::take(&mut pending);
                    let unit = TransUnit::from_element(format, element, leading, url)?;
                    if units.contains_key(unit.id()) {
                        return Err(Error::DuplicateId {
                            url: url.to_string(),
                            id: unit.id().to_string(),
                        });
                    }
                    units.insert(unit.id().to_string(), unit);
                }
                other => pending.push(other),
            }
        }

        Ok(TranslationMessagesFile {
            format,
            url: url.to_string(),
            document,
            container_path,
            units,
            trailing: pending,
        })
    }

    fn serializer(&self) -> &'static dyn Serializer {
        self.format.serializer()
    }

    pub fn format(&self) -> I18nFormat {
        self.format
    }

    /// Where the file was read from, used in diagnostics.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// `None` for dialects without language metadata.
    pub fn source_language(&self) -> Option<String> {
        self.serializer().source_language(&self.document.root)
    }

    /// Returns `false` when the dialect has no language metadata.
    pub fn set_source_language(&mut self, language: &str) -> bool {
        self.serializer()
            .set_source_language(&mut self.document.root, language)
    }

    pub fn target_language(&self) -> Option<String> {
        self.serializer().target_language(&self.document.root)
    }

    pub fn set_target_language(&mut self, language: &str) -> bool {
        self.serializer()
            .set_target_language(&mut self.document.root, language)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units in document order. Can be called any number of times.
    pub fn trans_units(&self) -> impl Iterator<Item = &TransUnit> {
        self.units.values()
    }

    pub fn for_each_trans_unit<F>(&self, mut visitor: F)
    where
        F: FnMut(&TransUnit),
    {
        for unit in self.units.values() {
            visitor(unit);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.units.contains_key(id)
    }

    pub fn trans_unit_with_id(&self, id: &str) -> Option<&TransUnit> {
        self.units.get(id)
    }

    pub fn trans_unit_with_id_mut(&mut self, id: &str) -> Option<&mut TransUnit> {
        self.units.get_mut(id)
    }

    /// Stores a translation for the unit with the given id. XLIFF units are
    /// marked as translated.
    pub fn translate(&mut self, id: &str, translation: &RichText) -> Result<()> {
        let unit = self
            .units
            .get_mut(id)
            .ok_or_else(|| Error::UnknownTransUnit(id.to_string()))?;
        unit.set_target_content(translation);
        unit.set_target_state(TargetState::Translated);
        Ok(())
    }

    /// Like [`translate`](Self::translate), taking the translation as markup of
    /// this file's dialect.
    pub fn translate_markup(&mut self, id: &str, markup: &str) -> Result<()> {
        let translation = RichText::parse_markup(markup, self.format)?;
        self.translate(id, &translation)
    }

    pub(crate) fn units_mut(&mut self) -> impl Iterator<Item = &mut TransUnit> {
        self.units.values_mut()
    }

    pub(crate) fn replace_units(&mut self, units: IndexMap<String, TransUnit>) {
        self.units = units;
    }

    /// Rebuilds the full document with the current units in place.
    pub fn to_document(&self) -> Document {
        let mut document = self.document.clone();
        if let Some(container) = document.element_at_mut(&self.container_path) {
            for unit in self.units.values() {
                container.children.extend(unit.leading().iter().cloned());
                container
                    .children
                    .push(Node::Element(unit.element().clone()));
            }
            container.children.extend(self.trailing.iter().cloned());
        }
        document
    }

    pub fn to_xml_string(&self) -> String {
        xml::serialize_document(&self.to_document())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_xml_string()).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
