//! Merge Engine
//!
//! Reconciles a language file with the master file produced by extraction.
//! The result holds exactly the master's units, in master order, with the
//! translations of the language file carried over where the ids match.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::i18n::messages_file::TranslationMessagesFile;
use crate::i18n::trans_unit::TransUnit;

/// What a merge changed in one language file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Units copied over from master.
    pub added_count: usize,
    /// Units no longer present in master.
    pub removed_count: usize,
    /// The language file did not exist and was synthesized from master.
    pub created: bool,
    /// Kept units whose source text changed since they were translated.
    pub changed_source_ids: Vec<String>,
}

impl MergeSummary {
    pub fn is_unchanged(&self) -> bool {
        !self.created && self.added_count == 0 && self.removed_count == 0
    }

    pub fn merged_message(&self, language: &str) -> Option<String> {
        (self.added_count > 0).then(|| {
            format!(
                "merged {} trans-units from master to \"{}\"",
                self.added_count, language
            )
        })
    }

    pub fn removed_message(&self, language: &str) -> Option<String> {
        (self.removed_count > 0).then(|| {
            format!(
                "removed {} unused trans-units in \"{}\"",
                self.removed_count, language
            )
        })
    }

    /// Console lines describing the merge, nothing for an unchanged file.
    pub fn report_lines(&self, language: &str) -> Vec<String> {
        self.merged_message(language)
            .into_iter()
            .chain(self.removed_message(language))
            .collect()
    }
}

/// Merges `master` into `existing_target`, or synthesizes the language file
/// from master when there is none yet.
///
/// The master is only read; the existing target is consumed and the merged
/// file returned in its place.
pub fn merge(
    master: &TranslationMessagesFile,
    existing_target: Option<TranslationMessagesFile>,
    default_language: &str,
    target_language: &str,
) -> Result<(TranslationMessagesFile, MergeSummary)> {
    let is_default_language = target_language == default_language;

    let Some(mut target) = existing_target else {
        return Ok(create_target(
            master,
            default_language,
            target_language,
            is_default_language,
        ));
    };

    if target.format() != master.format() {
        return Err(Error::FormatMismatch {
            expected: master.format().to_string(),
            found: target.format().to_string(),
        });
    }

    let mut summary = MergeSummary::default();
    let mut units: IndexMap<String, TransUnit> = IndexMap::with_capacity(master.len());

    for master_unit in master.trans_units() {
        let mut unit = master_unit.clone();
        match target.trans_unit_with_id(master_unit.id()) {
            Some(existing) => {
                if master_unit.source_drifted_from(existing) {
                    summary
                        .changed_source_ids
                        .push(master_unit.id().to_string());
                }
                unit.adopt_target_from(existing);
            }
            None => {
                unit.use_source_as_target(is_default_language);
                summary.added_count += 1;
            }
        }
        units.insert(unit.id().to_string(), unit);
    }

    summary.removed_count = target
        .trans_units()
        .filter(|unit| !master.contains(unit.id()))
        .count();

    target.replace_units(units);
    target.set_source_language(default_language);
    target.set_target_language(target_language);

    Ok((target, summary))
}

fn create_target(
    master: &TranslationMessagesFile,
    default_language: &str,
    target_language: &str,
    is_default_language: bool,
) -> (TranslationMessagesFile, MergeSummary) {
    let mut target = master.clone();
    target.set_source_language(default_language);
    target.set_target_language(target_language);
    for unit in target.units_mut() {
        unit.use_source_as_target(is_default_language);
    }

    let summary = MergeSummary {
        added_count: target.len(),
        created: true,
        ..MergeSummary::default()
    };
    (target, summary)
}
