//! XliffMerge command
//!
//! Validates the parameters, fixes the master's source language and then
//! merges the master into every language file. Languages are processed in
//! parallel; their results are reported in configured order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;
use xliffmerge::{merge, I18nFormat, MergeSummary, TranslationMessagesFile};

use crate::config::{ConfigError, ConfigFile, ProgramOptions, XliffMergeParameters};
use crate::logging::Logger;
use crate::version::version_string;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("{} configuration error(s)", .0.len())]
    Config(Vec<ConfigError>),

    #[error("could not process master file")]
    Master(#[source] xliffmerge::Error),

    #[error("{failed} of {total} language(s) failed")]
    Languages { failed: usize, total: usize },
}

/// Outcome of a successfully merged language.
#[derive(Debug, Clone)]
pub struct LanguageReport {
    pub language: String,
    pub file: PathBuf,
    pub summary: MergeSummary,
}

pub struct XliffMerge<'l> {
    logger: &'l dyn Logger,
    parameters: XliffMergeParameters,
    config_errors: Vec<ConfigError>,
}

impl<'l> XliffMerge<'l> {
    /// `profile` replaces reading `options.profile_path`, e.g. for profiles
    /// built in memory.
    pub fn create_from_options(
        logger: &'l dyn Logger,
        options: &ProgramOptions,
        profile: Option<ConfigFile>,
    ) -> Self {
        let (parameters, config_errors) = XliffMergeParameters::create(options, profile);
        XliffMerge {
            logger,
            parameters,
            config_errors,
        }
    }

    pub fn parameters(&self) -> &XliffMergeParameters {
        &self.parameters
    }

    pub fn generated_i18n_file(&self, language: &str) -> PathBuf {
        self.parameters.generated_i18n_file(language)
    }

    pub fn run(&self) -> Result<Vec<LanguageReport>, RunError> {
        self.logger.debug(&version_string());
        self.logger.debug("Used Parameters:");
        for line in self.parameters.describe() {
            self.logger.debug(&line);
        }

        if !self.config_errors.is_empty() {
            for err in &self.config_errors {
                self.logger.error(&err.to_string());
            }
            return Err(RunError::Config(self.config_errors.clone()));
        }

        let master = self.read_master().map_err(|err| {
            self.logger.error(&err.to_string());
            RunError::Master(err)
        })?;

        let results: Vec<(&String, Result<LanguageReport, xliffmerge::Error>)> = self
            .parameters
            .languages
            .par_iter()
            .map(|language| (language, self.process_language(&master, language)))
            .collect();

        let total = results.len();
        let mut reports = Vec::with_capacity(total);
        for (language, result) in results {
            match result {
                Ok(report) => {
                    self.report(&report);
                    reports.push(report);
                }
                Err(err) => self.logger.error(&format!(
                    "language \"{}\" (\"{}\"): {}",
                    language,
                    self.generated_i18n_file(language).display(),
                    err
                )),
            }
        }

        let failed = total - reports.len();
        if failed > 0 {
            return Err(RunError::Languages { failed, total });
        }
        Ok(reports)
    }

    /// Reads the master and makes its source language the default language,
    /// writing the master back when it had to be changed.
    fn read_master(&self) -> xliffmerge::Result<TranslationMessagesFile> {
        let path = &self.parameters.i18n_file;
        let default_language = &self.parameters.default_language;
        let mut master = TranslationMessagesFile::from_file(path, self.parameters.i18n_format)?;

        if let Some(source_language) = master.source_language() {
            if &source_language != default_language {
                self.logger.warn(&format!(
                    "master says to have source-language=\"{}\", should be \"{}\" (your defaultLanguage)",
                    source_language, default_language
                ));
                master.set_source_language(default_language);
                master.save(path)?;
                self.logger.info(&format!(
                    "changed master source-language=\"{}\" to \"{}\"",
                    source_language, default_language
                ));
            }
        }
        Ok(master)
    }

    fn process_language(
        &self,
        master: &TranslationMessagesFile,
        language: &str,
    ) -> xliffmerge::Result<LanguageReport> {
        let file = self.generated_i18n_file(language);
        let existing = read_if_exists(&file, self.parameters.i18n_format)?;
        let (merged, summary) = merge(
            master,
            existing,
            &self.parameters.default_language,
            language,
        )?;
        merged.save(&file)?;
        Ok(LanguageReport {
            language: language.to_string(),
            file,
            summary,
        })
    }

    fn report(&self, report: &LanguageReport) {
        let LanguageReport {
            language,
            file,
            summary,
        } = report;

        if summary.created {
            self.logger.info(&format!(
                "created new file \"{}\" for target-language=\"{}\"",
                file.display(),
                language
            ));
            if language != &self.parameters.default_language {
                self.logger.warn(&format!(
                    "please translate file \"{}\" to target-language=\"{}\"",
                    file.display(),
                    language
                ));
            }
            return;
        }

        for id in &summary.changed_source_ids {
            self.logger.debug(&format!(
                "source of trans-unit \"{}\" changed since it was translated to \"{}\"",
                id, language
            ));
        }
        if summary.is_unchanged() {
            self.logger
                .info(&format!("file for \"{}\" was up to date", language));
            return;
        }
        for line in summary.report_lines(language) {
            self.logger.info(&line);
        }
    }
}

fn read_if_exists(
    path: &Path,
    format: I18nFormat,
) -> xliffmerge::Result<Option<TranslationMessagesFile>> {
    if path.exists() {
        TranslationMessagesFile::from_file(path, format).map(Some)
    } else {
        Ok(None)
    }
}
