//! Parameters
//!
//! Merges command line options with the profile, applies the defaults and
//! checks the result. All problems are collected, so that one run reports
//! every configuration error at once.

use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use xliffmerge::I18nFormat;

use super::error::ConfigError;
use super::options::ProgramOptions;
use super::profile::{ConfigFile, XliffMergeOptions};

static LANGUAGE_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z]{1,8}([-_][a-zA-Z0-9]{1,8})*$").expect("valid language regex")
});

pub const DEFAULT_SRC_DIR: &str = ".";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_ENCODING: &str = "UTF-8";

pub fn is_valid_language(language: &str) -> bool {
    LANGUAGE_CODE.is_match(language)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XliffMergeParameters {
    pub used_profile_path: Option<PathBuf>,
    pub verbose: bool,
    pub quiet: bool,
    pub src_dir: PathBuf,
    pub gen_dir: PathBuf,
    /// Master file, already joined with `src_dir`.
    pub i18n_file: PathBuf,
    pub i18n_format: I18nFormat,
    pub encoding: String,
    pub default_language: String,
    pub languages: Vec<String>,
}

impl XliffMergeParameters {
    /// Builds the parameters of a run.
    ///
    /// `profile` takes precedence over `options.profile_path`; when neither is
    /// given, only the defaults apply. The returned errors are empty when the
    /// parameters are usable.
    pub fn create(
        options: &ProgramOptions,
        profile: Option<ConfigFile>,
    ) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();

        let profile = match (profile, &options.profile_path) {
            (Some(profile), _) => profile,
            (None, Some(path)) => ConfigFile::load(path).unwrap_or_else(|err| {
                errors.push(err);
                ConfigFile::default()
            }),
            (None, None) => ConfigFile::default(),
        };
        let profile_options = profile.xliffmerge_options.unwrap_or_default();

        let parameters = Self::with_defaults(options, profile_options, &mut errors);
        parameters.check(&mut errors);
        (parameters, errors)
    }

    fn with_defaults(
        options: &ProgramOptions,
        profile: XliffMergeOptions,
        errors: &mut Vec<ConfigError>,
    ) -> Self {
        let i18n_format = match profile.i18n_format.as_deref() {
            None => I18nFormat::default(),
            Some(name) => name.parse::<I18nFormat>().unwrap_or_else(|_| {
                errors.push(ConfigError::InvalidFormat(name.to_string()));
                I18nFormat::default()
            }),
        };

        let src_dir = PathBuf::from(profile.src_dir.as_deref().unwrap_or(DEFAULT_SRC_DIR));
        let gen_dir = profile
            .gen_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| src_dir.clone());
        let i18n_file_name = profile
            .i18n_file
            .unwrap_or_else(|| format!("messages.{}", i18n_format.extension()));

        let mut languages = if options.languages.is_empty() {
            profile.languages.unwrap_or_default()
        } else {
            options.languages.clone()
        };
        // each language file is written by exactly one worker
        let mut seen = HashSet::new();
        languages.retain(|language| seen.insert(language.clone()));

        XliffMergeParameters {
            used_profile_path: options.profile_path.clone(),
            verbose: options.verbose,
            quiet: options.quiet,
            i18n_file: src_dir.join(i18n_file_name),
            src_dir,
            gen_dir,
            i18n_format,
            encoding: profile
                .encoding
                .unwrap_or_else(|| DEFAULT_ENCODING.to_string()),
            default_language: profile
                .default_language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            languages,
        }
    }

    fn check(&self, errors: &mut Vec<ConfigError>) {
        if self.languages.is_empty() {
            errors.push(ConfigError::NoLanguages);
        }
        if !self.src_dir.is_dir() {
            errors.push(ConfigError::SrcDirNotADirectory(display(&self.src_dir)));
        }
        if !self.gen_dir.is_dir() {
            errors.push(ConfigError::GenDirNotADirectory(display(&self.gen_dir)));
        }
        if !self.i18n_file.is_file() || File::open(&self.i18n_file).is_err() {
            errors.push(ConfigError::UnreadableI18nFile(display(&self.i18n_file)));
        }
        for language in std::iter::once(&self.default_language).chain(&self.languages) {
            if !is_valid_language(language) {
                errors.push(ConfigError::InvalidLanguage(language.clone()));
            }
        }
        if !is_utf8(&self.encoding) {
            errors.push(ConfigError::UnsupportedEncoding(self.encoding.clone()));
        }
    }

    /// `<genDir>/<i18nFile stem>.<language>.<ext>`
    pub fn generated_i18n_file(&self, language: &str) -> PathBuf {
        let stem = self
            .i18n_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "messages".to_string());
        self.gen_dir.join(format!(
            "{}.{}.{}",
            stem,
            language,
            self.i18n_format.extension()
        ))
    }

    /// The `name:\tvalue` lines printed in verbose mode.
    pub fn describe(&self) -> Vec<String> {
        let profile = self
            .used_profile_path
            .as_deref()
            .map(display)
            .unwrap_or_default();
        vec![
            format!("usedProfilePath:\t\"{}\"", profile),
            format!("verbose:\t{}", self.verbose),
            format!("quiet:\t{}", self.quiet),
            format!("sourceDir:\t\"{}\"", display(&self.src_dir)),
            format!("genDir:\t\"{}\"", display(&self.gen_dir)),
            format!("i18nFile:\t\"{}\"", display(&self.i18n_file)),
            format!("i18nFormat:\t\"{}\"", self.i18n_format),
            format!("encoding:\t\"{}\"", self.encoding),
            format!("defaultLanguage:\t\"{}\"", self.default_language),
            format!("languages:\t{}", self.languages.join(",")),
        ]
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn is_utf8(encoding: &str) -> bool {
    matches!(encoding.to_ascii_lowercase().as_str(), "utf-8" | "utf8")
}
