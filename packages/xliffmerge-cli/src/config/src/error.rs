//! Configuration errors, worded the way they are printed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no languages specified")]
    NoLanguages,

    #[error("could not read profile \"{path}\": {reason}")]
    UnreadableProfile { path: String, reason: String },

    #[error("srcDir \"{0}\" is not a directory")]
    SrcDirNotADirectory(String),

    #[error("genDir \"{0}\" is not a directory")]
    GenDirNotADirectory(String),

    #[error("i18nFile \"{0}\" is not readable")]
    UnreadableI18nFile(String),

    #[error("language \"{0}\" is not valid")]
    InvalidLanguage(String),

    #[error("i18nFormat \"{0}\" invalid")]
    InvalidFormat(String),

    #[error("encoding \"{0}\" is not supported, only UTF-8")]
    UnsupportedEncoding(String),
}
