//! Error Module
//!
//! Errors raised while parsing, mutating and merging translation files.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed markup, reported with the 1-based line of the failure.
    #[error("{url}@{line}: {message}")]
    Xml {
        url: String,
        line: usize,
        message: String,
    },

    #[error("{url}: unexpected root element <{found}>, expected <{expected}>")]
    UnknownRoot {
        url: String,
        expected: String,
        found: String,
    },

    #[error("{url}: missing <{name}> element")]
    MissingElement { url: String, name: String },

    #[error("{url}: <{element}> without required attribute \"{attribute}\"")]
    MissingAttribute {
        url: String,
        element: String,
        attribute: String,
    },

    #[error("{url}: duplicate trans-unit id \"{id}\"")]
    DuplicateId { url: String, id: String },

    #[error("no trans-unit with id \"{0}\"")]
    UnknownTransUnit(String),

    #[error("format mismatch: expected {expected}, found {found}")]
    FormatMismatch { expected: String, found: String },

    #[error("unknown i18n format \"{0}\"")]
    UnknownFormat(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn xml(url: &str, line: usize, message: impl Into<String>) -> Self {
        Error::Xml {
            url: url.to_string(),
            line,
            message: message.into(),
        }
    }
}
