//! Formats and translation states

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::i18n::serializers::{Serializer, Xliff, Xmb};

/// Supported translation file dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum I18nFormat {
    /// XLIFF 1.2
    #[default]
    Xlf,
    /// XML Message Bundle
    Xmb,
}

impl I18nFormat {
    pub const ALL: [I18nFormat; 2] = [I18nFormat::Xlf, I18nFormat::Xmb];

    pub fn name(self) -> &'static str {
        match self {
            I18nFormat::Xlf => "xlf",
            I18nFormat::Xmb => "xmb",
        }
    }

    /// File extension used for generated files.
    pub fn extension(self) -> &'static str {
        self.name()
    }

    pub fn serializer(self) -> &'static dyn Serializer {
        match self {
            I18nFormat::Xlf => &Xliff,
            I18nFormat::Xmb => &Xmb,
        }
    }

    /// Detects the dialect from the document's root element name.
    pub fn from_root_tag(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.serializer().root_tag() == name)
    }
}

impl fmt::Display for I18nFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for I18nFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xlf" | "xliff" => Ok(I18nFormat::Xlf),
            "xmb" => Ok(I18nFormat::Xmb),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Workflow state of a trans-unit's target (XLIFF `state` attribute).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetState {
    New,
    Translated,
    Final,
    /// Any other XLIFF 1.2 state value, kept as written.
    Other(String),
}

impl TargetState {
    pub fn as_str(&self) -> &str {
        match self {
            TargetState::New => "new",
            TargetState::Translated => "translated",
            TargetState::Final => "final",
            TargetState::Other(value) => value,
        }
    }

    pub fn is_translated(&self) -> bool {
        match self {
            TargetState::Translated | TargetState::Final => true,
            TargetState::Other(value) => value == "signed-off",
            TargetState::New => false,
        }
    }
}

impl From<&str> for TargetState {
    fn from(value: &str) -> Self {
        match value {
            "new" => TargetState::New,
            "translated" => TargetState::Translated,
            "final" => TargetState::Final,
            other => TargetState::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
