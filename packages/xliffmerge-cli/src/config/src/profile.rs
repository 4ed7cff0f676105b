//! Profile
//!
//! The JSON configuration file, e.g.
//!
//! ```json
//! {
//!   "xliffmergeOptions": {
//!     "srcDir": "src/i18n",
//!     "genDir": "src/i18n",
//!     "i18nFile": "messages.xlf",
//!     "i18nFormat": "xlf",
//!     "encoding": "UTF-8",
//!     "defaultLanguage": "de",
//!     "languages": ["de", "en"]
//!   }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub xliffmerge_options: Option<XliffMergeOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XliffMergeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gen_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let unreadable = |reason: String| ConfigError::UnreadableProfile {
            path: path.display().to_string(),
            reason,
        };
        let content = fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| unreadable(e.to_string()))
    }

    pub fn from_options(options: XliffMergeOptions) -> Self {
        ConfigFile {
            xliffmerge_options: Some(options),
        }
    }
}
