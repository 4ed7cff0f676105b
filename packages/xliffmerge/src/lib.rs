#![deny(clippy::all)]

/**
 * xliffmerge - translation file merge engine
 *
 * Keeps per-language XLIFF / XMB files in sync with the master file
 * produced by Angular's i18n extraction.
 */

// Core modules
pub mod error;

// XML document model (mirrors the ml_parser / serializer split)
pub mod xml;

// Translation files, placeholders and the merge engine
pub mod i18n;

// Re-exports
pub use error::{Error, Result};
pub use i18n::{
    merge, Fragment, I18nFormat, MergeSummary, Placeholder, PlaceholderKind, RichText,
    SourceReference, TargetState, TransUnit, TranslationMessagesFile,
};
