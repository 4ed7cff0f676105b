//! Placeholder Module
//!
//! Canonical form of the inline placeholders Angular writes into extracted
//! messages. The kind is derived from the placeholder name, following the
//! naming used by the extractor (`INTERPOLATION_1`, `START_BOLD_TEXT`,
//! `CLOSE_BLOCK_IF`, `ICU`, ...).

use once_cell::sync::Lazy;
use regex::Regex;

static INTERPOLATION_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^INTERPOLATION(?:_(\d+))?$").expect("valid regex"));
static ICU_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ICU(?:_\d+)?$").expect("valid regex"));

const INTERPOLATION: &str = "INTERPOLATION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    Interpolation,
    StartTag,
    CloseTag,
    StartBlock,
    CloseBlock,
    Icu,
    /// Void tags (`LINE_BREAK`, `TAG_IMG`) and custom names
    Other,
}

impl PlaceholderKind {
    pub fn of(name: &str) -> Self {
        if INTERPOLATION_NAME.is_match(name) {
            PlaceholderKind::Interpolation
        } else if name.starts_with("START_BLOCK_") {
            PlaceholderKind::StartBlock
        } else if name.starts_with("CLOSE_BLOCK_") {
            PlaceholderKind::CloseBlock
        } else if name.starts_with("START_") {
            PlaceholderKind::StartTag
        } else if name.starts_with("CLOSE_") {
            PlaceholderKind::CloseTag
        } else if ICU_NAME.is_match(name) {
            PlaceholderKind::Icu
        } else {
            PlaceholderKind::Other
        }
    }
}

/// A canonical `(kind, identifier)` placeholder token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder {
    kind: PlaceholderKind,
    name: String,
}

impl Placeholder {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Placeholder {
            kind: PlaceholderKind::of(&name),
            name,
        }
    }

    /// `INTERPOLATION` for index 0, `INTERPOLATION_<n>` otherwise.
    pub fn interpolation(index: usize) -> Self {
        if index == 0 {
            Placeholder::new(INTERPOLATION)
        } else {
            Placeholder::new(format!("{}_{}", INTERPOLATION, index))
        }
    }

    pub fn kind(&self) -> PlaceholderKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interpolation_index(&self) -> Option<usize> {
        let captures = INTERPOLATION_NAME.captures(&self.name)?;
        match captures.get(1) {
            Some(index) => index.as_str().parse().ok(),
            None => Some(0),
        }
    }
}
