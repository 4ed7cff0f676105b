//! I18n Module
//!
//! Translation files, their units and the merge engine.

pub mod format;
pub mod merge;
pub mod messages_file;
pub mod placeholder;
pub mod rich_text;
pub mod serializers;
pub mod trans_unit;

pub use format::{I18nFormat, TargetState};
pub use merge::{merge, MergeSummary};
pub use messages_file::TranslationMessagesFile;
pub use placeholder::{Placeholder, PlaceholderKind};
pub use rich_text::{Fragment, RichText};
pub use trans_unit::{SourceReference, TransUnit};
