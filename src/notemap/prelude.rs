//! Prelude module for the note map crate.
//!
//! This module re-exports all public types from the note map module for
//! convenient access. You can use `use notemap_rs::notemap::prelude::*;` to
//! import them all at once.

// Re-export diagnostics when the feature is enabled
#[cfg(feature = "diagnostics")]
pub use super::diagnostics::{SimpleSource, ToAriadne, build_report, emit_notemap_warnings};

// Re-export types from the notemap module
pub use super::{
    NotemapOutput, NotemapWarning, NotemapWarningWithRange,
    cursor::Cursor,
    fs::{ReadError, read_bpm, read_notemap},
    header::{Header, HeaderField, HeaderParseOutput, HeaderWarning},
    model::Notemap,
    parse_notemap,
    span::{Spanned, SpannedExt},
    stream::{NoteStream, StreamWarning},
};
