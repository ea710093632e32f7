// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the shelfmark utilities.
//!
//! Nothing in this workspace lets an error escape to the page: the clipboard
//! writer folds [`ShelfmarkError`] into a `bool` and the date formatter into a
//! sentinel string. The typed error is still exposed through the `try_*` forms
//! so that callers who care can match on it.
//!
//! # Examples
//!
//! ```
//! use shelfmark_core::{Result, ShelfmarkError};
//!
//! fn parse(input: &str) -> Result<u32> {
//!     input.parse().map_err(|_| ShelfmarkError::invalid_date(input))
//! }
//!
//! assert!(matches!(parse("soon"), Err(ShelfmarkError::InvalidDate { .. })));
//! ```

/// Root error type for all shelfmark operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShelfmarkError {
    /// The input string does not describe a calendar date
    #[error("Invalid date: {input:?}")]
    InvalidDate {
        /// The rejected input, untrimmed
        input: String,
    },

    /// No clipboard could be reached
    ///
    /// Raised when the host has no clipboard facility at all, e.g. a headless
    /// session or a browser context without `navigator.clipboard`.
    #[error("Clipboard unavailable: {reason}")]
    ClipboardUnavailable {
        /// Why the clipboard could not be opened
        reason: String,
    },

    /// The clipboard rejected the write
    #[error("Clipboard write failed: {reason}")]
    ClipboardWrite {
        /// Host-provided rejection message
        reason: String,
    },
}

impl ShelfmarkError {
    /// Create an invalid date error for the given input
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Create a clipboard unavailable error with the given reason
    pub fn clipboard_unavailable(reason: impl Into<String>) -> Self {
        Self::ClipboardUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a clipboard write error with the given reason
    pub fn clipboard_write(reason: impl Into<String>) -> Self {
        Self::ClipboardWrite {
            reason: reason.into(),
        }
    }

    /// Whether the error came from the clipboard facility
    #[must_use]
    pub const fn is_clipboard_error(&self) -> bool {
        matches!(
            self,
            Self::ClipboardUnavailable { .. } | Self::ClipboardWrite { .. }
        )
    }
}

/// Specialized Result type for shelfmark operations
pub type Result<T> = std::result::Result<T, ShelfmarkError>;
