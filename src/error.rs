// src/error.rs
// =============================================================================
// Error types shared by the library.
//
// Two things can go wrong before any network traffic happens:
// - InvalidUrl: the wiki URL could not be parsed at all
// - EmptyQuery: the caller had no URL to give us
//
// Both are ordinary values returned to the caller. Nothing in the library
// terminates the process; the host decides whether to skip the ToC, print a
// warning, or give up.
// =============================================================================

use thiserror::Error;

/// Errors produced while turning a wiki URL into a raw-content URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TocError {
    /// The input could not be parsed as a URL or URL path.
    #[error("invalid URL '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },

    /// No URL was supplied.
    #[error("empty url")]
    EmptyQuery,
}

impl TocError {
    pub(crate) fn invalid_url(input: &str, reason: impl ToString) -> Self {
        TocError::InvalidUrl {
            input: input.escape_debug().to_string(),
            reason: reason.to_string(),
        }
    }
}
