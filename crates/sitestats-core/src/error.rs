// ── Core error types ──
//
// `StoreError` is what a store reports for a failed fetch; the block
// turns it into a published `InsightItem::Failed`. `CoreError` covers
// contract violations, which are never published.

use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// Category of a store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreErrorKind {
    GenericError,
    AuthorizationRequired,
    NotFound,
    InvalidResponse,
    Timeout,
    ApiError,
}

/// A failed fetch as reported by an `InsightsStore`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {}", .message.as_deref().unwrap_or("no details"))]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub message: Option<String>,
}

impl StoreError {
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// An error carrying only its kind.
    pub fn bare(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// The text shown to the user: the backend message verbatim, or the
    /// kind name when the backend sent none.
    pub fn display_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| self.kind.as_ref().to_owned())
    }

    /// Returns `true` if asking again later might succeed.
    ///
    /// The core never retries; this is for hosts that run their own
    /// retry or backoff around a block's `fetch()`.
    pub fn is_transient(&self) -> bool {
        matches!(self.kind, StoreErrorKind::Timeout)
    }
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Contract violations ──────────────────────────────────────────
    #[error("Tag group at position {position} has no members")]
    EmptyTagGroup { position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_message_is_verbatim_when_present() {
        let err = StoreError::new(StoreErrorKind::AuthorizationRequired, "Token expired");
        assert_eq!(err.display_message(), "Token expired");
    }

    #[test]
    fn display_message_falls_back_to_kind_name() {
        let err = StoreError::bare(StoreErrorKind::InvalidResponse);
        assert_eq!(err.display_message(), "INVALID_RESPONSE");
    }

    #[test]
    fn only_timeouts_are_transient() {
        assert!(StoreError::bare(StoreErrorKind::Timeout).is_transient());
        assert!(!StoreError::bare(StoreErrorKind::NotFound).is_transient());
    }

    #[test]
    fn store_error_display_includes_kind() {
        let err = StoreError::new(StoreErrorKind::GenericError, "Generic error");
        assert_eq!(err.to_string(), "GENERIC_ERROR: Generic error");
    }
}
