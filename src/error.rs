// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! The taxonomy mirrors how the engine reacts to a failure:
//! - `Validation` is rejected before any I/O and names the offending field.
//! - `Network` collapses transport and non-2xx failures into a single
//!   "remote unavailable" signal; the distinguishing detail is logged at
//!   the call site, not encoded in the variant.
//! - `MissingIdentity` means an operation that needs a partition key was
//!   attempted without one resolvable.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("Meal service unavailable: {0}")]
    Network(String),

    #[error("No user identity set")]
    MissingIdentity,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl SyncError {
    /// Shorthand for a validation failure on a named field.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        SyncError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// True if the failure means the remote store could not be reached,
    /// i.e. a read may degrade to cache.
    pub fn is_network(&self) -> bool {
        matches!(self, SyncError::Network(_))
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SyncError>;
