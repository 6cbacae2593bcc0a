// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable session identity: the active user's email, mirrored to disk so
//! it survives a restart. Clearing it does NOT touch the per-user caches;
//! those stay keyed by the old value for later resumption.

use std::fs;
use std::path::{Path, PathBuf};

const IDENTITY_FILE: &str = "identity";

/// Single-value store for the active identity.
#[derive(Debug, Clone)]
pub struct IdentityStore {
    path: PathBuf,
}

impl IdentityStore {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            path: base_dir.join(IDENTITY_FILE),
        }
    }

    /// The stored identity, if any. Faults read as "not set".
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(value) => {
                let value = value.trim();
                if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Identity read failed");
                None
            }
        }
    }

    /// Persist the identity. Best-effort: a failed write only costs the
    /// user a re-login after restart.
    pub fn store(&self, user_email: &str) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(e) = fs::write(&self.path, user_email.trim()) {
            tracing::warn!(path = %self.path.display(), error = %e, "Identity write failed");
        }
    }

    /// Discard the stored identity.
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!("Identity cleared"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "Identity clear failed"),
        }
    }
}
