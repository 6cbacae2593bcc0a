// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local cache adapter: last-known meal lists, one file per user.
//!
//! The cache exists purely for availability — it is read when a fetch
//! fails and rewritten on every successful fetch or create. It is never
//! authoritative, so every fault here degrades to "no cached data"
//! instead of surfacing as an error:
//! - a missing or unparseable entry reads as the empty list;
//! - a failed write is logged and dropped;
//! - entries are never expired (staleness is accepted for availability).

use crate::models::MealRecord;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Durable per-user cache of the last-known meal list.
#[derive(Debug, Clone)]
pub struct MealCache {
    base_dir: PathBuf,
    /// Whether the base directory could be created. When false, reads are
    /// empty and writes are no-ops.
    available: bool,
}

impl MealCache {
    /// Open (or create) a cache rooted at `base_dir`.
    pub fn new(base_dir: &Path) -> Self {
        let available = match fs::create_dir_all(base_dir) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    dir = %base_dir.display(),
                    error = %e,
                    "Cache directory unavailable, running without local cache"
                );
                false
            }
        };

        Self {
            base_dir: base_dir.to_path_buf(),
            available,
        }
    }

    /// Read the cached list for a user. Absent, corrupt, or unreadable
    /// entries all come back as the empty list.
    pub fn read(&self, user_email: &str) -> Vec<MealRecord> {
        if !self.available {
            return Vec::new();
        }

        let path = self.entry_path(user_email);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cache read failed");
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Corrupt cache entry, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Replace the cached list for a user.
    ///
    /// Writes to a temp file in the same directory and renames it over the
    /// entry, so a concurrent reader sees either the old or the new list,
    /// never a partial one. Best-effort: failures are logged and swallowed.
    pub fn write(&self, user_email: &str, records: &[MealRecord]) {
        if !self.available {
            return;
        }

        let path = self.entry_path(user_email);
        if let Err(e) = self.write_atomic(&path, records) {
            tracing::warn!(path = %path.display(), error = %e, "Cache write failed");
        }
    }

    /// Remove a user's cache entry. Missing entries are fine.
    pub fn clear(&self, user_email: &str) {
        if !self.available {
            return;
        }

        let path = self.entry_path(user_email);
        match fs::remove_file(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "Cache entry cleared"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Cache clear failed"),
        }
    }

    fn write_atomic(&self, path: &Path, records: &[MealRecord]) -> std::io::Result<()> {
        let json = serde_json::to_string(records)?;

        let tmp = path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, path)
    }

    /// Cache entry path for a partition key. The key is hashed so that any
    /// string (including ones with path separators) maps to a safe,
    /// collision-free filename.
    fn entry_path(&self, user_email: &str) -> PathBuf {
        let digest = Sha256::digest(user_email.as_bytes());
        self.base_dir.join(format!("meals-{}.json", hex::encode(digest)))
    }
}
