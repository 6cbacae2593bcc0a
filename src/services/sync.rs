// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sync engine: reconciles the authoritative remote store with the local
//! cache, scoped per user identity and per day.
//!
//! The identity is an explicit parameter on every operation rather than
//! ambient state — the engine tracks which identity its in-memory list
//! belongs to and resets itself when the parameter changes, so a caller
//! can never read one user's log under another's key.
//!
//! Concurrency model: all mutation goes through `&mut self`, so a fetch
//! and a create for the same identity cannot interleave. A create merges
//! into the engine's *current* list, never into a stale fetch snapshot.

use crate::error::{Result, SyncError};
use crate::models::{MealDraft, MealRecord};
use crate::services::projection::{self, DayView};
use crate::services::remote::RemoteMealStore;
use crate::storage::MealCache;
use chrono::NaiveDate;

/// Where the engine's current list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// No identity has been synced yet.
    Uninitialized,
    /// A fetch is in flight.
    Loading,
    /// Last fetch succeeded; the list reflects the server.
    Live,
    /// Last fetch failed; the list is the last-known cache (possibly stale,
    /// possibly empty).
    Degraded,
}

/// Per-identity, per-day meal log synchronizer.
pub struct SyncEngine<S: RemoteMealStore> {
    store: S,
    cache: MealCache,
    /// Identity the in-memory list belongs to.
    active: Option<String>,
    /// Current list: filtered, sorted, most recently added first.
    meals: Vec<MealRecord>,
    status: SyncStatus,
}

impl<S: RemoteMealStore> SyncEngine<S> {
    pub fn new(store: S, cache: MealCache) -> Self {
        Self {
            store,
            cache,
            active: None,
            meals: Vec::new(),
            status: SyncStatus::Uninitialized,
        }
    }

    /// Fetch the authoritative log for `user_email` on `today`.
    ///
    /// On success the result is filtered to this identity and day, sorted,
    /// written through the cache, and held as the new list (`Live`). On a
    /// network failure the engine falls back to the cache and reports
    /// `Degraded` — a non-fatal outcome returned as a value, not an error.
    pub async fn refresh(&mut self, user_email: &str, today: NaiveDate) -> Result<SyncStatus> {
        let identity = resolve_identity(user_email)?;
        self.switch_identity(&identity);
        self.status = SyncStatus::Loading;

        match self.store.list_all().await {
            Ok(all) => {
                let total = all.len();
                let mut mine: Vec<MealRecord> = all
                    .into_iter()
                    .filter(|m| m.user_email == identity && m.date == today)
                    .collect();
                sort_most_recent_first(&mut mine);

                tracing::debug!(
                    user = %identity,
                    total,
                    matched = mine.len(),
                    "Fetch succeeded"
                );

                self.cache.write(&identity, &mine);
                self.meals = mine;
                self.status = SyncStatus::Live;
            }
            Err(e) if e.is_network() => {
                tracing::warn!(
                    user = %identity,
                    error = %e,
                    "Fetch failed, serving last-known cache"
                );
                self.meals = self.cache.read(&identity);
                self.status = SyncStatus::Degraded;
            }
            Err(e) => return Err(e),
        }

        Ok(self.status)
    }

    /// Submit a new meal for `user_email`.
    ///
    /// The draft is already validated; the identity is checked before any
    /// network I/O. On confirmation the server's canonical record (with
    /// its authoritative id) is merged into the current list and the cache
    /// is rewritten — even when the engine is `Degraded`, since a
    /// confirmed write is fresh data worth caching. On failure nothing
    /// changes and the caller must resubmit; writes are never queued.
    pub async fn add_meal(&mut self, user_email: &str, draft: MealDraft) -> Result<MealRecord> {
        let identity = resolve_identity(user_email)?;
        if self.switch_identity(&identity) {
            // The list in memory belonged to someone else (or nobody).
            // Seed from this identity's cache so the write-through below
            // cannot clobber previously cached entries.
            self.meals = self.cache.read(&identity);
        }

        let record = draft.into_record(&identity);
        let confirmed = self.store.create(&record).await?;

        tracing::info!(
            user = %identity,
            id = %confirmed.id,
            meal = %confirmed.meal_name,
            "Meal confirmed"
        );

        self.meals.insert(0, confirmed.clone());
        sort_most_recent_first(&mut self.meals);
        self.cache.write(&identity, &self.meals);

        Ok(confirmed)
    }

    /// Drop all in-memory state (identity cleared by the user).
    ///
    /// Deliberately leaves every cache entry in place: re-entering the
    /// same identity later resumes from cache until the next fetch.
    pub fn clear(&mut self) {
        self.active = None;
        self.meals.clear();
        self.status = SyncStatus::Uninitialized;
    }

    /// Renderable view of the current list.
    pub fn view(&self) -> DayView {
        projection::project(&self.meals, self.status == SyncStatus::Degraded)
    }

    pub fn status(&self) -> SyncStatus {
        self.status
    }

    pub fn meals(&self) -> &[MealRecord] {
        &self.meals
    }

    /// Point the engine at `identity`, discarding state held for a
    /// different one. Returns true if the list was reset.
    fn switch_identity(&mut self, identity: &str) -> bool {
        if self.active.as_deref() == Some(identity) {
            return false;
        }
        self.active = Some(identity.to_string());
        self.meals.clear();
        self.status = SyncStatus::Uninitialized;
        true
    }
}

/// Normalize and require a non-blank partition key. Applied identically
/// on the read and write paths.
fn resolve_identity(user_email: &str) -> Result<String> {
    let identity = user_email.trim();
    if identity.is_empty() {
        return Err(SyncError::MissingIdentity);
    }
    Ok(identity.to_string())
}

/// Date descending; the sort is stable, so records sharing a date keep
/// their existing order (server order after a fetch, newest-first after
/// a merge).
fn sort_most_recent_first(records: &mut [MealRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
