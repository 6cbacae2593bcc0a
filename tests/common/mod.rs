// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test helpers: an in-memory remote store with switchable
//! failures, and per-test scratch directories.

use async_trait::async_trait;
use chrono::NaiveDate;
use mealsync::models::MealRecord;
use mealsync::services::RemoteMealStore;
use mealsync::{Result, SyncError};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the meal endpoint.
///
/// Mirrors the real backend's observable behavior: unscoped listing
/// (newest record first), server-assigned `srv-N` ids on create, and a
/// single failure mode per operation.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct FakeRemote {
    inner: Arc<Inner>,
}

#[derive(Default)]
#[allow(dead_code)]
struct Inner {
    records: Mutex<Vec<MealRecord>>,
    fail_list: AtomicBool,
    fail_create: AtomicBool,
    next_id: AtomicU64,
    create_calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record as if it had been created earlier.
    pub fn seed(&self, record: MealRecord) {
        self.inner.records.lock().unwrap().push(record);
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.inner.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.inner.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Number of create attempts that reached the "server".
    pub fn create_calls(&self) -> usize {
        self.inner.create_calls.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Vec<MealRecord> {
        self.inner.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteMealStore for FakeRemote {
    async fn list_all(&self) -> Result<Vec<MealRecord>> {
        if self.inner.fail_list.load(Ordering::SeqCst) {
            return Err(SyncError::Network("connection refused".to_string()));
        }

        // Newest first, like the hosted endpoint.
        let mut all = self.inner.records.lock().unwrap().clone();
        all.reverse();
        Ok(all)
    }

    async fn create(&self, record: &MealRecord) -> Result<MealRecord> {
        self.inner.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_create.load(Ordering::SeqCst) {
            return Err(SyncError::Network("connection refused".to_string()));
        }

        // Client-supplied ids are ignored; the server assigns its own.
        let n = self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut confirmed = record.clone();
        confirmed.id = format!("srv-{}", n);

        self.inner.records.lock().unwrap().push(confirmed.clone());
        Ok(confirmed)
    }
}

/// Fresh scratch directory for one test's cache/identity files.
#[allow(dead_code)]
pub fn temp_data_dir(tag: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let dir = std::env::temp_dir().join(format!(
        "mealsync-test-{}-{}-{}",
        tag,
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

#[allow(dead_code)]
pub fn meal(id: &str, name: &str, calories: i64, date: &str, user_email: &str) -> MealRecord {
    MealRecord {
        id: id.to_string(),
        meal_name: name.to_string(),
        calories,
        date: day(date),
        user_email: user_email.to_string(),
    }
}

#[allow(dead_code)]
pub fn day(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("Bad test date")
}
