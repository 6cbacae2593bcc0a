// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mealsync: offline-tolerant daily meal log client
//!
//! This crate synchronizes a remote, authoritative meal store with a
//! local per-user cache: fetches are filtered to the active identity and
//! the current day, successful results are written through to disk, and
//! when the network is down the last-known cache is served in a degraded
//! mode instead of an error.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod time_utils;

pub use error::{Result, SyncError};
