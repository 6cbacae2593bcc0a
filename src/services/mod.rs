// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod projection;
pub mod remote;
pub mod sync;

pub use projection::DayView;
pub use remote::{MealApiClient, RemoteMealStore};
pub use sync::{SyncEngine, SyncStatus};
