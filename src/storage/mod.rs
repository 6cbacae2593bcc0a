// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable local storage: per-user meal caches and the identity file.

pub mod cache;
pub mod identity;

pub use cache::MealCache;
pub use identity::IdentityStore;
