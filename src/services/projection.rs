// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View projection: the renderable day view derived from the engine's
//! current list. Pure and deterministic — same input list, same view —
//! with no state of its own.

use crate::models::MealRecord;

/// Renderable snapshot of one user's day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    /// De-duplicated display list, order preserved from the input.
    pub meals: Vec<MealRecord>,
    /// Number of displayed records.
    pub total_count: usize,
    /// Calorie sum; absent/invalid values count as zero.
    pub total_calories: i64,
    /// True when the list came from cache because the remote store was
    /// unreachable — the data may be stale.
    pub stale: bool,
}

/// Derive the day view from an already filtered and sorted list.
///
/// Duplicate ids can appear transiently when a confirmed create races a
/// fetch of the same record; the first occurrence (most recently merged)
/// wins.
pub fn project(records: &[MealRecord], stale: bool) -> DayView {
    let mut seen = std::collections::HashSet::new();
    let mut meals = Vec::with_capacity(records.len());

    for record in records {
        if seen.insert(record.id.clone()) {
            meals.push(record.clone());
        }
    }

    let total_calories = meals.iter().map(|m| m.calories.max(0)).sum();

    DayView {
        total_count: meals.len(),
        total_calories,
        meals,
        stale,
    }
}
