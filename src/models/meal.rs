// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Meal record model: the wire-level entity plus a validated draft.

use crate::error::{Result, SyncError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A single logged meal, as stored by the remote endpoint.
///
/// The wire format uses camelCase field names and `YYYY-MM-DD` dates.
/// `calories` and `userEmail` are defaulted on deserialization because the
/// endpoint is not partitioned server-side and has historically served
/// records with missing fields; the projection clamps bad calorie values
/// to zero rather than failing the whole fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    /// Unique identifier. Server-assigned on confirmed writes; a transient
    /// `local-` placeholder before confirmation.
    pub id: String,
    /// Meal name (trimmed, non-empty for records we create)
    pub meal_name: String,
    /// Calorie count
    #[serde(default)]
    pub calories: i64,
    /// Calendar date of the meal
    pub date: NaiveDate,
    /// Partition key: which user's log this record belongs to
    #[serde(default)]
    pub user_email: String,
}

/// A locally validated meal that has not been submitted yet.
///
/// Construction is the validation boundary: a `MealDraft` always holds a
/// trimmed non-empty name and positive calories, so everything downstream
/// can assume a well-formed record.
#[derive(Debug, Clone)]
pub struct MealDraft {
    meal_name: String,
    calories: i64,
    date: NaiveDate,
}

impl MealDraft {
    /// Validate form input into a draft.
    pub fn new(meal_name: &str, calories: i64, date: NaiveDate) -> Result<Self> {
        let meal_name = meal_name.trim();
        if meal_name.is_empty() {
            return Err(SyncError::validation("mealName", "must not be empty"));
        }
        if calories <= 0 {
            return Err(SyncError::validation(
                "calories",
                format!("must be a positive integer, got {}", calories),
            ));
        }

        Ok(Self {
            meal_name: meal_name.to_string(),
            calories,
            date,
        })
    }

    pub fn meal_name(&self) -> &str {
        &self.meal_name
    }

    pub fn calories(&self) -> i64 {
        self.calories
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Stamp the partition key and a placeholder id, producing the record
    /// submitted to the remote store. The server replaces the id with its
    /// authoritative one in the confirmed copy.
    pub fn into_record(self, user_email: &str) -> MealRecord {
        MealRecord {
            id: placeholder_id(),
            meal_name: self.meal_name,
            calories: self.calories,
            date: self.date,
            user_email: user_email.to_string(),
        }
    }
}

/// Timestamp-derived placeholder id for not-yet-confirmed records.
fn placeholder_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("local-{}", millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_draft_trims_name() {
        let draft = MealDraft::new("  Pizza  ", 500, date()).unwrap();
        assert_eq!(draft.meal_name(), "Pizza");
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let err = MealDraft::new("   ", 500, date()).unwrap_err();
        assert!(matches!(
            err,
            SyncError::Validation {
                field: "mealName",
                ..
            }
        ));
    }

    #[test]
    fn test_nonpositive_calories_rejected() {
        for bad in [0, -1, -500] {
            let err = MealDraft::new("Pizza", bad, date()).unwrap_err();
            assert!(matches!(
                err,
                SyncError::Validation {
                    field: "calories",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_record_wire_format() {
        let record = MealDraft::new("Eggs", 300, date())
            .unwrap()
            .into_record("a@b.com");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["mealName"], "Eggs");
        assert_eq!(json["calories"], 300);
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["userEmail"], "a@b.com");
        assert!(json["id"].as_str().unwrap().starts_with("local-"));
    }

    #[test]
    fn test_record_tolerates_missing_fields() {
        // The endpoint has served records without userEmail or calories.
        let record: MealRecord =
            serde_json::from_str(r#"{"id":"7","mealName":"Toast","date":"2024-01-01"}"#).unwrap();
        assert_eq!(record.calories, 0);
        assert_eq!(record.user_email, "");
    }
}
