// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Remote meal store client.
//!
//! The endpoint is not partitioned server-side: `list_all` returns every
//! record visible to the caller, and per-user/per-day scoping happens in
//! the sync engine. Failures collapse to `SyncError::Network` — the engine
//! only needs "available" vs "unavailable" to pick its fallback path —
//! but the status-code/transport distinction is logged here first.

use crate::error::{Result, SyncError};
use crate::models::MealRecord;
use async_trait::async_trait;
use std::time::Duration;

/// Operations the sync engine needs from the remote store.
///
/// A trait so tests can drive the engine with an in-memory store and
/// forced failures instead of a live endpoint.
#[async_trait]
pub trait RemoteMealStore: Send + Sync {
    /// Fetch every record the endpoint exposes.
    async fn list_all(&self) -> Result<Vec<MealRecord>>;

    /// Submit a new record. The returned copy carries the server-assigned
    /// id and MUST replace the caller's local copy; on failure the record
    /// was not persisted and is discarded, not retried.
    async fn create(&self, record: &MealRecord) -> Result<MealRecord>;
}

/// HTTP client for the meal API.
#[derive(Clone)]
pub struct MealApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealApiClient {
    /// Create a client against `base_url` (no trailing slash).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SyncError::Internal(anyhow::anyhow!("HTTP client init: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn meals_url(&self) -> String {
        format!("{}/api/meals", self.base_url)
    }

    /// Check response status and parse the JSON body, logging the
    /// distinguishing failure detail before collapsing to `Network`.
    async fn check_response_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                body = %body.chars().take(200).collect::<String>(),
                "Meal API returned an error status"
            );
            return Err(SyncError::Network(format!("HTTP {}", status)));
        }

        response
            .json()
            .await
            .map_err(|e| SyncError::Network(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl RemoteMealStore for MealApiClient {
    async fn list_all(&self) -> Result<Vec<MealRecord>> {
        let response = self.http.get(self.meals_url()).send().await.map_err(|e| {
            tracing::warn!(error = %e, "Meal API unreachable (transport failure)");
            SyncError::Network(e.to_string())
        })?;

        self.check_response_json(response).await
    }

    async fn create(&self, record: &MealRecord) -> Result<MealRecord> {
        let response = self
            .http
            .post(self.meals_url())
            .json(record)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Meal API unreachable (transport failure)");
                SyncError::Network(e.to_string())
            })?;

        let confirmed: MealRecord = self.check_response_json(response).await?;
        tracing::debug!(id = %confirmed.id, "Meal confirmed by server");
        Ok(confirmed)
    }
}
