use reqwest::Client;
use serde::Serialize;
use std::env;
use thiserror::Error;

use crate::models::{AnalyticsData, RecommendationResponse};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Fixed fan-out for the chat surface; not user-configurable.
pub const RECOMMEND_TOP_K: u32 = 3;

/// Any failed call, transport or non-2xx alike. Callers never branch on the
/// cause; it only feeds the developer console trace.
#[derive(Debug, Error)]
#[error("api request failed: {0}")]
pub struct ApiError(#[from] reqwest::Error);

#[derive(Serialize)]
struct RecommendationRequest<'a> {
    prompt: &'a str,
    top_k: u32,
}

/// Thin client for the two backend endpoints. No retries, no timeouts,
/// no auth; created once at startup and shared through context.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    /// Reads `FURNIFINDR_API_URL` (loaded from `.env` at startup when
    /// present), falling back to the local development backend.
    pub fn from_env() -> Self {
        let base_url = env::var("FURNIFINDR_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn recommend(&self, prompt: &str) -> Result<RecommendationResponse, ApiError> {
        let body = RecommendationRequest {
            prompt,
            top_k: RECOMMEND_TOP_K,
        };
        let response = self
            .http
            .post(format!("{}/recommend", self.base_url))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn analytics_data(&self) -> Result<AnalyticsData, ApiError> {
        let response = self
            .http
            .get(format!("{}/analytics-data", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
