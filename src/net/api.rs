//! REST helpers for the floor and table endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. The page collapses all variants
//! into one user-facing message per endpoint and logs the detail.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Floor, Table};
use crate::config::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn floors_endpoint(config: &ClientConfig) -> String {
    config.endpoint("/floors")
}

#[cfg(any(test, feature = "hydrate"))]
fn tables_endpoint(config: &ClientConfig, floor_id: i64) -> String {
    config.endpoint(&format!("/tables?floor={floor_id}"))
}

/// Fetch every floor from `GET /floors`, in backend order.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body is not a floor list.
pub async fn fetch_floors(config: &ClientConfig) -> Result<Vec<Floor>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<Vec<Floor>>(&floors_endpoint(config)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the tables of one floor from `GET /tables?floor=<id>`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body lacks a `results` array of tables.
pub async fn fetch_tables(config: &ClientConfig, floor_id: i64) -> Result<Vec<Table>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json::<super::types::TablesResponse>(&tables_endpoint(config, floor_id)).await?;
        Ok(body.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, floor_id);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
