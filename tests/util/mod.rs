//! Helpers for inspecting handler responses.

use axum::{body::to_bytes, http::StatusCode, response::Response};
use serde_json::Value;

/// Splits a response into its status and JSON body.
///
/// An empty body is returned as `Value::Null`.
pub async fn into_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    if bytes.is_empty() {
        return (status, Value::Null);
    }

    (status, serde_json::from_slice(&bytes).unwrap())
}
