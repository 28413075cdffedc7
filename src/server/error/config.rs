use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while reading [`Config`](crate::server::config::Config) from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable such as `DATABASE_URL` is not set.
    #[error("Environment variable {0} must be set")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed, e.g. a `LISTEN_ADDR` that is not `host:port`.
    #[error("Environment variable {var} has an invalid value: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
