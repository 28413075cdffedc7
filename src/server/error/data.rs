use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while reading or writing catalog and user records.
#[derive(Error, Debug)]
pub enum DataError {
    /// No record of `resource` exists with the given ID.
    #[error("{resource} ID {id} not found")]
    NotFound { resource: &'static str, id: i32 },
    /// The storage engine rejected a write on a unique or foreign key constraint.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    /// A request field failed validation before reaching the database.
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    /// The request body or a path parameter could not be extracted.
    #[error("{0}")]
    InvalidRequest(String),
}

impl DataError {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }
}

impl IntoResponse for DataError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { resource, id } => {
                tracing::debug!(id = %id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("{} not found", resource),
                    }),
                )
                    .into_response()
            }
            Self::ConstraintViolation(_) => {
                tracing::debug!("{}", self);

                // The database detail names tables and columns, keep it out of the response
                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "Record conflicts with existing data".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidField { .. } | Self::InvalidRequest(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
