//! Error types for the Holocron server application.
//!
//! Domain-specific errors (configuration, data) are aggregated into [`Error`], which
//! implements `IntoResponse` so controllers can return it directly. Database errors caused
//! by unique or foreign key constraints are reclassified as
//! [`DataError::ConstraintViolation`] when converted, so `?` surfaces them as their own kind.

pub mod config;
pub mod data;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, data::DataError},
};

/// Main error type for the Holocron server application.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Data errors (missing records, constraint violations, invalid input)
/// - External library errors (database, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Data error (record not found, constraint violation, invalid field).
    #[error(transparent)]
    DataError(#[from] DataError),
    /// Database error not attributable to a constraint (connection, query, schema).
    #[error(transparent)]
    DbErr(DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail))
            | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::DataError(DataError::ConstraintViolation(detail))
            }
            _ => Self::DbErr(err),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::DataError(DataError::InvalidRequest(rejection.body_text()))
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::DataError(DataError::InvalidRequest(rejection.body_text()))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid request field, malformed body or path parameter
/// - 404 Not Found - Missing record
/// - 409 Conflict - Unique or foreign key constraint violated
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::DataError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged and the client receives a generic message so implementation details
/// are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
