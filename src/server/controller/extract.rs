//! Request extractors whose rejections render as [`ErrorDto`](crate::model::api::ErrorDto).
//!
//! Axum's own `Json` and `Path` reject with a plain-text body. These wrappers route the
//! rejection through [`Error`] so a malformed body, a missing field or an unparsable path
//! parameter answers 400 with `{"error": ".."}` like every other failure.

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::server::error::Error;

/// JSON request body, also usable as a JSON response.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);
