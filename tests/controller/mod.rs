//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, then the response status and
//! JSON body are checked.

mod character;
mod favorite;
mod planet;
mod user;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::{
    controller::extract::{Json, Path},
    model::app::AppState,
};
use holocron_test_utils::prelude::*;

use crate::util::into_json;
