//! HTTP controller endpoints for the Holocron web API.
//!
//! Controllers extract path parameters and JSON bodies, call the matching service and
//! map its result onto a status code. Errors are returned as [`crate::server::error::Error`],
//! which renders itself as a JSON error body.

pub mod character;
pub mod extract;
pub mod favorite;
pub mod planet;
pub mod species;
pub mod user;
pub mod vehicle;

/// OpenAPI tag of the character, planet, species and vehicle endpoints
pub static CATALOG_TAG: &str = "catalog";

/// OpenAPI tag of the user and favorite endpoints
pub static USER_TAG: &str = "user";
