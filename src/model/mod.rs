//! Serialized record shapes and API request/response bodies.

pub mod api;
pub mod catalog;
pub mod user;
