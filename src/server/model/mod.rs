//! Server-side models: application state, database model aliases and record serialization.

pub mod app;
pub mod db;
pub mod record;
