//! Server application core modules.
//!
//! This module contains the server side of Holocron: configuration, database access,
//! record serialization, business services and the HTTP API. Persistence goes through
//! sea-orm, every relationship is resolved by an explicit repository lookup keyed by
//! foreign key value.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
