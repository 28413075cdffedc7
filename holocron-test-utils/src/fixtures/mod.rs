//! Database fixtures and in-memory model factories.
//!
//! `catalog` and `user` insert records through the test database, `factory` builds model
//! instances without touching the database.

pub mod catalog;
pub mod factory;
pub mod user;
