//! Business logic services.
//!
//! Services coordinate repositories, check that referenced records exist before writing,
//! validate request fields the database cannot enforce and return serialized records.

pub mod catalog;
pub mod favorite;
pub mod user;
pub mod validate;
