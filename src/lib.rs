//! Holocron: a catalog of characters, planets, species and vehicles, with user favorites.
//!
//! [`model`] holds the serialized (wire) shapes shared by every consumer. The `server`
//! module carries persistence, services and the HTTP API.

pub mod model;

#[cfg(feature = "server")]
pub mod server;
