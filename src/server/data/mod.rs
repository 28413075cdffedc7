//! Data access layer repositories.
//!
//! One repository per table. Relationships are never navigated through loaded object
//! graphs: each `get_by_*_id` method is an explicit lookup keyed by a foreign key value.
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so they run against a pool
//! or a transaction alike.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod species;
pub mod user;
pub mod vehicle;
