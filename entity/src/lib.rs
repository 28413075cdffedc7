//! sea-orm entities for the Holocron catalog.
//!
//! Each module declares one table. Column names are the physical names stored
//! in the database; where the Rust attribute name differs (`vehicle_type`,
//! `species_type`) the mapping is declared with `column_name`.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod species;
pub mod user;
pub mod vehicle;
