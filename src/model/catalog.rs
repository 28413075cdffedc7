//! Wire shapes for catalog records.
//!
//! Related records are referenced by their foreign key only, never inlined.

use serde::{Deserialize, Serialize};

/// A character as sent to API consumers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Homeworld planet ID
    pub planet_id: i32,
    /// Species ID
    pub specie_id: i32,
}

/// A vehicle as sent to API consumers.
///
/// The vehicle type is stored in the `type` column and exposed under the same key,
/// while Rust code refers to it as `vehicle_type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub max_speed: String,
    /// Owning character ID
    pub charac_id: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// A species as sent to API consumers, `species_type` is exposed as `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SpeciesDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub species_type: String,
    /// Native planet ID
    pub planet_id: i32,
}

/// Request body for creating a character
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateCharacterDto {
    pub name: String,
    /// At most 500 characters
    pub description: String,
    pub planet_id: i32,
    pub specie_id: i32,
}

/// Request body for creating a vehicle
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateVehicleDto {
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub max_speed: String,
    pub charac_id: i32,
}

/// Request body for creating a planet
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreatePlanetDto {
    pub name: String,
    /// At most 500 characters
    pub description: String,
}

/// Request body for creating a species
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateSpeciesDto {
    #[serde(rename = "type")]
    pub species_type: String,
    pub planet_id: i32,
}
