//! Flat serialization of database records.
//!
//! Every entity model implements [`SerializeRecord`], projecting its columns onto the wire
//! shape in [`crate::model`]. The projection copies fields one to one, substitutes logical
//! names where the column name differs and never follows a relationship: related records
//! appear only as their foreign key.

use crate::{
    model::{
        catalog::{CharacterDto, PlanetDto, SpeciesDto, VehicleDto},
        user::{FavoriteDto, UserDto},
    },
    server::model::db::{
        CharacterModel, FavoriteModel, PlanetModel, SpeciesModel, UserModel, VehicleModel,
    },
};

/// Projection of a record into its flat, transmittable shape.
///
/// Implementations are pure and total: no validation, no defaulting, no I/O.
pub trait SerializeRecord {
    /// The serialized shape of the record
    type Dto: serde::Serialize;

    /// Serialize the record into its wire shape.
    fn serialize(&self) -> Self::Dto;
}

impl SerializeRecord for CharacterModel {
    type Dto = CharacterDto;

    fn serialize(&self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            planet_id: self.planet_id,
            specie_id: self.specie_id,
        }
    }
}

impl SerializeRecord for VehicleModel {
    type Dto = VehicleDto;

    fn serialize(&self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name.clone(),
            vehicle_type: self.vehicle_type.clone(),
            max_speed: self.max_speed.clone(),
            charac_id: self.charac_id,
        }
    }
}

impl SerializeRecord for PlanetModel {
    type Dto = PlanetDto;

    fn serialize(&self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

impl SerializeRecord for SpeciesModel {
    type Dto = SpeciesDto;

    fn serialize(&self) -> SpeciesDto {
        SpeciesDto {
            id: self.id,
            species_type: self.species_type.clone(),
            planet_id: self.planet_id,
        }
    }
}

impl SerializeRecord for UserModel {
    type Dto = UserDto;

    fn serialize(&self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

impl SerializeRecord for FavoriteModel {
    type Dto = FavoriteDto;

    fn serialize(&self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            character_id: self.character_id,
            planet_id: self.planet_id,
        }
    }
}

/// Serialize every record in `records`, preserving order.
pub fn serialize_all<R: SerializeRecord>(records: &[R]) -> Vec<R::Dto> {
    records.iter().map(SerializeRecord::serialize).collect()
}
