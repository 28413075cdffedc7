//! Catalog service.
//!
//! Reads and writes characters, planets, species and vehicles, and resolves the
//! relationships between them through foreign key lookups. Lookups on a parent record
//! that does not exist fail with [`DataError::NotFound`] rather than returning an empty
//! list, so callers can tell "no children" apart from "no parent".


use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{
        CharacterDto, CreateCharacterDto, CreatePlanetDto, CreateSpeciesDto, CreateVehicleDto,
        PlanetDto, SpeciesDto, VehicleDto,
    },
    server::{
        data::{
            character::CharacterRepository, planet::PlanetRepository,
            species::SpeciesRepository, vehicle::VehicleRepository,
        },
        error::{data::DataError, Error},
        model::{
            db::{CharacterModel, PlanetModel, SpeciesModel, VehicleModel},
            record::{serialize_all, SerializeRecord},
        },
        service::validate::{require_max_chars, require_non_empty, DESCRIPTION_MAX_CHARS},
    },
};

/// Service for catalog records and their relationships.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of CatalogService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    // Characters

    /// Returns every character.
    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(serialize_all(&characters))
    }

    /// Returns one character.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Character found
    /// - `Err(Error::DataError(DataError::NotFound))` - No character with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        Ok(self.find_character(character_id).await?.serialize())
    }

    /// Creates a character after checking its homeworld and species exist.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The created character
    /// - `Err(Error::DataError(DataError::InvalidField))` - Empty name or description too long
    /// - `Err(Error::DataError(DataError::NotFound))` - Planet or species does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_character(
        &self,
        character: CreateCharacterDto,
    ) -> Result<CharacterDto, Error> {
        require_non_empty("name", &character.name)?;
        require_max_chars(
            "description",
            &character.description,
            DESCRIPTION_MAX_CHARS,
        )?;

        self.find_planet(character.planet_id).await?;
        self.find_species(character.specie_id).await?;

        let created = CharacterRepository::new(self.db)
            .create(
                character.name,
                character.description,
                character.planet_id,
                character.specie_id,
            )
            .await?;

        tracing::info!(character_id = %created.id, "Created character");

        Ok(created.serialize())
    }

    /// Returns the vehicles owned by a character.
    pub async fn get_character_vehicles(&self, character_id: i32) -> Result<Vec<VehicleDto>, Error> {
        self.find_character(character_id).await?;

        let vehicles = VehicleRepository::new(self.db)
            .get_by_character_id(character_id)
            .await?;

        Ok(serialize_all(&vehicles))
    }

    // Planets

    /// Returns every planet.
    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(serialize_all(&planets))
    }

    /// Returns one planet, or `NotFound`.
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        Ok(self.find_planet(planet_id).await?.serialize())
    }

    /// Creates a planet.
    pub async fn create_planet(&self, planet: CreatePlanetDto) -> Result<PlanetDto, Error> {
        require_non_empty("name", &planet.name)?;
        require_max_chars("description", &planet.description, DESCRIPTION_MAX_CHARS)?;

        let created = PlanetRepository::new(self.db)
            .create(planet.name, planet.description)
            .await?;

        tracing::info!(planet_id = %created.id, "Created planet");

        Ok(created.serialize())
    }

    /// Returns the characters whose homeworld is the planet.
    pub async fn get_planet_characters(&self, planet_id: i32) -> Result<Vec<CharacterDto>, Error> {
        self.find_planet(planet_id).await?;

        let characters = CharacterRepository::new(self.db)
            .get_by_planet_id(planet_id)
            .await?;

        Ok(serialize_all(&characters))
    }

    /// Returns the species native to the planet.
    pub async fn get_planet_species(&self, planet_id: i32) -> Result<Vec<SpeciesDto>, Error> {
        self.find_planet(planet_id).await?;

        let species = SpeciesRepository::new(self.db)
            .get_by_planet_id(planet_id)
            .await?;

        Ok(serialize_all(&species))
    }

    // Species

    /// Returns every species.
    pub async fn get_all_species(&self) -> Result<Vec<SpeciesDto>, Error> {
        let species = SpeciesRepository::new(self.db).get_all().await?;

        Ok(serialize_all(&species))
    }

    /// Returns one species, or `NotFound`.
    pub async fn get_species(&self, species_id: i32) -> Result<SpeciesDto, Error> {
        Ok(self.find_species(species_id).await?.serialize())
    }

    /// Creates a species after checking its native planet exists.
    pub async fn create_species(&self, species: CreateSpeciesDto) -> Result<SpeciesDto, Error> {
        require_non_empty("type", &species.species_type)?;

        self.find_planet(species.planet_id).await?;

        let created = SpeciesRepository::new(self.db)
            .create(species.species_type, species.planet_id)
            .await?;

        tracing::info!(species_id = %created.id, "Created species");

        Ok(created.serialize())
    }

    /// Returns the characters of the species.
    pub async fn get_species_characters(
        &self,
        species_id: i32,
    ) -> Result<Vec<CharacterDto>, Error> {
        self.find_species(species_id).await?;

        let characters = CharacterRepository::new(self.db)
            .get_by_species_id(species_id)
            .await?;

        Ok(serialize_all(&characters))
    }

    // Vehicles

    /// Returns every vehicle.
    pub async fn get_vehicles(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        Ok(serialize_all(&vehicles))
    }

    /// Returns one vehicle, or `NotFound`.
    pub async fn get_vehicle(&self, vehicle_id: i32) -> Result<VehicleDto, Error> {
        Ok(self.find_vehicle(vehicle_id).await?.serialize())
    }

    /// Creates a vehicle after checking its owning character exists.
    pub async fn create_vehicle(&self, vehicle: CreateVehicleDto) -> Result<VehicleDto, Error> {
        require_non_empty("name", &vehicle.name)?;
        require_non_empty("type", &vehicle.vehicle_type)?;

        self.find_character(vehicle.charac_id).await?;

        let created = VehicleRepository::new(self.db)
            .create(
                vehicle.name,
                vehicle.vehicle_type,
                vehicle.max_speed,
                vehicle.charac_id,
            )
            .await?;

        tracing::info!(vehicle_id = %created.id, "Created vehicle");

        Ok(created.serialize())
    }

    async fn find_character(&self, character_id: i32) -> Result<CharacterModel, Error> {
        CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .ok_or_else(|| DataError::not_found("Character", character_id).into())
    }

    async fn find_planet(&self, planet_id: i32) -> Result<PlanetModel, Error> {
        PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .ok_or_else(|| DataError::not_found("Planet", planet_id).into())
    }

    async fn find_species(&self, species_id: i32) -> Result<SpeciesModel, Error> {
        SpeciesRepository::new(self.db)
            .get_by_id(species_id)
            .await?
            .ok_or_else(|| DataError::not_found("Species", species_id).into())
    }

    async fn find_vehicle(&self, vehicle_id: i32) -> Result<VehicleModel, Error> {
        VehicleRepository::new(self.db)
            .get_by_id(vehicle_id)
            .await?
            .ok_or_else(|| DataError::not_found("Vehicle", vehicle_id).into())
    }
}
