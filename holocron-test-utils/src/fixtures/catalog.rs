//! Catalog fixture utilities.
//!
//! Inserts planets, species, characters and vehicles into the test database. Methods
//! prefixed `insert_mock_` fill every column with test values; the remaining methods take
//! the values that tests usually assert on.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(format!("The planet {}", name)),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_planet(&self) -> Result<entity::planet::Model, TestError> {
        self.insert_planet("Tatooine").await
    }

    pub async fn insert_species(
        &self,
        species_type: &str,
        planet_id: i32,
    ) -> Result<entity::species::Model, TestError> {
        Ok(
            entity::prelude::Species::insert(entity::species::ActiveModel {
                species_type: ActiveValue::Set(species_type.to_string()),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_species(
        &self,
        planet_id: i32,
    ) -> Result<entity::species::Model, TestError> {
        self.insert_species("Human", planet_id).await
    }

    pub async fn insert_character(
        &self,
        name: &str,
        planet_id: i32,
        specie_id: i32,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(format!("{} of the catalog", name)),
                planet_id: ActiveValue::Set(planet_id),
                specie_id: ActiveValue::Set(specie_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_character(
        &self,
        planet_id: i32,
        specie_id: i32,
    ) -> Result<entity::character::Model, TestError> {
        self.insert_character("Luke Skywalker", planet_id, specie_id)
            .await
    }

    /// Insert a character along with its homeworld and species.
    ///
    /// # Returns
    /// - `(planet, species, character)` - The three inserted records
    pub async fn insert_mock_character_with_homeworld(
        &self,
    ) -> Result<
        (
            entity::planet::Model,
            entity::species::Model,
            entity::character::Model,
        ),
        TestError,
    > {
        let planet = self.insert_mock_planet().await?;
        let species = self.insert_mock_species(planet.id).await?;
        let character = self.insert_mock_character(planet.id, species.id).await?;

        Ok((planet, species, character))
    }

    pub async fn insert_vehicle(
        &self,
        name: &str,
        charac_id: i32,
    ) -> Result<entity::vehicle::Model, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                vehicle_type: ActiveValue::Set("repulsorcraft".to_string()),
                max_speed: ActiveValue::Set("250".to_string()),
                charac_id: ActiveValue::Set(charac_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_vehicle(
        &self,
        charac_id: i32,
    ) -> Result<entity::vehicle::Model, TestError> {
        self.insert_vehicle("X-34 landspeeder", charac_id).await
    }
}
