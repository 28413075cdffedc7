use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct SpeciesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpeciesRepository<'a, C> {
    /// Creates a new instance of [`SpeciesRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new species native to `planet_id`
    pub async fn create(
        &self,
        species_type: String,
        planet_id: i32,
    ) -> Result<entity::species::Model, DbErr> {
        let species = entity::species::ActiveModel {
            species_type: ActiveValue::Set(species_type),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        species.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::species::Model>, DbErr> {
        entity::prelude::Species::find()
            .order_by_asc(entity::species::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        species_id: i32,
    ) -> Result<Option<entity::species::Model>, DbErr> {
        entity::prelude::Species::find_by_id(species_id)
            .one(self.db)
            .await
    }

    /// Returns the species native to a planet
    pub async fn get_by_planet_id(
        &self,
        planet_id: i32,
    ) -> Result<Vec<entity::species::Model>, DbErr> {
        entity::prelude::Species::find()
            .filter(entity::species::Column::PlanetId.eq(planet_id))
            .order_by_asc(entity::species::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a species
    ///
    /// Returns OK regardless of species existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, species_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Species::delete_by_id(species_id)
            .exec(self.db)
            .await
    }
}
