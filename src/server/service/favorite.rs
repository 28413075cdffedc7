//! Favorite service.
//!
//! A favorite bookmarks a character or a planet for a user. Favorites created here point
//! at exactly one target, and adding the same target twice returns the existing favorite.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::FavoriteDto,
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, user::UserRepository,
        },
        error::{data::DataError, Error},
        model::record::{serialize_all, SerializeRecord},
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the favorites of a user, or `NotFound` if the user does not exist
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        self.require_user(user_id).await?;

        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(serialize_all(&favorites))
    }

    /// Adds a character to the user's favorites
    ///
    /// # Returns
    /// - `Ok((FavoriteDto, true))` - A new favorite was created
    /// - `Ok((FavoriteDto, false))` - The character was already a favorite
    /// - `Err(Error::DataError(DataError::NotFound))` - User or character does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<(FavoriteDto, bool), Error> {
        self.require_user(user_id).await?;

        if CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .is_none()
        {
            return Err(DataError::not_found("Character", character_id).into());
        }

        let favorite_repository = FavoriteRepository::new(self.db);

        if let Some(existing) = favorite_repository
            .find_character_favorite(user_id, character_id)
            .await?
        {
            return Ok((existing.serialize(), false));
        }

        let favorite = favorite_repository
            .create(user_id, Some(character_id), None)
            .await?;

        tracing::info!(
            user_id = %user_id,
            character_id = %character_id,
            "Added character favorite"
        );

        Ok((favorite.serialize(), true))
    }

    /// Adds a planet to the user's favorites
    ///
    /// Same result semantics as [`Self::add_character_favorite`].
    pub async fn add_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<(FavoriteDto, bool), Error> {
        self.require_user(user_id).await?;

        if PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .is_none()
        {
            return Err(DataError::not_found("Planet", planet_id).into());
        }

        let favorite_repository = FavoriteRepository::new(self.db);

        if let Some(existing) = favorite_repository
            .find_planet_favorite(user_id, planet_id)
            .await?
        {
            return Ok((existing.serialize(), false));
        }

        let favorite = favorite_repository
            .create(user_id, None, Some(planet_id))
            .await?;

        tracing::info!(user_id = %user_id, planet_id = %planet_id, "Added planet favorite");

        Ok((favorite.serialize(), true))
    }

    /// Removes one of the user's favorites
    ///
    /// A favorite that exists but belongs to another user is reported as `NotFound`.
    pub async fn remove_favorite(&self, user_id: i32, favorite_id: i32) -> Result<(), Error> {
        let favorite_repository = FavoriteRepository::new(self.db);

        match favorite_repository.get_by_id(favorite_id).await? {
            Some(favorite) if favorite.user_id == user_id => {}
            _ => return Err(DataError::not_found("Favorite", favorite_id).into()),
        }

        favorite_repository.delete(favorite_id).await?;

        tracing::info!(user_id = %user_id, favorite_id = %favorite_id, "Removed favorite");

        Ok(())
    }

    async fn require_user(&self, user_id: i32) -> Result<(), Error> {
        match UserRepository::new(self.db).get_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(DataError::not_found("User", user_id).into()),
        }
    }
}
