use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new favorite for `user_id`
    ///
    /// `character_id` and `planet_id` are independently optional; a favorite may point at
    /// neither, either or both.
    pub async fn create(
        &self,
        user_id: i32,
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        favorite_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Returns every favorite owned by a user
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the user's favorite pointing only at `character_id`
    pub async fn find_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::CharacterId.eq(character_id))
            .filter(entity::favorite::Column::PlanetId.is_null())
            .one(self.db)
            .await
    }

    /// Finds the user's favorite pointing only at `planet_id`
    pub async fn find_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::PlanetId.eq(planet_id))
            .filter(entity::favorite::Column::CharacterId.is_null())
            .one(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use holocron_test_utils::prelude::*;

        use crate::server::data::favorite::FavoriteRepository;

        /// Expect success for every combination of optional targets
        #[tokio::test]
        async fn creates_favorite_with_any_targets() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let (planet, _, character) = test
                .catalog()
                .insert_mock_character_with_homeworld()
                .await?;
            let user = test.user().insert_user("luke").await?;

            let favorite_repository = FavoriteRepository::new(&test.db);
            let neither = favorite_repository.create(user.id, None, None).await?;
            let character_only = favorite_repository
                .create(user.id, Some(character.id), None)
                .await?;
            let planet_only = favorite_repository
                .create(user.id, None, Some(planet.id))
                .await?;
            let both = favorite_repository
                .create(user.id, Some(character.id), Some(planet.id))
                .await?;

            assert_eq!((neither.character_id, neither.planet_id), (None, None));
            assert_eq!(character_only.character_id, Some(character.id));
            assert_eq!(planet_only.planet_id, Some(planet.id));
            assert_eq!(
                (both.character_id, both.planet_id),
                (Some(character.id), Some(planet.id))
            );

            Ok(())
        }

        /// Expect Error when owning user does not exist in database
        #[tokio::test]
        async fn fails_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;

            let nonexistent_user_id = 1;
            let favorite_repository = FavoriteRepository::new(&test.db);
            let result = favorite_repository
                .create(nonexistent_user_id, None, None)
                .await;

            assert!(result.is_err());

            Ok(())
        }

        /// Expect Error when favorited character does not exist in database
        #[tokio::test]
        async fn fails_for_nonexistent_character() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_user_tables()
                .with_mock_user("luke")
                .build()
                .await?;

            let favorite_repository = FavoriteRepository::new(&test.db);
            let result = favorite_repository.create(1, Some(1), None).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_user_id {
        use holocron_test_utils::prelude::*;

        use crate::server::data::favorite::FavoriteRepository;

        /// Expect only favorites owned by the requested user
        #[tokio::test]
        async fn returns_user_favorites() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let (luke, character, planet) = test.user().insert_user_with_favorites("luke").await?;
            let leia = test.user().insert_user("leia").await?;
            test.user()
                .insert_favorite(leia.id, Some(character.id), None)
                .await?;

            let favorite_repository = FavoriteRepository::new(&test.db);
            let favorites = favorite_repository.get_by_user_id(luke.id).await?;

            assert_eq!(favorites.len(), 2);
            assert!(favorites.iter().all(|f| f.user_id == luke.id));
            assert_eq!(favorites[0].character_id, Some(character.id));
            assert_eq!(favorites[1].planet_id, Some(planet.id));

            Ok(())
        }
    }

    mod find_favorite {
        use holocron_test_utils::prelude::*;

        use crate::server::data::favorite::FavoriteRepository;

        /// Expect single-target lookups to find matching favorites only
        #[tokio::test]
        async fn finds_single_target_favorites() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let (user, character, planet) = test.user().insert_user_with_favorites("luke").await?;

            let favorite_repository = FavoriteRepository::new(&test.db);
            let character_favorite = favorite_repository
                .find_character_favorite(user.id, character.id)
                .await?;
            let planet_favorite = favorite_repository
                .find_planet_favorite(user.id, planet.id)
                .await?;
            let other_user = favorite_repository
                .find_planet_favorite(user.id + 1, planet.id)
                .await?;

            assert!(matches!(character_favorite, Some(f) if f.character_id == Some(character.id)));
            assert!(matches!(planet_favorite, Some(f) if f.planet_id == Some(planet.id)));
            assert!(other_user.is_none());

            Ok(())
        }

        /// Expect a favorite of both targets not to match a single-target lookup
        #[tokio::test]
        async fn ignores_favorites_of_both() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let (planet, _, character) = test
                .catalog()
                .insert_mock_character_with_homeworld()
                .await?;
            let user = test.user().insert_user("luke").await?;
            test.user()
                .insert_favorite(user.id, Some(character.id), Some(planet.id))
                .await?;

            let favorite_repository = FavoriteRepository::new(&test.db);
            let result = favorite_repository
                .find_character_favorite(user.id, character.id)
                .await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod delete {
        use holocron_test_utils::prelude::*;

        use crate::server::data::favorite::FavoriteRepository;

        /// Expect success when deleting favorite
        #[tokio::test]
        async fn deletes_existing_favorite() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let (user, _, _) = test.user().insert_user_with_favorites("luke").await?;

            let favorite_repository = FavoriteRepository::new(&test.db);
            let favorites = favorite_repository.get_by_user_id(user.id).await?;
            let result = favorite_repository.delete(favorites[0].id).await?;

            assert_eq!(result.rows_affected, 1);
            assert_eq!(favorite_repository.get_by_user_id(user.id).await?.len(), 1);

            Ok(())
        }
    }
}
