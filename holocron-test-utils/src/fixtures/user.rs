//! User and favorite fixture utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user, deriving the email from the username.
    pub async fn insert_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!("{}@holocron.test", username)),
                password: ActiveValue::Set("usetheforce".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite(
        &self,
        user_id: i32,
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a user who has favorited a character and its homeworld.
    ///
    /// # Returns
    /// - `(user, character, planet)` - The user and the two favorited records
    pub async fn insert_user_with_favorites(
        &self,
        username: &str,
    ) -> Result<
        (
            entity::user::Model,
            entity::character::Model,
            entity::planet::Model,
        ),
        TestError,
    > {
        let (planet, _, character) = self
            .setup
            .catalog()
            .insert_mock_character_with_homeworld()
            .await?;
        let user = self.insert_user(username).await?;

        self.insert_favorite(user.id, Some(character.id), None)
            .await?;
        self.insert_favorite(user.id, None, Some(planet.id)).await?;

        Ok((user, character, planet))
    }
}
