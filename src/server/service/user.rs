use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{data::DataError, Error},
        model::record::{serialize_all, SerializeRecord},
        service::validate::{
            require_email, require_max_chars, require_non_empty, EMAIL_MAX_CHARS,
            USERNAME_MAX_CHARS,
        },
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(serialize_all(&users))
    }

    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(DataError::not_found("User", user_id))?;

        Ok(user.serialize())
    }

    /// Creates a user
    ///
    /// The password is stored as given and is never part of the returned DTO.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::DataError(DataError::InvalidField))` - Username, email or password invalid
    /// - `Err(Error::DataError(DataError::ConstraintViolation))` - Username or email taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        require_non_empty("username", &user.username)?;
        require_max_chars("username", &user.username, USERNAME_MAX_CHARS)?;
        require_max_chars("email", &user.email, EMAIL_MAX_CHARS)?;
        require_email("email", &user.email)?;
        require_non_empty("password", &user.password)?;

        let created = UserRepository::new(self.db)
            .create(user.username, user.email, user.password)
            .await?;

        tracing::info!(user_id = %created.id, "Created user");

        Ok(created.serialize())
    }

    /// Deletes a user, failing with `NotFound` when no row was removed
    pub async fn delete_user(&self, user_id: i32) -> Result<(), Error> {
        let result = UserRepository::new(self.db).delete(user_id).await?;

        if result.rows_affected == 0 {
            return Err(DataError::not_found("User", user_id).into());
        }

        tracing::info!(user_id = %user_id, "Deleted user");

        Ok(())
    }
}
