use serde::{Deserialize, Serialize};

/// A user as sent to API consumers. The password is never part of this shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
}

/// A user's bookmark, either target may be null.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}

/// Request body for creating a user
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateUserDto {
    /// At most 50 characters, unique
    pub username: String,
    /// At most 120 characters, unique
    pub email: String,
    pub password: String,
}
