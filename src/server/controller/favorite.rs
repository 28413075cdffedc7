use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{api::ErrorDto, user::FavoriteDto},
    server::{
        controller::{
            extract::{Json, Path},
            USER_TAG,
        },
        error::Error,
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

/// 201 for a new favorite, 200 when the target was already a favorite
fn added_status(created: bool) -> StatusCode {
    if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}

/// List a user's favorites
#[utoipa::path(
    get,
    path = "/api/users/{id}/favorites",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Success when retrieving favorites", body = Vec<FavoriteDto>),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .get_user_favorites(id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a character to a user's favorites
///
/// # Responses
/// - 201 (Created): New favorite
/// - 200 (OK): The character was already a favorite, the existing favorite is returned
/// - 404 (Not Found): User or character does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/users/{id}/favorites/people/{character_id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 201, description = "Favorite added", body = FavoriteDto),
        (status = 200, description = "Character already a favorite", body = FavoriteDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_character_favorite(
    State(state): State<AppState>,
    Path((id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let (favorite, created) = FavoriteService::new(&state.db)
        .add_character_favorite(id, character_id)
        .await?;

    Ok((added_status(created), Json(favorite)))
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/api/users/{id}/favorites/planets/{planet_id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 201, description = "Favorite added", body = FavoriteDto),
        (status = 200, description = "Planet already a favorite", body = FavoriteDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_planet_favorite(
    State(state): State<AppState>,
    Path((id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let (favorite, created) = FavoriteService::new(&state.db)
        .add_planet_favorite(id, planet_id)
        .await?;

    Ok((added_status(created), Json(favorite)))
}

/// Remove one of a user's favorites
#[utoipa::path(
    delete,
    path = "/api/users/{id}/favorites/{favorite_id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("favorite_id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Favorite not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((id, favorite_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_favorite(id, favorite_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
