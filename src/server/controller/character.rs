use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CharacterDto, CreateCharacterDto, VehicleDto},
    },
    server::{
        controller::{
            extract::{Json, Path},
            CATALOG_TAG,
        },
        error::Error,
        model::app::AppState,
        service::catalog::CatalogService,
    },
};

/// List all characters
#[utoipa::path(
    get,
    path = "/api/people",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CatalogService::new(&state.db).get_characters().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Create a character
///
/// The homeworld planet and species must already exist.
///
/// # Responses
/// - 201 (Created): The created character
/// - 400 (Bad Request): Empty name or description longer than 500 characters
/// - 404 (Not Found): Planet or species does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/people",
    tag = CATALOG_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 400, description = "Malformed body or invalid request field", body = ErrorDto),
        (status = 404, description = "Planet or species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    Json(character): Json<CreateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let character = CatalogService::new(&state.db)
        .create_character(character)
        .await?;

    Ok((StatusCode::CREATED, Json(character)))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/api/people/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Success when retrieving character", body = CharacterDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character = CatalogService::new(&state.db).get_character(id).await?;

    Ok((StatusCode::OK, Json(character)))
}

/// List the vehicles owned by a character
#[utoipa::path(
    get,
    path = "/api/people/{id}/vehicles",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Success when retrieving vehicles", body = Vec<VehicleDto>),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character_vehicles(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicles = CatalogService::new(&state.db)
        .get_character_vehicles(id)
        .await?;

    Ok((StatusCode::OK, Json(vehicles)))
}
