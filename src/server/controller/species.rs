use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CharacterDto, CreateSpeciesDto, SpeciesDto},
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

/// List all species
#[utoipa::path(
    get,
    path = "/api/species",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving species", body = Vec<SpeciesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_species(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let species = CatalogService::new(&state.db).get_all_species().await?;

    Ok((StatusCode::OK, Json(species)))
}

/// Create a species native to an existing planet
#[utoipa::path(
    post,
    path = "/api/species",
    tag = CATALOG_TAG,
    request_body = CreateSpeciesDto,
    responses(
        (status = 201, description = "Species created", body = SpeciesDto),
        (status = 400, description = "Malformed body or invalid request field", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_species(
    State(state): State<AppState>,
    Json(species): Json<CreateSpeciesDto>,
) -> Result<impl IntoResponse, Error> {
    let species = CatalogService::new(&state.db).create_species(species).await?;

    Ok((StatusCode::CREATED, Json(species)))
}

/// Get a species by ID
#[utoipa::path(
    get,
    path = "/api/species/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Species ID")),
    responses(
        (status = 200, description = "Success when retrieving species", body = SpeciesDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let species = CatalogService::new(&state.db).get_species(id).await?;

    Ok((StatusCode::OK, Json(species)))
}

/// List the characters of a species
#[utoipa::path(
    get,
    path = "/api/species/{id}/people",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Species ID")),
    responses(
        (status = 200, description = "Success when retrieving characters", body = Vec<CharacterDto>),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species_characters(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let characters = CatalogService::new(&state.db)
        .get_species_characters(id)
        .await?;

    Ok((StatusCode::OK, Json(characters)))
}
