use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CharacterDto, CreatePlanetDto, PlanetDto, SpeciesDto},
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

/// List all planets
#[utoipa::path(
    get,
    path = "/api/planets",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = CatalogService::new(&state.db).get_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/api/planets",
    tag = CATALOG_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 400, description = "Malformed body or invalid request field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(planet): Json<CreatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = CatalogService::new(&state.db).create_planet(planet).await?;

    Ok((StatusCode::CREATED, Json(planet)))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/api/planets/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = CatalogService::new(&state.db).get_planet(id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// List the characters whose homeworld is the planet
#[utoipa::path(
    get,
    path = "/api/planets/{id}/people",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when retrieving characters", body = Vec<CharacterDto>),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet_characters(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let characters = CatalogService::new(&state.db)
        .get_planet_characters(id)
        .await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// List the species native to the planet
#[utoipa::path(
    get,
    path = "/api/planets/{id}/species",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when retrieving species", body = Vec<SpeciesDto>),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet_species(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let species = CatalogService::new(&state.db).get_planet_species(id).await?;

    Ok((StatusCode::OK, Json(species)))
}
