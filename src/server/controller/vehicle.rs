use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CreateVehicleDto, VehicleDto},
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

/// List all vehicles
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving vehicles", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicles = CatalogService::new(&state.db).get_vehicles().await?;

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Create a vehicle owned by an existing character
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = CATALOG_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleDto),
        (status = 400, description = "Malformed body or invalid request field", body = ErrorDto),
        (status = 404, description = "Owning character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(vehicle): Json<CreateVehicleDto>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = CatalogService::new(&state.db).create_vehicle(vehicle).await?;

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// Get a vehicle by ID
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Success when retrieving vehicle", body = VehicleDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = CatalogService::new(&state.db).get_vehicle(id).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}
