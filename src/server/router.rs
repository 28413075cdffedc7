//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here along with its OpenAPI specification, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so the router answers each method on it.
///
/// # Registered Endpoints
/// - `GET, POST /api/people`, `GET /api/people/{id}`, `GET /api/people/{id}/vehicles`
/// - `GET, POST /api/planets`, `GET /api/planets/{id}`, `GET /api/planets/{id}/people`,
///   `GET /api/planets/{id}/species`
/// - `GET, POST /api/species`, `GET /api/species/{id}`, `GET /api/species/{id}/people`
/// - `GET, POST /api/vehicles`, `GET /api/vehicles/{id}`
/// - `GET, POST /api/users`, `GET, DELETE /api/users/{id}`
/// - `GET /api/users/{id}/favorites`
/// - `POST /api/users/{id}/favorites/people/{character_id}`
/// - `POST /api/users/{id}/favorites/planets/{planet_id}`
/// - `DELETE /api/users/{id}/favorites/{favorite_id}`
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::CATALOG_TAG, description = "Characters, planets, species and vehicles"),
        (name = controller::USER_TAG, description = "Users and their favorites"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Characters
        .routes(routes!(
            controller::character::get_characters,
            controller::character::create_character
        ))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::character::get_character_vehicles))
        // Planets
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::planet::get_planet_characters))
        .routes(routes!(controller::planet::get_planet_species))
        // Species
        .routes(routes!(
            controller::species::get_all_species,
            controller::species::create_species
        ))
        .routes(routes!(controller::species::get_species))
        .routes(routes!(controller::species::get_species_characters))
        // Vehicles
        .routes(routes!(
            controller::vehicle::get_vehicles,
            controller::vehicle::create_vehicle
        ))
        .routes(routes!(controller::vehicle::get_vehicle))
        // Users
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::delete_user
        ))
        // Favorites
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(controller::favorite::add_character_favorite))
        .routes(routes!(controller::favorite::add_planet_favorite))
        .routes(routes!(controller::favorite::remove_favorite))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
