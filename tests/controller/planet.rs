//! Tests for the planet and species endpoints.

use holocron::{
    model::catalog::{CreatePlanetDto, CreateSpeciesDto},
    server::controller::{
        planet::{create_planet, get_planet, get_planet_characters, get_planets},
        species::{create_species, get_species_characters},
    },
};

use super::*;

/// Expect planets listed in insertion order
#[tokio::test]
async fn get_planets_returns_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Tatooine")
        .with_mock_planet("Alderaan")
        .build()
        .await?;

    let result = get_planets(State(test.to_app_state::<AppState>())).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Tatooine", "Alderaan"]);

    Ok(())
}

#[tokio::test]
async fn get_planet_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_planet(State(test.to_app_state::<AppState>()), Path(7)).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Planet not found");

    Ok(())
}

/// Expect a created planet and species to be linked by planet_id
#[tokio::test]
async fn create_planet_then_species() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let state = test.to_app_state::<AppState>();

    let result = create_planet(
        State(state.clone()),
        Json(CreatePlanetDto {
            name: "Kashyyyk".to_string(),
            description: "Forest world".to_string(),
        }),
    )
    .await;
    let (status, planet) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::CREATED);

    let planet_id = planet["id"].as_i64().unwrap() as i32;
    let result = create_species(
        State(state),
        Json(CreateSpeciesDto {
            species_type: "Wookiee".to_string(),
            planet_id,
        }),
    )
    .await;
    let (status, species) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(species["type"], "Wookiee");
    assert_eq!(species["planet_id"], planet_id);

    Ok(())
}

/// Expect 404 when creating a species on a planet that does not exist
#[tokio::test]
async fn create_species_on_missing_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = create_species(
        State(test.to_app_state::<AppState>()),
        Json(CreateSpeciesDto {
            species_type: "Wookiee".to_string(),
            planet_id: 1,
        }),
    )
    .await;

    let (status, _) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a planet's characters and a species' characters to be looked up by foreign key
#[tokio::test]
async fn relationship_lookups() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let (planet, species, character) = test
        .catalog()
        .insert_mock_character_with_homeworld()
        .await?;
    let state = test.to_app_state::<AppState>();

    let result = get_planet_characters(State(state.clone()), Path(planet.id)).await;
    let (status, from_planet) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::OK);

    let result = get_species_characters(State(state), Path(species.id)).await;
    let (status, of_species) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(from_planet, of_species);
    assert_eq!(from_planet[0]["id"], character.id);

    Ok(())
}
