//! Tests for the character endpoints.

use holocron::{
    model::catalog::CreateCharacterDto,
    server::controller::character::{
        create_character, get_character, get_character_vehicles, get_characters,
    },
};

use super::*;

/// Expect 200 with the serialized character
#[tokio::test]
async fn get_character_returns_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character("Luke Skywalker")
        .build()
        .await?;

    let result = get_character(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_ok());
    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Luke Skywalker");
    assert_eq!(body["planet_id"], 1);
    assert_eq!(body["specie_id"], 1);

    Ok(())
}

/// Expect 404 with an error body for a character that does not exist
#[tokio::test]
async fn get_character_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_character(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_err());
    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Character not found");

    Ok(())
}

/// Expect 500 when required database tables don't exist
#[tokio::test]
async fn get_characters_fails_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_characters(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_err());
    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect 201 with the created character
#[tokio::test]
async fn create_character_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let planet = test.catalog().insert_planet("Corellia").await?;
    let species = test.catalog().insert_mock_species(planet.id).await?;

    let result = create_character(
        State(test.to_app_state::<AppState>()),
        Json(CreateCharacterDto {
            name: "Han Solo".to_string(),
            description: "Smuggler".to_string(),
            planet_id: planet.id,
            specie_id: species.id,
        }),
    )
    .await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Han Solo");
    assert_eq!(body["planet_id"], planet.id);

    Ok(())
}

/// Expect 400 for a description longer than 500 characters
#[tokio::test]
async fn create_character_rejects_long_description() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let planet = test.catalog().insert_mock_planet().await?;
    let species = test.catalog().insert_mock_species(planet.id).await?;

    let result = create_character(
        State(test.to_app_state::<AppState>()),
        Json(CreateCharacterDto {
            name: "Han Solo".to_string(),
            description: "x".repeat(501),
            planet_id: planet.id,
            specie_id: species.id,
        }),
    )
    .await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("description"));

    Ok(())
}

/// Expect the vehicles of the character, with the type under the `type` key
#[tokio::test]
async fn get_character_vehicles_returns_vehicles() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let (_, _, character) = test
        .catalog()
        .insert_mock_character_with_homeworld()
        .await?;
    test.catalog().insert_mock_vehicle(character.id).await?;

    let result =
        get_character_vehicles(State(test.to_app_state::<AppState>()), Path(character.id)).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    let vehicles = body.as_array().unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0]["type"], "repulsorcraft");
    assert_eq!(vehicles[0]["charac_id"], character.id);

    Ok(())
}
