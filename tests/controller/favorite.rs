//! Tests for the favorite endpoints.

use holocron::server::controller::favorite::{
    add_character_favorite, add_planet_favorite, get_user_favorites, remove_favorite,
};

use super::*;

/// Expect 201 for a new favorite and 200 with the same favorite when added again
#[tokio::test]
async fn add_character_favorite_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("rey").await?;
    let (_, _, character) = test
        .catalog()
        .insert_mock_character_with_homeworld()
        .await?;
    let state = test.to_app_state::<AppState>();

    let result =
        add_character_favorite(State(state.clone()), Path((user.id, character.id))).await;
    let (status, first) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["character_id"], character.id);
    assert!(first["planet_id"].is_null());

    let result = add_character_favorite(State(state), Path((user.id, character.id))).await;
    let (status, second) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);

    Ok(())
}

/// Expect 404 when favoriting a planet that does not exist
#[tokio::test]
async fn add_planet_favorite_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("rey").await?;

    let result =
        add_planet_favorite(State(test.to_app_state::<AppState>()), Path((user.id, 1))).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Planet not found");

    Ok(())
}

#[tokio::test]
async fn get_user_favorites_returns_both_kinds() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let (user, character, planet) = test.user().insert_user_with_favorites("rey").await?;

    let result = get_user_favorites(State(test.to_app_state::<AppState>()), Path(user.id)).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["character_id"], character.id);
    assert_eq!(body[1]["planet_id"], planet.id);

    Ok(())
}

/// Expect 404 when removing a favorite through another user
#[tokio::test]
async fn remove_favorite_of_other_user_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    test.user().insert_user_with_favorites("rey").await?;
    let finn = test.user().insert_user("finn").await?;
    let state = test.to_app_state::<AppState>();

    let result = remove_favorite(State(state.clone()), Path((finn.id, 1))).await;
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    let result = remove_favorite(State(state), Path((1, 1))).await;
    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

    Ok(())
}
