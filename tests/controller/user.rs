//! Tests for the user endpoints.

use holocron::{
    model::user::CreateUserDto,
    server::controller::user::{create_user, delete_user, get_user, get_users},
};

use super::*;

fn request(username: &str, email: &str) -> Json<CreateUserDto> {
    Json(CreateUserDto {
        username: username.to_string(),
        email: email.to_string(),
        password: "nerfherder".to_string(),
    })
}

/// Expect 201 with a body that omits the password
#[tokio::test]
async fn create_user_returns_created_without_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = create_user(
        State(test.to_app_state::<AppState>()),
        request("leia", "leia@alderaan.gov"),
    )
    .await;

    assert!(result.is_ok());
    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "leia");
    assert!(body.get("password").is_none());

    Ok(())
}

/// Expect 409 when the username is already registered
#[tokio::test]
async fn create_user_conflicts_on_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("leia")
        .build()
        .await?;

    let result = create_user(
        State(test.to_app_state::<AppState>()),
        request("leia", "organa@alderaan.gov"),
    )
    .await;

    assert!(result.is_err());
    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Record conflicts with existing data");

    Ok(())
}

/// Expect 400 for an invalid email
#[tokio::test]
async fn create_user_rejects_invalid_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = create_user(
        State(test.to_app_state::<AppState>()),
        request("leia", "leia"),
    )
    .await;

    let (status, _) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn get_users_lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("leia")
        .with_mock_user("lando")
        .build()
        .await?;

    let result = get_users(State(test.to_app_state::<AppState>())).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[1]["email"], "lando@holocron.test");

    Ok(())
}

/// Expect 204 on delete, then 404 on lookup and on a second delete
#[tokio::test]
async fn delete_user_removes_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("leia")
        .build()
        .await?;
    let state = test.to_app_state::<AppState>();

    let result = delete_user(State(state.clone()), Path(1)).await;
    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let result = get_user(State(state.clone()), Path(1)).await;
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    let result = delete_user(State(state), Path(1)).await;
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
