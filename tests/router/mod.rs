//! Tests driving the full router, including path matching and JSON extraction.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use holocron::server::{model::app::AppState, router::routes};
use holocron_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::util::into_json;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    into_json(app.clone().oneshot(request).await.unwrap()).await
}

#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let (status, body) = send(&app, Method::GET, "/api/docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/people/{id}"].is_object());
    assert!(body["paths"]["/api/users/{id}/favorites/{favorite_id}"]["delete"].is_object());

    Ok(())
}

#[tokio::test]
async fn unknown_character_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let (status, body) = send(&app, Method::GET, "/api/people/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Character not found"}));

    Ok(())
}

/// Expect a catalog built through the API to be readable through its relationships
#[tokio::test]
async fn builds_catalog_through_api() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let (status, planet) = send(
        &app,
        Method::POST,
        "/api/planets",
        Some(json!({"name": "Tatooine", "description": "Desert world"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, species) = send(
        &app,
        Method::POST,
        "/api/species",
        Some(json!({"type": "Human", "planet_id": planet["id"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, character) = send(
        &app,
        Method::POST,
        "/api/people",
        Some(json!({
            "name": "Luke",
            "description": "Jedi",
            "planet_id": planet["id"],
            "specie_id": species["id"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        character,
        json!({"id": 1, "name": "Luke", "description": "Jedi", "planet_id": 1, "specie_id": 1})
    );

    let (status, vehicle) = send(
        &app,
        Method::POST,
        "/api/vehicles",
        Some(json!({
            "name": "T-16 skyhopper",
            "type": "airspeeder",
            "max_speed": "1200",
            "charac_id": character["id"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(vehicle["type"], "airspeeder");

    let (status, natives) = send(&app, Method::GET, "/api/planets/1/people", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(natives, json!([character]));

    let (status, vehicles) = send(&app, Method::GET, "/api/people/1/vehicles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(vehicles, json!([vehicle]));

    Ok(())
}

#[tokio::test]
async fn long_description_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/planets",
        Some(json!({"name": "Coruscant", "description": "c".repeat(501)})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect favorites to round trip: add, list, remove, list again
#[tokio::test]
async fn favorites_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_character("Luke Skywalker")
        .build()
        .await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let (status, user) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"username": "rey", "email": "rey@jakku.net", "password": "bb8"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user, json!({"id": 1, "username": "rey", "email": "rey@jakku.net"}));

    let (status, duplicate) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"username": "rey", "email": "other@jakku.net", "password": "bb8"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(duplicate["error"].is_string());

    let (status, people_favorite) =
        send(&app, Method::POST, "/api/users/1/favorites/people/1", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, planet_favorite) =
        send(&app, Method::POST, "/api/users/1/favorites/planets/1", None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, favorites) = send(&app, Method::GET, "/api/users/1/favorites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(favorites, json!([people_favorite, planet_favorite]));

    let uri = format!("/api/users/1/favorites/{}", people_favorite["id"]);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, favorites) = send(&app, Method::GET, "/api/users/1/favorites", None).await;
    assert_eq!(favorites, json!([planet_favorite]));

    Ok(())
}

/// Sends `body` verbatim as JSON and checks the response is a JSON error body
async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/json",
        "error responses must be JSON"
    );

    into_json(resp).await
}

/// Expect a body that is not JSON to answer 400 with an error body
#[tokio::test]
async fn malformed_body_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let (status, body) = send_raw(&app, Method::POST, "/api/users", "not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect a body missing a required field to answer 400 naming the field
#[tokio::test]
async fn missing_field_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let (status, body) = send_raw(&app, Method::POST, "/api/users", r#"{"username":"rey"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("email"));

    Ok(())
}

/// Expect non-numeric and out of range ids to answer 400 with an error body
#[tokio::test]
async fn unparsable_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    for (method, uri) in [
        (Method::GET, "/api/users/abc"),
        (Method::GET, "/api/people/99999999999"),
        (Method::POST, "/api/users/1/favorites/planets/x"),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let resp = app.clone().oneshot(request).await.unwrap();
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");

        let (status, body) = into_json(resp).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].is_string(), "{}", uri);
    }

    Ok(())
}
