use actix_web::http::StatusCode;
use actix_web::middleware::from_fn;
use actix_web::{App, test, web};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use super::configure_routes;
use crate::observability::request_id;
use crate::state::AppState;

macro_rules! test_app {
    () => {{
        let state = AppState::in_memory();
        test::init_service(
            App::new()
                .wrap(from_fn(request_id))
                .app_data(web::Data::new(state.clone()))
                .configure(move |cfg| configure_routes(cfg, &state)),
        )
        .await
    }};
}

/// POST a valid user and return its id.
macro_rules! create_user {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(ana())
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        body["id"].as_i64().unwrap()
    }};
}

fn ana() -> Value {
    json!({
        "fullName": "Ana",
        "birthDate": "1990-01-01",
        "shortDescription": "bio",
        "address": "Rua 1"
    })
}

#[actix_web::test]
async fn test_user_lifecycle() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(ana())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert!(created["created_at"].is_string());

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["full_name"], "Ana");
    assert_eq!(fetched["birth_date"], "1990-01-01");
    assert_eq!(fetched["short_description"], "bio");
    assert_eq!(fetched["address"], "Rua 1");
    assert_eq!(fetched, created);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(resp).await.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": format!("User with id {id} not found.") }));
}

#[actix_web::test]
async fn test_post_missing_fields_are_listed() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "T" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "The following fields are required and cannot be empty: userId, content"
    );
}

#[actix_web::test]
async fn test_list_returns_every_row() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));

    let user_id = create_user!(&app);
    for content in ["Rust", "SQL"] {
        let req = test::TestRequest::post()
            .uri("/api/skills")
            .set_json(json!({ "userId": user_id, "content": content }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let contents: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["Rust", "SQL"]);
}

#[actix_web::test]
async fn test_update_round_trip() {
    let app = test_app!();
    let user_id = create_user!(&app);

    let req = test::TestRequest::post()
        .uri("/api/messages")
        .set_json(json!({ "toUser": user_id, "fromUser": user_id, "content": "note to self" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/messages/{id}"))
        .set_json(json!({ "toUser": user_id, "fromUser": user_id, "content": "edited" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["content"], "edited");
    assert_eq!(updated["created_at"], created["created_at"]);

    let before: DateTime<Utc> = serde_json::from_value(created["updated_at"].clone()).unwrap();
    let after: DateTime<Utc> = serde_json::from_value(updated["updated_at"].clone()).unwrap();
    assert!(after > before);

    let req = test::TestRequest::get()
        .uri(&format!("/api/messages/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, updated);
}

#[actix_web::test]
async fn test_update_errors() {
    let app = test_app!();
    let user_id = create_user!(&app);

    let req = test::TestRequest::patch()
        .uri("/api/posts/99")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post with id 99 not found.");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/users/{user_id}"))
        .set_json(json!({ "fullName": "Ana", "birthDate": "1990-01-01", "address": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "The following fields are required and cannot be empty: shortDescription, address"
    );
}

#[actix_web::test]
async fn test_second_delete_is_not_found() {
    let app = test_app!();
    let user_id = create_user!(&app);

    let uri = format!("/api/users/{user_id}");
    let req = test::TestRequest::delete().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/users/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("Invalid id"));
}

#[actix_web::test]
async fn test_malformed_body_is_bad_request() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
}

#[actix_web::test]
async fn test_academic_training_completed_flag() {
    let app = test_app!();
    let user_id = create_user!(&app);

    let training = json!({
        "userId": user_id,
        "title": "BSc Computer Science",
        "institution": "USP",
        "completed": false,
        "startYear": "2018-03-01",
        "endYear": "2022-12-01"
    });

    let req = test::TestRequest::post()
        .uri("/api/academic_trainings")
        .set_json(&training)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["completed"], false);
    assert_eq!(body["certificate_url"], Value::Null);

    let mut without_flag = training.clone();
    without_flag.as_object_mut().unwrap().remove("completed");
    let req = test::TestRequest::post()
        .uri("/api/academic_trainings")
        .set_json(&without_flag)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "The following fields are required and cannot be empty: completed"
    );
}

#[actix_web::test]
async fn test_unknown_user_reference_is_internal_error() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "userId": 42, "title": "T", "content": "C" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Could not create new post:")
    );
}

#[actix_web::test]
async fn test_deleting_user_removes_their_rows() {
    let app = test_app!();
    let user_id = create_user!(&app);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "userId": user_id, "title": "T", "content": "C" }))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/academic_trainings")
        .set_json(json!({
            "userId": user_id,
            "title": "BSc",
            "institution": "USP",
            "completed": true,
            "startYear": "2010-03-01",
            "endYear": "2014-12-01"
        }))
        .to_request();
    let training: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{user_id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", post["id"]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/academic_trainings/{}", training["id"]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_health_and_request_id() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("X-Request-ID", "abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "abc-123");
}
