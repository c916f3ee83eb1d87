//! In-process tests for paths that are decided before any query runs.
//! The pool is lazy and never connects.


use actix_web::{
    http::{header, StatusCode},
    middleware::NormalizePath,
    test, web, App,
};
use chrono::Utc;
use dev_team_api::{
    auth::jwt::JwtService,
    entities::user::User,
    middlewares::auth::AuthMiddleware,
    routes::configure_routes,
    AppState,
};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use test_utils::test_config;
use uuid::Uuid;

const UNUSED_DATABASE: &str = "postgres://postgres@127.0.0.1:1/unused";

macro_rules! init_app {
    () => {{
        let config = test_config(UNUSED_DATABASE);
        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .expect("lazy pool");

        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(&config, pool)))
                .wrap(AuthMiddleware)
                .wrap(NormalizePath::trim())
                .configure(configure_routes),
        )
        .await
    }};
}

fn user() -> User {
    User {
        id: Uuid::new_v4(),
        username: "alice".into(),
        email: "a@x.com".into(),
        first_name: "A".into(),
        last_name: "L".into(),
        password_hash: String::new(),
        last_login: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn valid_token() -> String {
    JwtService::new(&test_config(UNUSED_DATABASE)).create_jwt(&user()).unwrap()
}

#[actix_rt::test]
async fn protected_route_without_header_is_unauthorized() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/projects").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Authentication credentials were not provided"}));
}

#[actix_rt::test]
async fn non_bearer_scheme_is_unauthorized() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/teams")
        .insert_header((header::AUTHORIZATION, format!("Token {}", valid_token())))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn garbage_token_is_unauthorized() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/users/me")
        .insert_header((header::AUTHORIZATION, "Bearer not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Invalid token"}));
}

#[actix_rt::test]
async fn expired_token_is_unauthorized() {
    let app = init_app!();

    let mut config = test_config(UNUSED_DATABASE);
    config.jwt_expiration_minutes = -5;
    let expired = JwtService::new(&config).create_jwt(&user()).unwrap();

    let req = test::TestRequest::get()
        .uri("/profiles")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", expired)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Token has expired"}));
}

#[actix_rt::test]
async fn token_from_another_secret_is_unauthorized() {
    let app = init_app!();

    let mut config = test_config(UNUSED_DATABASE);
    config.jwt_secret = "a_completely_different_secret_of_enough_length".into();
    let forged = JwtService::new(&config).create_jwt(&user()).unwrap();

    let req = test::TestRequest::get()
        .uri("/skillsets")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", forged)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn empty_project_title_is_a_validation_error() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/projects/")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", valid_token())))
        .set_json(json!({"title": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["title"].is_array());
}

#[actix_rt::test]
async fn malformed_id_is_not_found() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/projects/42")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", valid_token())))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn login_without_password_fails_validation() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"email": "a@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"non_field_errors": ["Must include a username and password to login"]}));
}

#[actix_rt::test]
async fn malformed_json_is_a_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/login")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn registration_with_invalid_fields_lists_each_field() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/users/")
        .set_json(json!({"username": "bad name!", "email": "nope", "password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["username"].is_array());
    assert_eq!(body["email"], json!(["Enter a valid email address."]));
}

#[actix_rt::test]
async fn home_is_public() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
