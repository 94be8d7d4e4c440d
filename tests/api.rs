use std::sync::Arc;
use actix_web::{http::{header, StatusCode}, test, App};
use serde_json::{json, Value};
use user_auth_backend::application::build_dispatcher;
use user_auth_backend::core::AppState;
use user_auth_backend::domain::UserResponse;
use user_auth_backend::repositories::{InMemoryUserRepository, UserRepository};
use user_auth_backend::routes::configure_all_routes;
use user_auth_backend::services::auth::AuthService;

const SECRET: &str = "integration-test-secret";

fn setup() -> (AppState, Arc<InMemoryUserRepository>) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let auth_service = Arc::new(AuthService::new(SECRET));
    let dispatcher = build_dispatcher(repo.clone(), auth_service.clone()).unwrap();

    (AppState::new(Arc::new(dispatcher), auth_service), repo)
}

fn bearer(state: &AppState) -> (header::HeaderName, String) {
    let token = state.auth_service.login("abc@gmail.com", "1234").unwrap();
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

#[actix_web::test]
async fn login_with_operator_credentials_returns_token() {
    let (state, _) = setup();
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &state))).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "abc@gmail.com", "password": "1234" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["access_token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert!(state.auth_service.validate(token).is_ok());
}

#[actix_web::test]
async fn login_with_wrong_credentials_is_unauthorized() {
    let (state, _) = setup();
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &state))).await;

    for (email, password) in [("abc@gmail.com", ""), ("", ""), ("abc@gmail.com", "12345"), ("x@gmail.com", "1234")] {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "email": email, "password": password }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Unauthorized" }));
    }
}

#[actix_web::test]
async fn users_require_bearer_token() {
    let (state, _) = setup();
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &state))).await;

    let req = test::TestRequest::get().uri("/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((header::AUTHORIZATION, "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "name": "John Doe", "email": "john@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn list_users_on_empty_store() {
    let (state, repo) = setup();
    repo.delete_all().await.unwrap();
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &state))).await;

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(bearer(&state))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn create_then_get_user() {
    let (state, _) = setup();
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &state))).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(bearer(&state))
        .set_json(json!({ "name": "John Doe", "email": "john@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: UserResponse = test::read_body_json(resp).await;
    assert!(!created.id.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", created.id))
        .insert_header(bearer(&state))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: UserResponse = test::read_body_json(resp).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(bearer(&state))
        .to_request();
    let listed: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, vec![created]);
}

#[actix_web::test]
async fn update_replaces_fields() {
    let (state, _) = setup();
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &state))).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(bearer(&state))
        .set_json(json!({ "name": "John Doe", "email": "john@example.com" }))
        .to_request();
    let created: UserResponse = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/users/{}", created.id))
        .insert_header(bearer(&state))
        .set_json(json!({ "name": "Jane Doe", "email": "jane@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: UserResponse = test::read_body_json(resp).await;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.email, "jane@example.com");
}

#[actix_web::test]
async fn unknown_id_is_not_found() {
    let (state, _) = setup();
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &state))).await;
    let unknown = "64b7f0c2a1b2c3d4e5f60718";

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", unknown))
        .insert_header(bearer(&state))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let req = test::TestRequest::put()
        .uri(&format!("/users/{}", unknown))
        .insert_header(bearer(&state))
        .set_json(json!({ "name": "John Doe", "email": "john@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/users/not-an-object-id")
        .insert_header(bearer(&state))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_is_idempotent() {
    let (state, _) = setup();
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &state))).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(bearer(&state))
        .set_json(json!({ "name": "John Doe", "email": "john@example.com" }))
        .to_request();
    let created: UserResponse = test::call_and_read_body_json(&app, req).await;

    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri(&format!("/users/{}", created.id))
            .insert_header(bearer(&state))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", created.id))
        .insert_header(bearer(&state))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn invalid_body_is_bad_request() {
    let (state, _) = setup();
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &state))).await;

    for body in [
        json!({ "name": "John Doe", "email": "not-an-email" }),
        json!({ "name": "", "email": "john@example.com" }),
        json!({ "name": "John Doe" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header(bearer(&state))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}

#[actix_web::test]
async fn duplicate_email_is_conflict() {
    let (state, _) = setup();
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &state))).await;

    let create = |name: &str| {
        test::TestRequest::post()
            .uri("/users")
            .insert_header(bearer(&state))
            .set_json(json!({ "name": name, "email": "john@example.com" }))
            .to_request()
    };

    let resp = test::call_service(&app, create("John Doe")).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(&app, create("Johnny")).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn health_check_is_public() {
    let (state, _) = setup();
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &state))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}
