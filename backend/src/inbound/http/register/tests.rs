//! Handler tests for `POST /register`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{Method, StatusCode};
use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::Trace;
use crate::domain::ports::UserRegistry;
use crate::domain::{InMemoryUserRegistry, RegistrationError, TRACE_ID_HEADER};

/// Registry double that accepts everything and counts calls.
#[derive(Default)]
struct CountingRegistry {
    registrations: AtomicUsize,
}

#[async_trait]
impl UserRegistry for CountingRegistry {
    async fn authenticate(&self, _candidate: &User) -> Result<(), RegistrationError> {
        Ok(())
    }

    async fn register(&self, _candidate: User) -> Result<(), RegistrationError> {
        self.registrations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn test_app(
    registry: Arc<dyn UserRegistry>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(registry)))
        .wrap(Trace)
        .configure(configure)
}

async fn send(
    registry: Arc<dyn UserRegistry>,
    request: actix_test::TestRequest,
) -> (StatusCode, String) {
    let app = actix_test::init_service(test_app(registry)).await;
    let response = actix_test::call_service(&app, request.uri(REGISTER_PATH).to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let text = String::from_utf8(body.to_vec()).expect("utf8 body");
    (status, text)
}

fn seeded() -> Arc<dyn UserRegistry> {
    Arc::new(InMemoryUserRegistry::new())
}

fn post_json(payload: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post().set_json(payload)
}

fn post_raw(payload: &'static str) -> actix_test::TestRequest {
    actix_test::TestRequest::post().set_payload(payload)
}

#[rstest]
#[case(
    json!({"nickname": "validuser", "email": "user@example.com", "password": "F9DXIK6hvuFINjmC"}),
    StatusCode::CREATED,
    "User registered successfully\n"
)]
#[case(
    json!({"nickname": "shortuser", "email": "user@example.com", "password": "F9DXIK"}),
    StatusCode::BAD_REQUEST,
    "password must be at least 8 characters long\n"
)]
#[case(
    json!({"nickname": "invaliduser", "email": "user@example", "password": "F9DXIK6hvuFINjmC"}),
    StatusCode::BAD_REQUEST,
    "invalid email format\n"
)]
#[case(
    json!({"nickname": "no", "email": "user@example.com", "password": "F9DXIK6hvuFINjmC"}),
    StatusCode::BAD_REQUEST,
    "nickname must be 3-16 characters and can include letters, numbers, underscores, or hyphens\n"
)]
#[case(
    json!({"nickname": "user", "email": "user@example.com", "password": "F9DXIK6hvuFINjmC"}),
    StatusCode::BAD_REQUEST,
    "nickname already exists\n"
)]
#[case(
    json!({"nickname": "user", "email": "test@example.com", "password": "F9DXIK6hvuFINjmC"}),
    StatusCode::BAD_REQUEST,
    "email already exists\n"
)]
#[actix_web::test]
async fn post_maps_registry_outcome(
    #[case] payload: Value,
    #[case] status: StatusCode,
    #[case] body: &str,
) {
    let (actual_status, actual_body) = send(seeded(), post_json(payload)).await;
    assert_eq!(actual_status, status);
    assert_eq!(actual_body, body);
}

#[rstest]
#[case(Method::GET)]
#[case(Method::PUT)]
#[case(Method::DELETE)]
#[case(Method::PATCH)]
#[actix_web::test]
async fn other_methods_are_rejected(#[case] method: Method) {
    let registry = Arc::new(CountingRegistry::default());
    let request = actix_test::TestRequest::default().method(method).set_json(json!({
        "nickname": "validuser",
        "email": "user@example.com",
        "password": "F9DXIK6hvuFINjmC"
    }));
    let (status, body) = send(registry.clone(), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, "method not allowed\n");
    assert_eq!(registry.registrations.load(Ordering::SeqCst), 0);
}

#[rstest]
#[case("")]
#[case("{not json")]
#[case("[\"validuser\", \"user@example.com\", \"F9DXIK6hvuFINjmC\"]")]
#[case("\"validuser\"")]
#[case("{\"nickname\": 42}")]
#[actix_web::test]
async fn undecodable_bodies_never_reach_the_registry(#[case] payload: &'static str) {
    let registry = Arc::new(CountingRegistry::default());
    let (status, body) = send(registry.clone(), post_raw(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "invalid request body\n");
    assert_eq!(registry.registrations.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn content_type_is_not_required() {
    let (status, body) = send(
        seeded(),
        post_raw(r#"{"nickname":"validuser","email":"user@example.com","password":"F9DXIK6hvuFINjmC"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, REGISTERED_BODY);
}

#[actix_web::test]
async fn missing_fields_fail_shape_rules() {
    let (status, body) = send(seeded(), post_json(json!({"nickname": "validuser"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "password must be at least 8 characters long\n");
}

#[actix_web::test]
async fn unknown_fields_and_trailing_data_are_ignored() {
    let (status, _) = send(
        seeded(),
        post_raw(
            r#"{"nickname":"validuser","email":"user@example.com","password":"F9DXIK6hvuFINjmC","role":"admin"} trailing"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[actix_web::test]
async fn state_is_shared_across_requests() {
    let registry = seeded();
    let payload = json!({"nickname": "newUser", "email": "newuser@example.com", "password": "F9DXIK6hvuFINjmC"});

    let app = actix_test::init_service(test_app(registry)).await;
    let first = actix_test::call_service(
        &app,
        post_json(payload.clone()).uri(REGISTER_PATH).to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second =
        actix_test::call_service(&app, post_json(payload).uri(REGISTER_PATH).to_request()).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body = actix_test::read_body(second).await;
    assert_eq!(body, "email already exists\n".as_bytes());
}

#[actix_web::test]
async fn responses_are_plain_text_with_trace_id() {
    let app = actix_test::init_service(test_app(seeded())).await;
    let response = actix_test::call_service(
        &app,
        post_json(json!({"nickname": "validuser", "email": "user@example.com", "password": "F9DXIK6hvuFINjmC"}))
            .uri(REGISTER_PATH)
            .to_request(),
    )
    .await;
    assert_eq!(
        response
            .headers()
            .get(actix_web::http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/plain; charset=utf-8")
    );
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
}

#[actix_web::test]
async fn passwords_have_no_upper_length_bound() {
    let password = "p".repeat(300_000);
    let (status, body) = send(
        seeded(),
        post_json(json!({"nickname": "longpw", "email": "long@example.com", "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, REGISTERED_BODY);
}

#[rstest]
#[case("null", "password must be at least 8 characters long\n")]
#[case(
    r#"{"nickname":null,"email":"a@example.com","password":"F9DXIK6hvuFINjmC"}"#,
    "nickname must be 3-16 characters and can include letters, numbers, underscores, or hyphens\n"
)]
#[case(
    r#"{"nickname":"validuser","email":null,"password":"F9DXIK6hvuFINjmC"}"#,
    "invalid email format\n"
)]
#[actix_web::test]
async fn null_values_decode_as_empty(#[case] payload: &'static str, #[case] expected: &str) {
    let (status, body) = send(seeded(), post_raw(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);
}

#[rstest]
#[case(r#"{"Nickname":"validuser","Email":"user@example.com","Password":"F9DXIK6hvuFINjmC"}"#)]
#[case(r#"{"NICKNAME":"validuser","eMaIl":"user@example.com","PASSWORD":"F9DXIK6hvuFINjmC"}"#)]
#[actix_web::test]
async fn field_names_match_regardless_of_case(#[case] payload: &'static str) {
    let (status, body) = send(seeded(), post_raw(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, REGISTERED_BODY);
}

#[rstest]
#[case(
    r#"{"NICKNAME":"x","nickname":"validuser","email":"user@example.com","password":"F9DXIK6hvuFINjmC"}"#,
    "validuser"
)]
#[case(
    r#"{"Nickname":"validuser","email":"user@example.com","password":"F9DXIK6hvuFINjmC"}"#,
    "validuser"
)]
#[case(r#"{"nick":"validuser"}"#, "")]
fn exact_field_name_wins_over_case_insensitive_match(
    #[case] payload: &str,
    #[case] nickname: &str,
) {
    let request = decode_body(payload.as_bytes()).expect("body decodes");
    assert_eq!(User::from(request).nickname(), nickname);
}

#[actix_web::test]
async fn rejections_carry_trace_id() {
    let app = actix_test::init_service(test_app(seeded())).await;
    let response = actix_test::call_service(
        &app,
        post_raw("{not json").uri(REGISTER_PATH).to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
}
