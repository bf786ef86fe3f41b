use std::time::Duration;

use admin_backend::{
    auth::AuthRequirement,
    config::Config,
    create_router,
    error::{INVALID_BODY, MISSING_FIELDS, MISSING_TOKEN, UPSTREAM_INVALID, UPSTREAM_UNREACHABLE},
    mock::NOTIFICATION_SENT,
    proxy::{forward, ProxyRoute},
    AppState,
};
use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    Router,
};
use axum_extra::extract::CookieJar;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{any, body_json, body_string, header as header_is, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn state(backend_url: &str) -> AppState {
    let config = Config::from_lookup(|key| match key {
        "BACKEND_URL" => Some(backend_url.to_string()),
        "UPSTREAM_TIMEOUT_SECS" => Some("5".into()),
        _ => None,
    })
    .unwrap();
    AppState::new(config).unwrap()
}

fn app(backend_url: &str) -> Router {
    create_router(state(backend_url))
}

async fn post_raw(app: Router, uri: &str, cookie: Option<&str>, body: &str) -> (StatusCode, HeaderMap, Bytes) {
    let mut request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    let response = app
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, bytes)
}

async fn post(app: Router, uri: &str, cookie: Option<&str>, body: &str) -> (StatusCode, Value) {
    let (status, _, bytes) = post_raw(app, uri, cookie, body).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn register_body() -> Value {
    json!({
        "name": "Ana",
        "email": "ana@example.com",
        "password": "secreto",
        "role": "editor"
    })
}

// -----------------------------------------------------------------------------
// Register / profile proxy
// -----------------------------------------------------------------------------

#[tokio::test]
async fn register_without_cookie_is_rejected_without_calling_backend() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post(
        app(&server.uri()),
        "/api/register",
        None,
        &register_body().to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": MISSING_TOKEN }));
    server.verify().await;
}

#[tokio::test]
async fn empty_cookie_counts_as_missing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, _) = post(
        app(&server.uri()),
        "/api/register",
        Some("access_token="),
        &register_body().to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    server.verify().await;
}

#[tokio::test]
async fn register_forwards_body_and_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/register"))
        .and(header_is("authorization", "Bearer tok-123"))
        .and(header_is("content-type", "application/json"))
        .and(body_json(register_body()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 7, "message": "Usuario creado" })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post(
        app(&server.uri()),
        "/api/register",
        Some("theme=dark; access_token=tok-123"),
        &register_body().to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 7, "message": "Usuario creado" }));
    server.verify().await;
}

#[tokio::test]
async fn backend_error_is_relayed_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": MISSING_FIELDS })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post(
        app(&server.uri()),
        "/api/register",
        Some("access_token=tok"),
        r#"{"name":"Ana"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Faltan campos obligatorios" }));
}

#[tokio::test]
async fn profile_goes_to_its_own_backend_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/profile"))
        .and(header_is("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Perfil actualizado" })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post(
        app(&server.uri()),
        "/api/profile",
        Some("access_token=tok"),
        r#"{"name":"Ana","email":"ana@example.com"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Perfil actualizado");
    server.verify().await;
}

#[tokio::test]
async fn json_passes_through_byte_for_byte() {
    let sent = r#"{"b":1,"a":98765432109876543210987}"#;
    let returned = r#"{"zeta":1,"alpha":12345678901234567890123}"#;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/profile"))
        .and(body_string(sent))
        .respond_with(ResponseTemplate::new(200).set_body_raw(returned, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, headers, bytes) =
        post_raw(app(&server.uri()), "/api/profile", Some("access_token=tok"), sent).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(&bytes[..], returned.as_bytes());
    server.verify().await;
}

#[tokio::test]
async fn invalid_json_is_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post(
        app(&server.uri()),
        "/api/register",
        Some("access_token=tok"),
        "{not json",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": INVALID_BODY }));
    server.verify().await;
}

#[tokio::test]
async fn unreachable_backend_becomes_structured_error() {
    // Nothing listens on port 1.
    let (status, body) = post(
        app("http://127.0.0.1:1"),
        "/api/register",
        Some("access_token=tok"),
        &register_body().to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], UPSTREAM_UNREACHABLE);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn non_json_backend_reply_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let (status, body) = post(
        app(&server.uri()),
        "/api/profile",
        Some("access_token=tok"),
        "{}",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "message": UPSTREAM_INVALID }));
}

#[tokio::test]
async fn empty_backend_reply_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let (status, body) = post(
        app(&server.uri()),
        "/api/profile",
        Some("access_token=tok"),
        "{}",
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn anonymous_route_never_sends_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/public/ping"))
        .and(|request: &wiremock::Request| !request.headers.contains_key("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let route = ProxyRoute {
        name: "ping",
        upstream_path: "/api/public/ping",
        auth: AuthRequirement::Anonymous,
    };
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("access_token=tok"));
    let jar = CookieJar::from_headers(&headers);

    let response = forward(&state(&server.uri()), &route, &jar, Bytes::from_static(b"{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    server.verify().await;
}

// -----------------------------------------------------------------------------
// Mock notification endpoint
// -----------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn mock_rejects_missing_fields() {
    for body in [
        json!({ "description": "b", "topic": "c" }),
        json!({ "title": "a", "topic": "c" }),
        json!({ "title": "a", "description": "b" }),
        json!({ "title": "a", "description": "b", "topic": "" }),
    ] {
        let (status, reply) = post(
            app("http://127.0.0.1:1"),
            "/api/notifications/send",
            None,
            &body.to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply, json!({ "message": "Faltan campos obligatorios" }));
    }
}

#[tokio::test(start_paused = true)]
async fn mock_accepts_after_delay() {
    let start = tokio::time::Instant::now();

    let (status, reply) = post(
        app("http://127.0.0.1:1"),
        "/api/notifications/send",
        None,
        r#"{"title":"Mantenimiento","description":"Esta noche","topic":"sistema"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, json!({ "message": NOTIFICATION_SENT }));
    assert_eq!(reply["message"], "Notificación enviada correctamente (mock)");
    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test]
async fn mock_rejects_invalid_json() {
    let (status, reply) = post(
        app("http://127.0.0.1:1"),
        "/api/notifications/send",
        None,
        "title=a",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply, json!({ "message": INVALID_BODY }));
}

// -----------------------------------------------------------------------------
// Health
// -----------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_ok() {
    let response = app("http://127.0.0.1:1")
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"OK");
}
