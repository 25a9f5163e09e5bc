//! Integration tests for user management and access tokens.
//!
//! The client is created from an existing session pointing at a mock server,
//! so these tests exercise the endpoint calls without the login round trip.

use std::sync::{Arc, Mutex};

use deepmap_sdk::{
    DeepmapClient, DeepmapConfig, DeepmapError, ServerUrl, Session, UserUpdate, ValidationError,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn create_client(mock_server: &MockServer) -> DeepmapClient {
    let server = ServerUrl::new(mock_server.uri()).unwrap();
    let config = DeepmapConfig::builder()
        .server_url(server.clone())
        .build()
        .unwrap();
    let session = Session::new(server, "test-bearer-token".to_string(), 4_102_444_800);
    DeepmapClient::with_session(config, session).unwrap()
}

/// In-memory token store answering the API token list, create and delete calls.
#[derive(Clone, Default)]
struct TokenStore {
    tokens: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<Mutex<u64>>,
}

impl Respond for TokenStore {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut tokens = self.tokens.lock().unwrap();
        match request.method.to_string().as_str() {
            "GET" => ResponseTemplate::new(200).set_body_json(Value::Array(tokens.clone())),
            "POST" => {
                let body: Value = serde_json::from_slice(&request.body).unwrap();
                let mut next_id = self.next_id.lock().unwrap();
                *next_id += 1;
                tokens.push(json!({"id": *next_id, "description": body["description"]}));
                ResponseTemplate::new(201).set_body_json(json!({
                    "id": *next_id,
                    "api_token": format!("secret-{next_id}"),
                    "description": body["description"],
                }))
            }
            "DELETE" => {
                let id = request.url.path().rsplit('/').next().unwrap_or_default();
                tokens.retain(|t| t["id"].to_string() != id);
                ResponseTemplate::new(204)
            }
            _ => ResponseTemplate::new(405),
        }
    }
}

#[tokio::test]
async fn test_list_and_get_users() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "email": "one@x.com", "admin": true},
            {"id": "2", "email": "two@x.com"}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users/v1/users/2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "2", "email": "two@x.com"})),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);

    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, "1");
    assert!(users[0].admin);
    assert!(!users[1].admin);

    let user = client.get_user("2").await.unwrap();
    assert_eq!(user.email, "two@x.com");
}

#[tokio::test]
async fn test_invite_user_sends_admin_false() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/v1/invite"))
        .and(body_json(json!({"email": "fake@x.com", "admin": false})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 9, "email": "fake@x.com", "admin": false})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let user = client.invite_user("fake@x.com", false).await.unwrap();

    assert_eq!(user.id, "9");
}

#[tokio::test]
async fn test_edit_user_sends_only_supplied_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/v1/users/9"))
        .and(body_json(json!({"admin": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let body = client
        .edit_user("9", &UserUpdate::new().admin(true))
        .await
        .unwrap();

    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn test_edit_user_without_fields_never_reaches_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let result = client.edit_user("9", &UserUpdate::new().email("")).await;

    assert!(matches!(
        result,
        Err(DeepmapError::Validation(ValidationError::NothingToUpdate))
    ));
}

#[tokio::test]
async fn test_delete_user_accepts_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/v1/users/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    client.delete_user("9").await.unwrap();
}

#[tokio::test]
async fn test_missing_user_reports_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/v1/users/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such user"))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let error = client.get_user("404").await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    match error {
        DeepmapError::Http(deepmap_sdk::HttpError::Response(e)) => {
            assert_eq!(e.body, json!({"raw_body": "no such user"}));
        }
        other => panic!("Expected a response error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_then_delete_api_token_leaves_count_unchanged() {
    let mock_server = MockServer::start().await;
    let store = TokenStore::default();

    Mock::given(path_regex(r"^/api/auth/v1/token/api(/[^/]+)?$"))
        .respond_with(store.clone())
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);

    let before = client.list_api_tokens().await.unwrap().len();

    let created = client.create_api_token("test description").await.unwrap();
    assert_eq!(created.api_token.as_deref(), Some("secret-1"));
    assert_eq!(client.list_api_tokens().await.unwrap().len(), before + 1);

    client.delete_api_token(&created.id).await.unwrap();
    assert_eq!(client.list_api_tokens().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_null_or_empty_list_body_is_an_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/auth/v1/token/api"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/auth/v1/token/vehicle"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);

    assert!(client.list_users().await.unwrap().is_empty());
    assert!(client.list_api_tokens().await.unwrap().is_empty());
    assert!(client.list_vehicle_tokens().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_vehicle_token_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/v1/token/vehicle"))
        .and(body_json(json!({"vehicle_id": "car-7", "description": "test"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "v1",
            "vehicle_token": "vehicle-secret",
            "vehicle_id": "car-7"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/auth/v1/token/vehicle"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": "v1", "vehicle_id": "car-7"}])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/auth/v1/token/vehicle/v1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);

    let created = client.create_vehicle_token("car-7", "test").await.unwrap();
    assert_eq!(created.vehicle_token.as_deref(), Some("vehicle-secret"));

    let listed = client.list_vehicle_tokens().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].vehicle_token.is_none());

    client.delete_vehicle_token("v1").await.unwrap();
}

#[tokio::test]
async fn test_reset_password_and_new_sessions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/v1/reset_password"))
        .and(body_json(json!({"email": "someone@x.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sent": true})))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/v1/token/vehicle/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "vehicle-jwt"})))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);

    let body = client.reset_password("someone@x.com").await.unwrap();
    assert_eq!(body["sent"], true);

    let token = deepmap_sdk::VehicleToken::new("vehicle-token").unwrap();
    let session = client.create_vehicle_session(&token).await.unwrap();
    assert_eq!(session.token, "vehicle-jwt");
    assert_eq!(client.session().bearer_token(), "test-bearer-token");
}
