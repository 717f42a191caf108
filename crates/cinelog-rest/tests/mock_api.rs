//! Mock API tests for the REST layer.
//!
//! These use wiremock to simulate the catalog API and verify request
//! shapes, response mapping, and the 401 session-teardown side effect
//! without network access.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cinelog_core::error::{AuthError, Error};
use cinelog_core::{
    AccessToken, ApiUrl, AuthStore, CatalogStore, Credentials, EntryDraft, EntryId, Kind,
    QueryState, Session, SessionStore, SortKey, User,
};
use cinelog_rest::{RestAuth, RestCatalog, RestClient};

/// Helper to create an API URL from a mock server.
fn mock_api_url(server: &MockServer) -> ApiUrl {
    ApiUrl::new(&format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

fn fresh_client(server: &MockServer) -> RestClient {
    RestClient::new(mock_api_url(server), SessionStore::new())
}

/// Client with a session already in the store.
fn logged_in_client(server: &MockServer) -> RestClient {
    let session = SessionStore::new();
    session.set(Session {
        user: User {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            token: None,
        },
        token: AccessToken::new("access-token"),
    });
    RestClient::new(mock_api_url(server), session)
}

fn entry_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": title,
        "type": "Movie",
        "director": "Someone",
        "duration": "100 min",
        "year": 2000,
        "user": "u1"
    })
}

fn minimal_draft() -> EntryDraft {
    EntryDraft {
        title: "Alien".to_string(),
        kind: Some(Kind::Movie),
        director: "Ridley Scott".to_string(),
        duration: "117 min".to_string(),
        year: Some(1979),
        ..Default::default()
    }
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_login_stores_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({
            "email": "alice@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u1",
            "name": "Alice",
            "email": "alice@example.com",
            "token": "jwt-abc"
        })))
        .mount(&server)
        .await;

    let client = fresh_client(&server);
    let auth = RestAuth::new(client.clone());

    let user = auth
        .login(Credentials::new("alice@example.com", "secret123"))
        .await
        .unwrap();

    assert_eq!(user.id, "u1");
    let session = client.session().current().unwrap();
    assert_eq!(session.token.as_str(), "jwt-abc");
    assert_eq!(session.user.email, "alice@example.com");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid email or password"
        })))
        .mount(&server)
        .await;

    let client = fresh_client(&server);
    let auth = RestAuth::new(client.clone());

    let result = auth
        .login(Credentials::new("alice@example.com", "wrong"))
        .await;

    assert!(matches!(
        result,
        Err(Error::Auth(AuthError::Unauthorized { .. }))
    ));
    assert!(client.session().current().is_none());
}

#[tokio::test]
async fn test_register_stores_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "name": "Bob",
            "email": "bob@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "u2",
            "name": "Bob",
            "email": "bob@example.com",
            "token": "jwt-bob"
        })))
        .mount(&server)
        .await;

    let client = fresh_client(&server);
    let auth = RestAuth::new(client.clone());

    let user = auth
        .register("Bob", Credentials::new("bob@example.com", "secret123"))
        .await
        .unwrap();

    assert_eq!(user.name, "Bob");
    assert_eq!(client.session().token().unwrap().as_str(), "jwt-bob");
}

#[tokio::test]
async fn test_me_attaches_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u1",
            "name": "Alice",
            "email": "alice@example.com"
        })))
        .mount(&server)
        .await;

    let auth = RestAuth::new(logged_in_client(&server));
    let user = auth.me().await.unwrap();
    assert_eq!(user.id, "u1");
    assert!(user.token.is_none());
}

#[tokio::test]
async fn test_me_without_session_is_rejected_locally() {
    let server = MockServer::start().await;

    let auth = RestAuth::new(fresh_client(&server));
    let result = auth.me().await;

    assert!(matches!(result, Err(Error::Auth(AuthError::NotLoggedIn))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_sends_pagination_and_sort_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .and(query_param("sortBy", "-createdAt"))
        .and(query_param_is_missing("search"))
        .and(query_param_is_missing("type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "movieShows": [],
            "page": 2,
            "pages": 2,
            "total": 11,
            "hasMore": false
        })))
        .mount(&server)
        .await;

    let catalog = RestCatalog::new(logged_in_client(&server));
    let page = catalog.list(&QueryState::default(), 2, 10).await.unwrap();

    assert!(page.entries.is_empty());
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.total, 11);
    assert!(!page.has_more);
}

#[tokio::test]
async fn test_list_includes_search_and_kind_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .and(query_param("search", "matrix"))
        .and(query_param("type", "TV Show"))
        .and(query_param("sortBy", "-year"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "movieShows": [entry_json("abc", "The Matrix")],
            "page": 1,
            "pages": 1,
            "total": 1,
            "hasMore": false
        })))
        .mount(&server)
        .await;

    let catalog = RestCatalog::new(logged_in_client(&server));
    let query = QueryState {
        search: "matrix".to_string(),
        kind: Some(Kind::TvShow),
        sort: SortKey::YearDesc,
    };
    let page = catalog.list(&query, 1, 10).await.unwrap();

    assert_eq!(page.entries.len(), 1);
    assert_eq!(page.entries[0].title, "The Matrix");
}

// ============================================================================
// CRUD
// ============================================================================

#[tokio::test]
async fn test_get_entry_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies/abc123"))
        .and(header("authorization", "Bearer access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_json("abc123", "Alien")))
        .mount(&server)
        .await;

    let catalog = RestCatalog::new(logged_in_client(&server));
    let entry = catalog.get(&EntryId::new("abc123").unwrap()).await.unwrap();

    assert_eq!(entry.id.as_str(), "abc123");
    assert_eq!(entry.kind, Kind::Movie);
}

#[tokio::test]
async fn test_create_entry_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/movies"))
        .and(header("authorization", "Bearer access-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(entry_json("new123", "Alien")))
        .mount(&server)
        .await;

    let catalog = RestCatalog::new(logged_in_client(&server));
    let entry = catalog.create(&minimal_draft()).await.unwrap();

    assert_eq!(entry.id.as_str(), "new123");
}

#[tokio::test]
async fn test_create_entry_with_poster_file() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(201).set_body_json(entry_json("new123", "Alien")))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let poster = dir.path().join("alien.jpg");
    std::fs::write(&poster, b"not really a jpeg").unwrap();

    let mut draft = minimal_draft();
    draft.poster = Some(poster);

    let catalog = RestCatalog::new(logged_in_client(&server));
    let entry = catalog.create(&draft).await.unwrap();
    assert_eq!(entry.id.as_str(), "new123");
}

#[tokio::test]
async fn test_create_with_missing_poster_file_fails_locally() {
    let server = MockServer::start().await;

    let mut draft = minimal_draft();
    draft.poster = Some("/nonexistent/poster.jpg".into());

    let catalog = RestCatalog::new(logged_in_client(&server));
    let result = catalog.create(&draft).await;

    assert!(matches!(result, Err(Error::InvalidInput(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_entry_put() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/movies/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_json("abc123", "Aliens")))
        .mount(&server)
        .await;

    let catalog = RestCatalog::new(logged_in_client(&server));
    let mut draft = minimal_draft();
    draft.title = "Aliens".to_string();

    let entry = catalog
        .update(&EntryId::new("abc123").unwrap(), &draft)
        .await
        .unwrap();
    assert_eq!(entry.title, "Aliens");
}

#[tokio::test]
async fn test_delete_entry() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/movies/abc123"))
        .and(header("authorization", "Bearer access-token"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let catalog = RestCatalog::new(logged_in_client(&server));
    let result = catalog.delete(&EntryId::new("abc123").unwrap()).await;
    assert!(result.is_ok());
}

// ============================================================================
// Error handling
// ============================================================================

#[tokio::test]
async fn test_unauthorized_clears_session_store() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Not authorized, token failed"
        })))
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let catalog = RestCatalog::new(client.clone());

    let result = catalog.list(&QueryState::default(), 1, 10).await;

    assert!(matches!(
        result,
        Err(Error::Auth(AuthError::Unauthorized { .. }))
    ));
    // Process-wide teardown: the store is cleared for every component.
    assert!(client.session().current().is_none());
}

#[tokio::test]
async fn test_server_error_carries_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "database unavailable"
        })))
        .mount(&server)
        .await;

    let catalog = RestCatalog::new(logged_in_client(&server));
    let err = catalog
        .list(&QueryState::default(), 1, 10)
        .await
        .unwrap_err();

    let text = err.to_string();
    assert!(text.contains("500"));
    assert!(text.contains("database unavailable"));
}

#[tokio::test]
async fn test_non_json_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_string("Service Unavailable")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let catalog = RestCatalog::new(logged_in_client(&server));
    let err = catalog
        .list(&QueryState::default(), 1, 10)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("503"));
}
