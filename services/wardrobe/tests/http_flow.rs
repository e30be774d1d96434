//! HTTP flows through the wardrobe router against a mock resource server

use std::sync::Arc;

use auth::UserRepository;
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use common::{
    cache::{KeyValueStore, MemoryStore},
    store::{RestClient, StoreConfig},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use wardrobe::{AppState, CollectionService, create_router, repositories::DressRepository};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(server: &MockServer, store: &MemoryStore) -> Router {
    let client = RestClient::new(&StoreConfig::with_base_url(server.uri())).expect("valid config");
    create_router(AppState {
        users: UserRepository::new(client.clone()),
        session_store: Arc::new(store.clone()),
        collection: CollectionService::new(DressRepository::new(client)),
    })
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    profile: &str,
    body: Option<Value>,
) -> Response {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, format!("profile={}", profile));
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn sign_in_alice(store: &MemoryStore, profile: &str) {
    let identity = json!({
        "id": 1,
        "name": "Alice Smith",
        "email": "a@b.com",
        "createdAt": "2026-10-01T08:00:00.000Z"
    });
    store
        .set(&format!("profile:{}:currentUser", profile), &identity.to_string())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_health_needs_no_session() {
    let server = MockServer::start().await;
    let app = app(&server, &MemoryStore::new());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn test_register_gates_pages_per_profile() {
    let server = MockServer::start().await;
    let account = json!({
        "id": 7,
        "name": "Alice Smith",
        "email": "alice@example.com",
        "password": "secret1",
        "createdAt": "2026-10-19T09:30:00.000Z"
    });
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "alice@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_partial_json(json!({"email": "alice@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(account))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dresses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let app = app(&server, &MemoryStore::new());

    let response = send(&app, Method::GET, "/pages/dashboard", "home", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/pages/login");

    let response = send(
        &app,
        Method::POST,
        "/auth/register",
        "home",
        Some(json!({"name": "Alice Smith", "email": "Alice@Example.com ", "password": "secret1"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["name"], "Alice Smith");

    let response = send(&app, Method::GET, "/pages/index.html", "home", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/pages/dashboard");

    let response = send(&app, Method::GET, "/pages/dashboard", "home", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let view = json_body(response).await;
    assert!(view["greeting"].as_str().unwrap().ends_with(", Alice!"));
    assert_eq!(view["stats"]["totalCount"], 0);
    assert_eq!(view["stats"]["mostCommonCategory"], "None");

    // Another profile has its own session record
    let response = send(&app, Method::GET, "/pages/dashboard", "work", None).await;
    assert_eq!(location(&response), "/pages/login");

    let response = send(&app, Method::POST, "/auth/logout", "home", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = send(&app, Method::GET, "/pages/wardrobe", "home", None).await;
    assert_eq!(location(&response), "/pages/login");
}

#[tokio::test]
async fn test_login_errors_map_to_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "nouser@z.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "a@b.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1, "name": "Alice", "email": "a@b.com", "password": "secret1",
            "createdAt": "2026-10-19T09:30:00.000Z"
        }])))
        .mount(&server)
        .await;

    let app = app(&server, &MemoryStore::new());
    let login = |email: &str, password: &str| json!({"email": email, "password": password});

    let response = send(
        &app,
        Method::POST,
        "/auth/login",
        "p",
        Some(login("nouser@z.com", "whatever")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "User not found");

    let response = send(
        &app,
        Method::POST,
        "/auth/login",
        "p",
        Some(login("a@b.com", "wrong")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, Method::POST, "/auth/login", "p", Some(login("", ""))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        Method::POST,
        "/auth/login",
        "p",
        Some(login("a@b.com", "secret1")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["id"], 1);
}

#[tokio::test]
async fn test_collection_requires_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let app = app(&server, &MemoryStore::new());

    for uri in ["/dresses", "/dresses/1", "/stats"] {
        let response = send(&app, Method::GET, uri, "anon", None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(json_body(response).await["error"], "Please login first");
    }
}

#[tokio::test]
async fn test_dress_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dresses"))
        .and(query_param("userId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "userId": 1, "name": "red saree", "type": "saree", "color": "red",
             "category": "Ethnic", "occasion": "Wedding", "season": "All",
             "createdAt": "2026-10-10T10:00:00.000Z"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/dresses"))
        .and(body_partial_json(json!({"name": "Blue Jeans", "userId": 1})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 4, "userId": 1, "name": "Blue Jeans", "type": "Jeans", "color": "Blue",
            "category": "Casual", "occasion": "Daily", "season": "All",
            "createdAt": "2026-10-19T10:00:00.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dresses/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "userId": 1})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dresses/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9, "userId": 2})))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/dresses/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/dresses/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/dresses/9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = MemoryStore::new();
    sign_in_alice(&store, "default").await;
    let app = app(&server, &store);
    let draft = |name: &str, dress_type: &str, color: &str| {
        json!({
            "name": name, "type": dress_type, "color": color,
            "category": "Casual", "occasion": "Daily", "season": "All"
        })
    };

    let response = send(
        &app,
        Method::POST,
        "/dresses",
        "",
        Some(draft("Red Saree", "Saree", "Red")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        json_body(response).await["error"],
        "This dress already exists in your wardrobe!"
    );

    let response = send(
        &app,
        Method::POST,
        "/dresses",
        "",
        Some(draft("Blue Jeans", "Jeans", "Blue")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["id"], 4);

    let response = send(&app, Method::GET, "/dresses?search=SAREE", "", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let view = json_body(response).await;
    assert_eq!(view["state"], "items");
    assert_eq!(view["cards"][0]["typeIcon"], "fas fa-female");

    let response = send(&app, Method::GET, "/dresses?color=red&type=saree", "", None).await;
    assert_eq!(json_body(response).await["state"], "items");

    let response = send(&app, Method::GET, "/stats", "", None).await;
    let stats = json_body(response).await;
    assert_eq!(stats["totalCount"], 1);
    assert_eq!(stats["mostCommonCategory"], "Ethnic");

    let response = send(&app, Method::GET, "/pages/dress-detail?id=9", "", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&app, Method::DELETE, "/dresses/9", "", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&app, Method::PATCH, "/dresses/3", "", Some(json!({}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        Method::PATCH,
        "/dresses/3",
        "",
        Some(json!({"season": "Winter"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::DELETE, "/dresses/3", "", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_zero_padded_id_addresses_its_own_dress() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dresses/0042"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "0042", "userId": 1})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/dresses/0042"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path("/dresses/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42, "userId": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let store = MemoryStore::new();
    sign_in_alice(&store, "default").await;
    let app = app(&server, &store);

    let response = send(&app, Method::GET, "/dresses/0042", "", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["id"], "0042");

    let response = send(&app, Method::DELETE, "/dresses/0042", "", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_unknown_page() {
    let server = MockServer::start().await;
    let app = app(&server, &MemoryStore::new());

    let response = send(&app, Method::GET, "/pages/settings", "p", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
