//! End-to-end flow through the composed router with in-memory storage

use std::sync::Arc;

use api::build_router;
use auth::{AuthConfig, InMemoryAuthRepository};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use todos::InMemoryTodoRepository;
use tower::ServiceExt;

struct Client {
    app: Router,
    cookie: Option<String>,
}

impl Client {
    fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    /// Sends a request, keeping the session cookie like a browser would
    async fn send(&mut self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let set_cookie = set_cookie.to_str().unwrap();
            let pair = set_cookie.split(';').next().unwrap().to_string();
            self.cookie = if set_cookie.contains("Max-Age=0") {
                None
            } else {
                Some(pair)
            };
        }

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }
}

fn app() -> Router {
    build_router(
        Arc::new(InMemoryAuthRepository::new()),
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(AuthConfig::development()),
    )
}

async fn register_and_login(client: &mut Client, username: &str, email: &str) {
    let (status, _) = client
        .send(
            "POST",
            "/api/register",
            Some(json!({
                "username": username,
                "email": email,
                "password": "pw1",
                "app_name": "demo"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = client
        .send(
            "POST",
            "/api/login",
            Some(json!({"username": username, "password": "pw1", "app_name": "demo"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], "Successfully logged in.");
    assert!(client.cookie.is_some());
}

#[tokio::test]
async fn test_todo_scenario() {
    let mut client = Client::new(app());

    let (status, body) = client
        .send("POST", "/api/makeapp", Some(json!({"app_name": "demo"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["app_name"], "demo");

    register_and_login(&mut client, "alice", "alice@x.com").await;

    let (status, _) = client
        .send("POST", "/api/todos", Some(json!({"todo": "buy milk"})))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = client
        .send("POST", "/api/todos", Some(json!({"todo": "buy milk"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Such todo of yours already exists.");

    let (status, body) = client.send("GET", "/api/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    let todos = body["todos"].as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["todo"], "buy milk");
    assert_eq!(todos[0]["completed"], false);
    let id = todos[0]["id"].as_i64().unwrap();
    let item = format!("/api/todos/{id}");

    let (status, _) = client
        .send("PUT", &item, Some(json!({"completed": true})))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = client.send("GET", &item, None).await;
    assert_eq!(body["completed"], true);

    let (status, _) = client.send("DELETE", &item, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = client.send("GET", &item, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status_code"], 404);
}

#[tokio::test]
async fn test_users_are_isolated() {
    let app = app();
    let mut alice = Client::new(app.clone());
    let mut bob = Client::new(app);

    alice
        .send("POST", "/api/makeapp", Some(json!({"app_name": "demo"})))
        .await;
    register_and_login(&mut alice, "alice", "alice@x.com").await;
    register_and_login(&mut bob, "bob", "bob@x.com").await;

    alice
        .send("POST", "/api/todos", Some(json!({"todo": "secret plan"})))
        .await;
    let (_, body) = alice.send("GET", "/api/todos", None).await;
    let id = body["todos"][0]["id"].as_i64().unwrap();

    // Same text is fine for another user
    let (status, _) = bob
        .send("POST", "/api/todos", Some(json!({"todo": "secret plan"})))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = bob.send("GET", &format!("/api/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, body) = bob.send("GET", "/api/todos", None).await;
    let bob_todos = body["todos"].as_array().unwrap();
    assert_eq!(bob_todos.len(), 1);
    assert_ne!(bob_todos[0]["id"].as_i64().unwrap(), id);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let mut client = Client::new(app());
    client
        .send("POST", "/api/makeapp", Some(json!({"app_name": "demo"})))
        .await;
    register_and_login(&mut client, "alice", "alice@x.com").await;

    let (status, body) = client.send("GET", "/api/login", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], "You are logged in.");

    let stale_cookie = client.cookie.clone();

    let (status, _) = client.send("GET", "/api/logout", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(client.cookie.is_none());

    let (status, _) = client.send("GET", "/api/todos", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // The server-side row is gone, so replaying the old cookie is anonymous too
    client.cookie = stale_cookie;
    let (status, body) = client.send("GET", "/api/login", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "You are not logged in.");
}
