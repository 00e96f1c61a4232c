use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

pub const TOKEN: &str = "token-7";

type AuthLog = Arc<Mutex<Vec<Option<String>>>>;

/// A stub backend on an ephemeral port. Records the Authorization
/// header of every request and serves canned JSON in both the wrapped
/// and bare envelope shapes the real backend uses.
pub struct TestBackend {
    pub base_url: String,
    auth_log: AuthLog,
}

impl TestBackend {
    /// The Authorization header of the most recent request, if any.
    pub fn last_auth(&self) -> Option<String> {
        self.auth_log
            .lock()
            .expect("auth log lock")
            .last()
            .cloned()
            .flatten()
    }
}

pub async fn spawn_backend() -> TestBackend {
    let auth_log: AuthLog = Arc::default();

    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/profile", get(profile))
        .route("/categories", get(categories))
        .route("/game-rooms", get(rooms))
        .route("/game-rooms/:id", get(room))
        .route("/game-rooms/:id/join", post(join))
        .layer(middleware::from_fn_with_state(auth_log.clone(), record_auth));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub backend");
    });

    TestBackend {
        base_url: format!("http://{addr}"),
        auth_log,
    }
}

/// Per-test scratch directory for the credential cache.
pub fn test_data_dir() -> PathBuf {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("elg_client_it_{}_{}", std::process::id(), id));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

async fn record_auth(State(log): State<AuthLog>, req: Request, next: Next) -> Response {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    log.lock().expect("auth log lock").push(auth);
    next.run(req).await
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn member() -> Value {
    json!({
        "id": 7,
        "name": "Kana",
        "email": "kana@example.com",
        "score": 120,
        "level": 3,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

fn room_value(id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("Room {id}"),
        "description": "Practice lobby",
        "category_id": null,
        "owner_id": 7,
        "max_players": 4,
        "current_players": 1,
        "question_count": 10,
        "status": "waiting",
        "is_private": false,
        "password": null,
        "settings": null,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "owner": null,
        "players": [{
            "id": 1,
            "room_id": id,
            "member_id": 7,
            "is_ready": false,
            "joined_at": "2024-01-01T00:00:00Z",
            "left_at": null,
            "member": member()
        }],
        "category": null
    })
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["password"] == "secret" {
        // The nested shape: account under data.member, sibling token.
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": { "member": member(), "token": TOKEN }
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
    }
}

async fn logout(headers: HeaderMap) -> impl IntoResponse {
    if bearer(&headers) == Some(TOKEN) {
        (StatusCode::OK, Json(json!({ "success": true })))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthenticated." })),
        )
    }
}

async fn profile(headers: HeaderMap) -> impl IntoResponse {
    if bearer(&headers) == Some(TOKEN) {
        (StatusCode::OK, Json(member()))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthenticated." })),
        )
    }
}

async fn categories() -> Json<Value> {
    // Wrapped envelope shape.
    Json(json!({
        "success": true,
        "data": [{
            "id": 1,
            "name": "Grammar",
            "description": "Tenses and structures",
            "difficulty_level": 2,
            "is_active": true,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }]
    }))
}

async fn rooms() -> Json<Value> {
    // Bare payload shape, no envelope.
    Json(json!([room_value(1), room_value(2)]))
}

async fn room(Path(id): Path<i64>) -> Json<Value> {
    Json(json!({ "success": true, "data": room_value(id) }))
}

async fn join(Path(id): Path<i64>) -> impl IntoResponse {
    if id == 99 {
        (
            StatusCode::CONFLICT,
            Json(json!({ "message": "Room is full" })),
        )
    } else {
        (StatusCode::OK, Json(json!({ "success": true })))
    }
}
