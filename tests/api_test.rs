mod common;

use common::{spawn_backend, TOKEN};
use elg_client::models::LoginForm;
use elg_client::{Api, ApiError, RoomFilter};

#[tokio::test]
async fn omits_bearer_header_without_token() {
    let backend = spawn_backend().await;
    let api = Api::new(&backend.base_url).expect("build api");

    let categories = api.categories().await.expect("fetch categories");

    assert_eq!(categories.len(), 1);
    assert_eq!(backend.last_auth(), None);
}

#[tokio::test]
async fn attaches_bearer_header_when_token_present() {
    let backend = spawn_backend().await;
    let api = Api::new(&backend.base_url).expect("build api");
    api.token_cell().set(Some(TOKEN.to_string()));

    let user = api.profile().await.expect("fetch profile");

    assert_eq!(user.email, "kana@example.com");
    assert_eq!(backend.last_auth().as_deref(), Some("Bearer token-7"));
}

#[tokio::test]
async fn unwraps_wrapped_envelope() {
    let backend = spawn_backend().await;
    let api = Api::new(&backend.base_url).expect("build api");

    // /categories answers `{"success": true, "data": [...]}`.
    let categories = api.categories().await.expect("fetch categories");
    assert_eq!(categories[0].name, "Grammar");
    assert_eq!(categories[0].difficulty_label(), "Elementary");
}

#[tokio::test]
async fn accepts_bare_payload() {
    let backend = spawn_backend().await;
    let api = Api::new(&backend.base_url).expect("build api");

    // /game-rooms answers a bare array.
    let rooms = api.rooms(&RoomFilter::default()).await.expect("fetch rooms");
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].occupancy(), "1/4");
}

#[tokio::test]
async fn login_unwraps_nested_member_and_token() {
    let backend = spawn_backend().await;
    let api = Api::new(&backend.base_url).expect("build api");

    let session = api
        .login(&LoginForm {
            email: "kana@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .expect("login");

    assert_eq!(session.token, TOKEN);
    assert_eq!(session.user.name, "Kana");
}

#[tokio::test]
async fn maps_401_to_unauthorized() {
    let backend = spawn_backend().await;
    let api = Api::new(&backend.base_url).expect("build api");

    let err = api.profile().await.expect_err("profile without token");
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn carries_backend_message_on_failure() {
    let backend = spawn_backend().await;
    let api = Api::new(&backend.base_url).expect("build api");
    api.token_cell().set(Some(TOKEN.to_string()));

    let err = api.join_room(99, None).await.expect_err("join full room");
    match &err {
        ApiError::Status { status, message } => {
            assert_eq!(status.as_u16(), 409);
            assert_eq!(message.as_deref(), Some("Room is full"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(err.banner("Failed to join game room"), "Room is full");
}
