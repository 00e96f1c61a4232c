mod common;

use common::{spawn_backend, test_data_dir, TOKEN};
use elg_client::models::{AuthSession, User};
use elg_client::{Api, CredentialStore, FsCredentials, Route, Store};

fn stale_session() -> AuthSession {
    AuthSession {
        user: User {
            id: 7,
            name: "Kana".to_string(),
            email: "kana@example.com".to_string(),
            score: 120,
            level: 3,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        },
        token: "expired-token".to_string(),
    }
}

#[tokio::test]
async fn login_persists_credentials_and_authorizes_later_requests() {
    let backend = spawn_backend().await;
    let api = Api::new(&backend.base_url).expect("build api");
    let credentials = FsCredentials::new(test_data_dir());
    let mut store = Store::new(api, credentials.clone());

    store.navigate(Route::Login);
    assert!(store.login("kana@example.com", "secret").await);
    assert!(!store.auth.loading);

    // Credentials landed on disk.
    let cached = credentials.load().expect("read cache").expect("cache written");
    assert_eq!(cached.token, TOKEN);
    assert_eq!(cached.user.email, "kana@example.com");

    // The token now rides along on authenticated calls.
    store.navigate(Route::Profile);
    store.fetch_profile().await;
    assert!(store.auth.error.is_none());
    assert_eq!(backend.last_auth().as_deref(), Some("Bearer token-7"));
}

#[tokio::test]
async fn expired_session_clears_cache_and_redirects_to_login() {
    let backend = spawn_backend().await;
    let api = Api::new(&backend.base_url).expect("build api");
    let credentials = FsCredentials::new(test_data_dir());
    credentials.save(&stale_session()).expect("seed cache");

    let mut store = Store::new(api, credentials.clone());
    store.restore();
    assert!(store.auth.is_authenticated());

    store.navigate(Route::Profile);
    store.fetch_profile().await;

    assert!(!store.auth.loading);
    assert_eq!(store.ui.route, Route::Login);
    assert!(!store.auth.is_authenticated());
    assert!(credentials.load().expect("read cache").is_none());
}

#[tokio::test]
async fn rejected_login_stays_on_login_route() {
    let backend = spawn_backend().await;
    let api = Api::new(&backend.base_url).expect("build api");
    let credentials = FsCredentials::new(test_data_dir());
    let mut store = Store::new(api, credentials);

    store.navigate(Route::Login);
    assert!(!store.login("kana@example.com", "wrong").await);

    assert!(!store.auth.loading);
    assert_eq!(store.ui.route, Route::Login);
    assert_eq!(store.auth.error.as_deref(), Some("Invalid credentials"));
}

#[tokio::test]
async fn join_then_refetch_updates_current_room() {
    let backend = spawn_backend().await;
    let api = Api::new(&backend.base_url).expect("build api");
    let credentials = FsCredentials::new(test_data_dir());
    let mut store = Store::new(api, credentials);

    store.navigate(Route::Login);
    assert!(store.login("kana@example.com", "secret").await);

    store.navigate(Route::Lobby);
    assert!(store.join_game_room(3, None).await);

    let room = store.game.current_room.as_ref().expect("room stored");
    assert_eq!(room.id, 3);
    assert_eq!(room.players().len(), 1);
    assert!(!store.game.game_loading);
}

#[tokio::test]
async fn logout_clears_cache() {
    let backend = spawn_backend().await;
    let api = Api::new(&backend.base_url).expect("build api");
    let credentials = FsCredentials::new(test_data_dir());
    let mut store = Store::new(api, credentials.clone());

    store.navigate(Route::Login);
    assert!(store.login("kana@example.com", "secret").await);
    assert!(credentials.load().expect("read cache").is_some());

    store.logout().await;

    assert!(!store.auth.is_authenticated());
    assert!(credentials.load().expect("read cache").is_none());
}
