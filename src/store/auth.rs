use crate::models::{AuthSession, LoginForm, RegisterForm, User};
use crate::storage::CredentialStore;

use super::gateway::Gateway;
use super::Store;

/// Authentication slice: the signed-in account and its token.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn reset(&mut self) {
        self.user = None;
        self.token = None;
    }
}

impl<G: Gateway, S: CredentialStore> Store<G, S> {
    /// Exchange credentials for a session; on success the token and
    /// user record are persisted. Returns whether login succeeded.
    pub async fn login(&mut self, email: impl Into<String>, password: impl Into<String>) -> bool {
        self.auth.loading = true;
        self.auth.error = None;

        let form = LoginForm {
            email: email.into(),
            password: password.into(),
        };
        let result = self.gateway.login(form).await;
        self.auth.loading = false;

        match result {
            Ok(session) => {
                self.adopt(session);
                true
            }
            Err(e) => {
                let banner = self.absorb(e, "Failed to log in");
                self.auth.error = Some(banner);
                false
            }
        }
    }

    /// Create an account; the backend signs the new account in
    /// directly, so this persists like a login.
    pub async fn register(&mut self, form: RegisterForm) -> bool {
        self.auth.loading = true;
        self.auth.error = None;

        let result = self.gateway.register(form).await;
        self.auth.loading = false;

        match result {
            Ok(session) => {
                self.adopt(session);
                true
            }
            Err(e) => {
                let banner = self.absorb(e, "Failed to register");
                self.auth.error = Some(banner);
                false
            }
        }
    }

    /// Tell the backend, then clear local state either way; an
    /// already-dead token is not an error worth surfacing.
    pub async fn logout(&mut self) {
        self.auth.loading = true;
        self.auth.error = None;

        let result = self.gateway.logout().await;
        self.auth.loading = false;

        match result {
            Ok(()) => {}
            Err(e) if e.is_unauthorized() => {}
            Err(e) => {
                self.auth.error = Some(e.banner("Failed to log out"));
            }
        }

        self.clear_credentials();
    }

    pub async fn fetch_profile(&mut self) {
        self.auth.loading = true;
        self.auth.error = None;

        let result = self.gateway.profile().await;
        self.auth.loading = false;

        match result {
            Ok(user) => {
                self.auth.user = Some(user);
            }
            Err(e) => {
                let banner = self.absorb(e, "Failed to fetch profile");
                self.auth.error = Some(banner);
            }
        }
    }

    fn adopt(&mut self, session: AuthSession) {
        if let Err(e) = self.credentials.save(&session) {
            tracing::warn!("could not cache credentials: {e}");
        }
        self.gateway.set_token(Some(session.token.clone()));
        self.auth.token = Some(session.token);
        self.auth.user = Some(session.user);
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::super::gateway::MockGateway;
    use super::super::tests::{sample_session, store};
    use super::super::Route;
    use crate::errors::ApiError;
    use crate::storage::MockCredentialStore;

    #[tokio::test]
    async fn login_success_stores_session_and_token() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_login()
            .withf(|form| form.email == "kana@example.com")
            .returning(|_| Box::pin(async { Ok(sample_session(7)) }));
        gateway
            .expect_set_token()
            .withf(|t| t.as_deref() == Some("token-7"))
            .times(1)
            .returning(|_| ());

        let mut store = store(gateway);
        store.navigate(Route::Login);

        assert!(store.login("kana@example.com", "secret").await);
        assert!(!store.auth.loading);
        assert!(store.auth.error.is_none());
        assert_eq!(store.auth.user.as_ref().unwrap().id, 7);
        assert_eq!(store.auth.token.as_deref(), Some("token-7"));
    }

    #[tokio::test]
    async fn login_failure_stores_backend_message() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_| {
            Box::pin(async {
                Err(ApiError::Status {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    message: Some("These credentials do not match our records".to_string()),
                })
            })
        });

        let mut store = store(gateway);
        store.navigate(Route::Login);

        assert!(!store.login("kana@example.com", "wrong").await);
        assert!(!store.auth.loading);
        assert_eq!(
            store.auth.error.as_deref(),
            Some("These credentials do not match our records")
        );
        assert!(store.auth.user.is_none());
    }

    #[tokio::test]
    async fn login_rejection_on_login_route_does_not_redirect() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_login()
            .returning(|_| Box::pin(async { Err(ApiError::Unauthorized) }));

        let mut store = store(gateway);
        store.navigate(Route::Login);

        assert!(!store.login("kana@example.com", "wrong").await);
        // Still on the login route; no forced credential clearance.
        assert_eq!(store.ui.route, Route::Login);
        assert_eq!(store.auth.error.as_deref(), Some("Failed to log in"));
    }

    #[tokio::test]
    async fn expired_session_clears_credentials_and_redirects() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_profile()
            .returning(|| Box::pin(async { Err(ApiError::Unauthorized) }));
        gateway
            .expect_set_token()
            .withf(|t| t.is_none())
            .times(1)
            .returning(|_| ());

        let mut credentials = MockCredentialStore::new();
        credentials.expect_clear().times(1).returning(|| Ok(()));

        let mut store = super::super::Store::new(gateway, credentials);
        store.auth.token = Some("stale".to_string());
        store.navigate(Route::Profile);

        store.fetch_profile().await;

        assert!(!store.auth.loading);
        assert_eq!(store.ui.route, Route::Login);
        assert!(store.auth.token.is_none());
        assert!(store.auth.user.is_none());
        assert_eq!(store.auth.error.as_deref(), Some("Failed to fetch profile"));
    }

    #[tokio::test]
    async fn logout_clears_state_even_when_backend_rejects_token() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_logout()
            .returning(|| Box::pin(async { Err(ApiError::Unauthorized) }));
        gateway
            .expect_set_token()
            .withf(|t| t.is_none())
            .times(1)
            .returning(|_| ());

        let mut store = store(gateway);
        store.auth.token = Some("token-7".to_string());
        store.auth.user = Some(super::super::tests::sample_user(7));

        store.logout().await;

        assert!(!store.auth.loading);
        assert!(store.auth.error.is_none());
        assert!(!store.auth.is_authenticated());
        assert!(store.auth.user.is_none());
    }

    #[tokio::test]
    async fn fetch_profile_refreshes_user() {
        let mut gateway = MockGateway::new();
        gateway.expect_profile().returning(|| {
            Box::pin(async {
                let mut user = super::super::tests::sample_user(7);
                user.score = 420;
                Ok(user)
            })
        });

        let mut store = store(gateway);
        store.fetch_profile().await;

        assert!(!store.auth.loading);
        assert_eq!(store.auth.user.as_ref().unwrap().score, 420);
    }
}
