// State container - slices mutated only by their own action handlers

pub mod gateway;

mod auth;
mod game;
mod ui;

pub use auth::AuthState;
pub use game::GameState;
pub use ui::{Modal, Route, UiState};

use crate::api::Api;
use crate::errors::ApiError;
use crate::storage::{CredentialStore, FsCredentials};
use gateway::Gateway;

/// Client-side application state: auth, game and ui slices over a
/// gateway and a credential store.
///
/// Every asynchronous action runs the same three phases: set the
/// slice's loading flag and clear its error, await the gateway, then
/// store either the payload or an error string. Last response wins.
pub struct Store<G: Gateway = Api, S: CredentialStore = FsCredentials> {
    gateway: G,
    credentials: S,
    pub auth: AuthState,
    pub game: GameState,
    pub ui: UiState,
}

impl<G: Gateway, S: CredentialStore> Store<G, S> {
    pub fn new(gateway: G, credentials: S) -> Self {
        Self {
            gateway,
            credentials,
            auth: AuthState::default(),
            game: GameState::default(),
            ui: UiState::default(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Startup: load persisted credentials and push the token into the
    /// gateway.
    pub fn restore(&mut self) {
        match self.credentials.load() {
            Ok(Some(session)) => {
                tracing::debug!("restored credentials for {}", session.user.email);
                self.gateway.set_token(Some(session.token.clone()));
                self.auth.token = Some(session.token);
                self.auth.user = Some(session.user);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("could not read credential cache: {e}"),
        }
    }

    /// Settle a failed action: apply the unauthorized policy, then
    /// return the banner text for the owning slice.
    ///
    /// An unauthorized outcome clears the persisted credentials and
    /// navigates to the login route - unless the client is already on
    /// the login or register route, where the failure is just a bad
    /// credential attempt.
    fn absorb(&mut self, err: ApiError, fallback: &str) -> String {
        if err.is_unauthorized() && !matches!(self.ui.route, Route::Login | Route::Register) {
            tracing::info!("session expired, returning to login");
            self.clear_credentials();
            self.ui.route = Route::Login;
        }
        err.banner(fallback)
    }

    fn clear_credentials(&mut self) {
        if let Err(e) = self.credentials.clear() {
            tracing::warn!("could not clear credential cache: {e}");
        }
        self.gateway.set_token(None);
        self.auth.reset();
    }
}
