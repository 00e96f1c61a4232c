use crate::storage::CredentialStore;

use super::gateway::Gateway;
use super::Store;

/// Client-side navigation target. Rendering and URL handling live
/// outside this crate; the store only records where the client is,
/// which the unauthorized policy consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Login,
    Register,
    Lobby,
    Room(i64),
    Profile,
}

#[derive(Debug, Clone, Default)]
pub struct Modal {
    pub is_open: bool,
    pub kind: String,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub modal: Modal,
    pub route: Route,
}

impl<G: Gateway, S: CredentialStore> Store<G, S> {
    pub fn navigate(&mut self, route: Route) {
        self.ui.route = route;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.ui.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.ui.error = error;
    }

    pub fn set_success(&mut self, success: Option<String>) {
        self.ui.success = success;
    }

    pub fn clear_messages(&mut self) {
        self.ui.error = None;
        self.ui.success = None;
    }

    pub fn open_modal(&mut self, kind: impl Into<String>, data: Option<serde_json::Value>) {
        self.ui.modal.is_open = true;
        self.ui.modal.kind = kind.into();
        self.ui.modal.data = data;
    }

    pub fn close_modal(&mut self) {
        self.ui.modal.is_open = false;
        self.ui.modal.kind.clear();
        self.ui.modal.data = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::gateway::MockGateway;
    use super::super::tests::store;
    use super::*;

    #[test]
    fn modal_opens_and_closes() {
        let mut store = store(MockGateway::new());

        store.open_modal("join-room", Some(serde_json::json!({ "room_id": 3 })));
        assert!(store.ui.modal.is_open);
        assert_eq!(store.ui.modal.kind, "join-room");

        store.close_modal();
        assert!(!store.ui.modal.is_open);
        assert!(store.ui.modal.kind.is_empty());
        assert!(store.ui.modal.data.is_none());
    }

    #[test]
    fn clear_messages_drops_both_banners() {
        let mut store = store(MockGateway::new());
        store.set_error(Some("boom".to_string()));
        store.set_success(Some("saved".to_string()));

        store.clear_messages();
        assert!(store.ui.error.is_none());
        assert!(store.ui.success.is_none());
    }

    #[test]
    fn global_loading_flag_toggles() {
        let mut store = store(MockGateway::new());
        store.set_loading(true);
        assert!(store.ui.loading);
        store.set_loading(false);
        assert!(!store.ui.loading);
    }

    #[test]
    fn navigate_updates_route() {
        let mut store = store(MockGateway::new());
        assert_eq!(store.ui.route, Route::Home);

        store.navigate(Route::Room(12));
        assert_eq!(store.ui.route, Route::Room(12));
    }
}
