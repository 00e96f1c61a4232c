use std::future::Future;

use crate::api::{Api, RoomFilter};
use crate::errors::ApiError;
use crate::models::{
    AuthSession, Category, CreateRoomForm, GameRoom, GameSession, JoinRoomForm, LoginForm,
    RegisterForm, SubmitAnswerForm, User,
};

// ---------------------------------------------------------------------------
// Gateway trait (the store defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait Gateway: Send + Sync {
    /// Replace the live bearer token used for subsequent requests.
    fn set_token(&self, token: Option<String>);

    fn login(
        &self,
        form: LoginForm,
    ) -> impl Future<Output = Result<AuthSession, ApiError>> + Send;

    fn register(
        &self,
        form: RegisterForm,
    ) -> impl Future<Output = Result<AuthSession, ApiError>> + Send;

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn profile(&self) -> impl Future<Output = Result<User, ApiError>> + Send;

    fn categories(&self) -> impl Future<Output = Result<Vec<Category>, ApiError>> + Send;

    fn rooms(
        &self,
        filter: RoomFilter,
    ) -> impl Future<Output = Result<Vec<GameRoom>, ApiError>> + Send;

    fn create_room(
        &self,
        form: CreateRoomForm,
    ) -> impl Future<Output = Result<GameRoom, ApiError>> + Send;

    fn room(&self, id: i64) -> impl Future<Output = Result<GameRoom, ApiError>> + Send;

    fn join_room(
        &self,
        id: i64,
        form: Option<JoinRoomForm>,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn leave_room(&self, id: i64) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn toggle_ready(&self, id: i64) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn start_game(&self, id: i64) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn game_state(
        &self,
        room_id: i64,
    ) -> impl Future<Output = Result<GameSession, ApiError>> + Send;

    fn submit_answer(
        &self,
        room_id: i64,
        form: SubmitAnswerForm,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

impl Gateway for Api {
    fn set_token(&self, token: Option<String>) {
        self.token_cell().set(token);
    }

    async fn login(&self, form: LoginForm) -> Result<AuthSession, ApiError> {
        Api::login(self, &form).await
    }

    async fn register(&self, form: RegisterForm) -> Result<AuthSession, ApiError> {
        Api::register(self, &form).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Api::logout(self).await
    }

    async fn profile(&self) -> Result<User, ApiError> {
        Api::profile(self).await
    }

    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        Api::categories(self).await
    }

    async fn rooms(&self, filter: RoomFilter) -> Result<Vec<GameRoom>, ApiError> {
        Api::rooms(self, &filter).await
    }

    async fn create_room(&self, form: CreateRoomForm) -> Result<GameRoom, ApiError> {
        Api::create_room(self, &form).await
    }

    async fn room(&self, id: i64) -> Result<GameRoom, ApiError> {
        Api::room(self, id).await
    }

    async fn join_room(&self, id: i64, form: Option<JoinRoomForm>) -> Result<(), ApiError> {
        Api::join_room(self, id, form.as_ref()).await
    }

    async fn leave_room(&self, id: i64) -> Result<(), ApiError> {
        Api::leave_room(self, id).await
    }

    async fn toggle_ready(&self, id: i64) -> Result<(), ApiError> {
        Api::toggle_ready(self, id).await
    }

    async fn start_game(&self, id: i64) -> Result<(), ApiError> {
        Api::start_game(self, id).await
    }

    async fn game_state(&self, room_id: i64) -> Result<GameSession, ApiError> {
        Api::game_state(self, room_id).await
    }

    async fn submit_answer(&self, room_id: i64, form: SubmitAnswerForm) -> Result<(), ApiError> {
        Api::submit_answer(self, room_id, &form).await
    }
}
