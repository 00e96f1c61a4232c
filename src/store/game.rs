use crate::api::RoomFilter;
use crate::models::{
    Category, CreateRoomForm, GameRoom, GameSession, JoinRoomForm, PlayerScore, Question,
    SessionAnswer, SubmitAnswerForm,
};
use crate::names;
use crate::storage::CredentialStore;

use super::gateway::Gateway;
use super::Store;

/// Game slice: room listings, the joined room, the running session and
/// its per-question bookkeeping.
#[derive(Debug, Clone)]
pub struct GameState {
    // Rooms
    pub rooms: Vec<GameRoom>,
    pub current_room: Option<GameRoom>,
    pub rooms_loading: bool,
    pub rooms_error: Option<String>,

    // Categories
    pub categories: Vec<Category>,
    pub categories_loading: bool,
    pub categories_error: Option<String>,

    // Session
    pub session: Option<GameSession>,
    pub current_question: Option<Question>,
    pub question_number: u32,
    pub time_remaining: u32,

    // Scores and results
    pub scores: Vec<PlayerScore>,
    pub answers: Vec<SessionAnswer>,

    pub game_loading: bool,
    pub game_error: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            rooms: Vec::new(),
            current_room: None,
            rooms_loading: false,
            rooms_error: None,
            categories: Vec::new(),
            categories_loading: false,
            categories_error: None,
            session: None,
            current_question: None,
            question_number: names::INITIAL_QUESTION_NUMBER,
            time_remaining: names::DEFAULT_TIME_REMAINING,
            scores: Vec::new(),
            answers: Vec::new(),
            game_loading: false,
            game_error: None,
        }
    }
}

impl<G: Gateway, S: CredentialStore> Store<G, S> {
    pub async fn fetch_categories(&mut self) {
        self.game.categories_loading = true;
        self.game.categories_error = None;

        let result = self.gateway.categories().await;
        self.game.categories_loading = false;

        match result {
            Ok(categories) => self.game.categories = categories,
            Err(e) => {
                let banner = self.absorb(e, "Failed to fetch categories");
                self.game.categories_error = Some(banner);
            }
        }
    }

    pub async fn fetch_game_rooms(&mut self, filter: RoomFilter) {
        self.game.rooms_loading = true;
        self.game.rooms_error = None;

        let result = self.gateway.rooms(filter).await;
        self.game.rooms_loading = false;

        match result {
            Ok(rooms) => self.game.rooms = rooms,
            Err(e) => {
                let banner = self.absorb(e, "Failed to fetch game rooms");
                self.game.rooms_error = Some(banner);
            }
        }
    }

    /// Create a room and make it current. Returns the new room id so
    /// the caller can navigate to it.
    pub async fn create_game_room(&mut self, form: CreateRoomForm) -> Option<i64> {
        self.game.game_loading = true;
        self.game.game_error = None;

        let result = self.gateway.create_room(form).await;
        self.game.game_loading = false;

        match result {
            Ok(room) => {
                let id = room.id;
                self.game.current_room = Some(room);
                Some(id)
            }
            Err(e) => {
                let banner = self.absorb(e, "Failed to create game room");
                self.game.game_error = Some(banner);
                None
            }
        }
    }

    /// Join, then re-fetch the room so the player list is fresh.
    pub async fn join_game_room(&mut self, room_id: i64, form: Option<JoinRoomForm>) -> bool {
        self.game.game_loading = true;
        self.game.game_error = None;

        let result = match self.gateway.join_room(room_id, form).await {
            Ok(()) => self.gateway.room(room_id).await,
            Err(e) => Err(e),
        };
        self.game.game_loading = false;

        match result {
            Ok(room) => {
                self.game.current_room = Some(room);
                true
            }
            Err(e) => {
                let banner = self.absorb(e, "Failed to join game room");
                self.game.game_error = Some(banner);
                false
            }
        }
    }

    /// Leave the room and forget everything tied to it.
    pub async fn leave_game_room(&mut self, room_id: i64) {
        self.game.game_loading = true;
        self.game.game_error = None;

        let result = self.gateway.leave_room(room_id).await;
        self.game.game_loading = false;

        match result {
            Ok(()) => {
                self.game.current_room = None;
                self.reset_game_state();
            }
            Err(e) => {
                let banner = self.absorb(e, "Failed to leave game room");
                self.game.game_error = Some(banner);
            }
        }
    }

    /// Toggle readiness, then re-fetch the room for the new flags.
    pub async fn toggle_ready(&mut self, room_id: i64) {
        self.game.game_loading = true;
        self.game.game_error = None;

        let result = match self.gateway.toggle_ready(room_id).await {
            Ok(()) => self.gateway.room(room_id).await,
            Err(e) => Err(e),
        };
        self.game.game_loading = false;

        match result {
            Ok(room) => self.game.current_room = Some(room),
            Err(e) => {
                let banner = self.absorb(e, "Failed to toggle ready status");
                self.game.game_error = Some(banner);
            }
        }
    }

    /// Start the game, then fetch the opening session state.
    pub async fn start_game(&mut self, room_id: i64) -> bool {
        self.game.game_loading = true;
        self.game.game_error = None;

        let result = match self.gateway.start_game(room_id).await {
            Ok(()) => self.gateway.game_state(room_id).await,
            Err(e) => Err(e),
        };
        self.game.game_loading = false;

        match result {
            Ok(session) => {
                self.game.session = Some(session);
                true
            }
            Err(e) => {
                let banner = self.absorb(e, "Failed to start game");
                self.game.game_error = Some(banner);
                false
            }
        }
    }

    pub async fn submit_answer(&mut self, room_id: i64, form: SubmitAnswerForm) {
        self.game.game_loading = true;
        self.game.game_error = None;

        let result = self.gateway.submit_answer(room_id, form).await;
        self.game.game_loading = false;

        if let Err(e) = result {
            let banner = self.absorb(e, "Failed to submit answer");
            self.game.game_error = Some(banner);
        }
    }

    pub async fn refresh_game_state(&mut self, room_id: i64) {
        self.game.game_loading = true;
        self.game.game_error = None;

        let result = self.gateway.game_state(room_id).await;
        self.game.game_loading = false;

        match result {
            Ok(session) => self.game.session = Some(session),
            Err(e) => {
                let banner = self.absorb(e, "Failed to get game state");
                self.game.game_error = Some(banner);
            }
        }
    }

    // -- sync reducers ------------------------------------------------------

    pub fn clear_game_error(&mut self) {
        self.game.game_error = None;
    }

    pub fn set_current_room(&mut self, room: GameRoom) {
        self.game.current_room = Some(room);
    }

    pub fn clear_current_room(&mut self) {
        self.game.current_room = None;
    }

    pub fn set_current_question(&mut self, question: Question) {
        self.game.current_question = Some(question);
    }

    pub fn set_question_number(&mut self, number: u32) {
        self.game.question_number = number;
    }

    pub fn set_time_remaining(&mut self, seconds: u32) {
        self.game.time_remaining = seconds;
    }

    pub fn update_scores(&mut self, scores: Vec<PlayerScore>) {
        self.game.scores = scores;
    }

    pub fn add_answer(&mut self, answer: SessionAnswer) {
        self.game.answers.push(answer);
    }

    /// Back to the pre-game defaults.
    pub fn reset_game_state(&mut self) {
        self.game.session = None;
        self.game.current_question = None;
        self.game.question_number = names::INITIAL_QUESTION_NUMBER;
        self.game.time_remaining = names::DEFAULT_TIME_REMAINING;
        self.game.scores.clear();
        self.game.answers.clear();
    }
}
