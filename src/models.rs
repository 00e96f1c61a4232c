// Records mirroring backend resources. The client holds read-through
// copies only; every field is server-owned.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::names;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub score: i64,
    pub level: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub difficulty_level: i32,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Category {
    pub fn difficulty_label(&self) -> &'static str {
        difficulty_label(self.difficulty_level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "title_case")]
pub enum QuestionKind {
    MultipleChoice,
    FillBlank,
}

impl QuestionKind {
    /// Query-parameter form, matching the wire field values.
    pub fn wire_name(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::FillBlank => "fill_blank",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub category_id: i64,
    pub question_text: String,
    pub question_type: QuestionKind,
    pub correct_answer: String,
    pub options: Option<Vec<String>>,
    pub explanation: String,
    pub difficulty_level: i32,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Question {
    pub fn difficulty_label(&self) -> &'static str {
        difficulty_label(self.difficulty_level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "title_case")]
pub enum RoomStatus {
    Waiting,
    Playing,
    Finished,
}

impl RoomStatus {
    pub fn wire_name(self) -> &'static str {
        match self {
            RoomStatus::Waiting => "waiting",
            RoomStatus::Playing => "playing",
            RoomStatus::Finished => "finished",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRoom {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub owner_id: i64,
    pub max_players: i32,
    pub current_players: i32,
    pub question_count: i32,
    pub status: RoomStatus,
    pub is_private: bool,
    pub password: Option<String>,
    pub settings: Option<serde_json::Value>,
    pub created_at: String,
    pub updated_at: String,
    pub owner: Option<User>,
    pub players: Option<Vec<RoomPlayer>>,
    pub category: Option<Category>,
}

impl GameRoom {
    pub fn players(&self) -> &[RoomPlayer] {
        self.players.as_deref().unwrap_or_default()
    }

    pub fn is_owner(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }

    pub fn player_count(&self) -> usize {
        self.players().len()
    }

    pub fn ready_players(&self) -> usize {
        self.players().iter().filter(|p| p.is_ready).count()
    }

    /// Whether the given member has toggled ready in this room.
    pub fn player_ready(&self, member_id: i64) -> bool {
        self.players()
            .iter()
            .find(|p| p.member_id == member_id)
            .is_some_and(|p| p.is_ready)
    }

    /// The owner may start once at least two players are ready and
    /// nobody is still unready.
    pub fn can_start(&self, user_id: i64) -> bool {
        if !self.is_owner(user_id) {
            return false;
        }
        let ready = self.ready_players();
        ready >= names::MIN_READY_PLAYERS && ready == self.player_count()
    }

    pub fn is_full(&self) -> bool {
        self.current_players >= self.max_players
    }

    /// Occupancy label, e.g. "3/8".
    pub fn occupancy(&self) -> String {
        format!("{}/{}", self.current_players, self.max_players)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomPlayer {
    pub id: i64,
    pub room_id: i64,
    pub member_id: i64,
    pub is_ready: bool,
    pub joined_at: String,
    pub left_at: Option<String>,
    pub member: Option<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "title_case")]
pub enum SessionStatus {
    Active,
    Paused,
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub id: i64,
    pub room_id: i64,
    pub status: SessionStatus,
    pub current_question: i32,
    pub total_questions: i32,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub room: Option<GameRoom>,
}

impl GameSession {
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Progress label, e.g. "Question 3 of 10".
    pub fn progress_label(&self) -> String {
        format!("Question {} of {}", self.current_question, self.total_questions)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionAnswer {
    pub id: i64,
    pub session_id: i64,
    pub member_id: i64,
    pub question_id: i64,
    pub user_answer: String,
    pub is_correct: bool,
    pub time_taken: u32,
    pub score_earned: i64,
    pub answered_at: String,
    pub member: Option<User>,
    pub question: Option<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player_id: i64,
    pub player_name: String,
    pub score: i64,
    pub correct_answers: i32,
    pub total_answers: i32,
}

/// Aggregate single-player statistics, as shown on the profile page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStats {
    pub total_games: i32,
    pub games_won: i32,
    pub average_score: f64,
    pub best_score: i64,
    pub accuracy: f64,
    pub level: i32,
    pub experience: i64,
    pub next_level_exp: i64,
    pub total_score: i64,
}

impl PlayerStats {
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        f64::from(self.games_won) / f64::from(self.total_games) * 100.0
    }

    /// Progress through the current level, in percent.
    pub fn experience_progress(&self) -> f64 {
        if self.next_level_exp == 0 {
            return 0.0;
        }
        (self.experience % self.next_level_exp) as f64 / self.next_level_exp as f64 * 100.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningProgress {
    pub total_answered: i64,
    pub correct_answers: i64,
    pub level: i32,
    pub experience: i64,
    pub next_level_exp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub session: GameSession,
    pub scores: Vec<PlayerScore>,
}

// ---------------------------------------------------------------------------
// Request forms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateRoomForm {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub max_players: i32,
    pub question_count: i32,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JoinRoomForm {
    pub room_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerForm {
    pub question_id: i64,
    pub user_answer: String,
    pub time_taken: u32,
}

/// Authenticated identity: the account record plus its bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

pub fn difficulty_label(level: i32) -> &'static str {
    match level {
        1 => "Beginner",
        2 => "Elementary",
        3 => "Intermediate",
        4 => "Advanced",
        5 => "Expert",
        _ => "Unknown",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
