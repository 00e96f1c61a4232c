pub const DEFAULT_BASE_URL: &str = "https://english-game-backend.test/api";

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const PROFILE_PATH: &str = "/auth/profile";

pub const CATEGORIES_PATH: &str = "/categories";
pub const QUESTIONS_PATH: &str = "/questions";
pub const RANDOM_QUESTION_PATH: &str = "/questions/random";
pub const GAME_ROOMS_PATH: &str = "/game-rooms";
pub const FIND_ROOM_BY_CODE_PATH: &str = "/game-rooms/find-by-code";

pub const SOLO_SUBMIT_ANSWER_PATH: &str = "/game/submit-answer";
pub const SOLO_PROGRESS_PATH: &str = "/game/progress";
pub const SOLO_LEADERBOARD_PATH: &str = "/game/leaderboard";
pub const SOLO_STATS_PATH: &str = "/game/stats";

pub fn category_path(id: i64) -> String {
    format!("/categories/{id}")
}

pub fn category_questions_path(id: i64) -> String {
    format!("/categories/{id}/questions")
}

pub fn question_path(id: i64) -> String {
    format!("/questions/{id}")
}

pub fn room_path(id: i64) -> String {
    format!("/game-rooms/{id}")
}

pub fn room_join_path(id: i64) -> String {
    format!("/game-rooms/{id}/join")
}

pub fn room_leave_path(id: i64) -> String {
    format!("/game-rooms/{id}/leave")
}

pub fn room_toggle_ready_path(id: i64) -> String {
    format!("/game-rooms/{id}/toggle-ready")
}

pub fn room_start_path(id: i64) -> String {
    format!("/game-rooms/{id}/start")
}

pub fn room_end_path(id: i64) -> String {
    format!("/game-rooms/{id}/end")
}

pub fn room_submit_answer_path(id: i64) -> String {
    format!("/game-rooms/{id}/submit-answer")
}

pub fn room_leaderboard_path(id: i64) -> String {
    format!("/game-rooms/{id}/leaderboard")
}

pub fn session_state_path(room_id: i64) -> String {
    format!("/game-sessions/{room_id}/state")
}

pub fn session_next_question_path(room_id: i64) -> String {
    format!("/game-sessions/{room_id}/next-question")
}

pub fn session_pause_path(room_id: i64) -> String {
    format!("/game-sessions/{room_id}/pause")
}

pub fn session_resume_path(room_id: i64) -> String {
    format!("/game-sessions/{room_id}/resume")
}

pub fn session_skip_question_path(room_id: i64) -> String {
    format!("/game-sessions/{room_id}/skip-question")
}

pub fn session_question_results_path(room_id: i64) -> String {
    format!("/game-sessions/{room_id}/question-results")
}

pub fn session_summary_path(room_id: i64) -> String {
    format!("/game-sessions/{room_id}/summary")
}

// Client-side defaults
pub const DEFAULT_TIME_REMAINING: u32 = 30;
pub const INITIAL_QUESTION_NUMBER: u32 = 1;
pub const MIN_READY_PLAYERS: usize = 2;

// Credential cache
pub const CREDENTIALS_FILE_NAME: &str = "credentials.json";
