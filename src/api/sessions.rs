use super::Api;
use crate::errors::ApiError;
use crate::models::{GameSession, GameSummary, SessionAnswer};
use crate::names;

impl Api {
    pub async fn game_state(&self, room_id: i64) -> Result<GameSession, ApiError> {
        self.get_json(&names::session_state_path(room_id), &[]).await
    }

    pub async fn next_question(&self, room_id: i64) -> Result<(), ApiError> {
        self.post_empty(&names::session_next_question_path(room_id))
            .await
    }

    pub async fn pause_game(&self, room_id: i64) -> Result<(), ApiError> {
        self.post_empty(&names::session_pause_path(room_id)).await?;
        tracing::info!("session paused for room {room_id}");
        Ok(())
    }

    pub async fn resume_game(&self, room_id: i64) -> Result<(), ApiError> {
        self.post_empty(&names::session_resume_path(room_id)).await?;
        tracing::info!("session resumed for room {room_id}");
        Ok(())
    }

    pub async fn skip_question(&self, room_id: i64) -> Result<(), ApiError> {
        self.post_empty(&names::session_skip_question_path(room_id))
            .await
    }

    pub async fn question_results(&self, room_id: i64) -> Result<Vec<SessionAnswer>, ApiError> {
        self.get_json(&names::session_question_results_path(room_id), &[])
            .await
    }

    pub async fn game_summary(&self, room_id: i64) -> Result<GameSummary, ApiError> {
        self.get_json(&names::session_summary_path(room_id), &[])
            .await
    }
}
