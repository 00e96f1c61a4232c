// Single-player endpoints under /game

use super::{push_param, Api};
use crate::errors::ApiError;
use crate::models::{LearningProgress, PlayerScore, PlayerStats, SubmitAnswerForm};
use crate::names;

impl Api {
    pub async fn submit_solo_answer(&self, form: &SubmitAnswerForm) -> Result<(), ApiError> {
        self.post_unit(names::SOLO_SUBMIT_ANSWER_PATH, form).await
    }

    pub async fn progress(&self) -> Result<LearningProgress, ApiError> {
        self.get_json(names::SOLO_PROGRESS_PATH, &[]).await
    }

    pub async fn leaderboard(&self, limit: Option<u32>) -> Result<Vec<PlayerScore>, ApiError> {
        let mut query = Vec::new();
        push_param(&mut query, "limit", limit);
        self.get_json(names::SOLO_LEADERBOARD_PATH, &query).await
    }

    pub async fn stats(&self) -> Result<PlayerStats, ApiError> {
        self.get_json(names::SOLO_STATS_PATH, &[]).await
    }
}
