use super::{push_param, Api};
use crate::errors::ApiError;
use crate::models::{CreateRoomForm, GameRoom, JoinRoomForm, PlayerScore, RoomStatus, SubmitAnswerForm};
use crate::names;

/// Optional filters for the room listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomFilter {
    pub status: Option<RoomStatus>,
    pub category_id: Option<i64>,
    pub limit: Option<u32>,
}

impl RoomFilter {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_param(&mut query, "status", self.status.map(RoomStatus::wire_name));
        push_param(&mut query, "category_id", self.category_id);
        push_param(&mut query, "limit", self.limit);
        query
    }
}

impl Api {
    pub async fn rooms(&self, filter: &RoomFilter) -> Result<Vec<GameRoom>, ApiError> {
        self.get_json(names::GAME_ROOMS_PATH, &filter.query()).await
    }

    pub async fn create_room(&self, form: &CreateRoomForm) -> Result<GameRoom, ApiError> {
        let room: GameRoom = self.post_json(names::GAME_ROOMS_PATH, form).await?;
        tracing::info!("room created: id={}, name={}", room.id, room.name);
        Ok(room)
    }

    pub async fn room(&self, id: i64) -> Result<GameRoom, ApiError> {
        self.get_json(&names::room_path(id), &[]).await
    }

    pub async fn find_room_by_code(&self, code: &str) -> Result<GameRoom, ApiError> {
        let query = [("code", code.to_string())];
        self.get_json(names::FIND_ROOM_BY_CODE_PATH, &query).await
    }

    pub async fn join_room(&self, id: i64, form: Option<&JoinRoomForm>) -> Result<(), ApiError> {
        match form {
            Some(form) => self.post_unit(&names::room_join_path(id), form).await?,
            None => self.post_empty(&names::room_join_path(id)).await?,
        }
        tracing::info!("joined room {id}");
        Ok(())
    }

    pub async fn leave_room(&self, id: i64) -> Result<(), ApiError> {
        self.post_empty(&names::room_leave_path(id)).await?;
        tracing::info!("left room {id}");
        Ok(())
    }

    pub async fn toggle_ready(&self, id: i64) -> Result<(), ApiError> {
        self.post_empty(&names::room_toggle_ready_path(id)).await
    }

    pub async fn start_game(&self, id: i64) -> Result<(), ApiError> {
        self.post_empty(&names::room_start_path(id)).await?;
        tracing::info!("game started in room {id}");
        Ok(())
    }

    pub async fn end_game(&self, id: i64) -> Result<(), ApiError> {
        self.post_empty(&names::room_end_path(id)).await?;
        tracing::info!("game ended in room {id}");
        Ok(())
    }

    pub async fn submit_answer(&self, id: i64, form: &SubmitAnswerForm) -> Result<(), ApiError> {
        self.post_unit(&names::room_submit_answer_path(id), form)
            .await
    }

    pub async fn room_leaderboard(&self, id: i64) -> Result<Vec<PlayerScore>, ApiError> {
        self.get_json(&names::room_leaderboard_path(id), &[]).await
    }
}
