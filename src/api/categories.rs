use super::{push_param, Api};
use crate::errors::ApiError;
use crate::models::{Category, Question};
use crate::names;

impl Api {
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(names::CATEGORIES_PATH, &[]).await
    }

    pub async fn category(&self, id: i64) -> Result<Category, ApiError> {
        self.get_json(&names::category_path(id), &[]).await
    }

    pub async fn category_questions(
        &self,
        id: i64,
        limit: Option<u32>,
    ) -> Result<Vec<Question>, ApiError> {
        let mut query = Vec::new();
        push_param(&mut query, "limit", limit);
        self.get_json(&names::category_questions_path(id), &query)
            .await
    }
}
