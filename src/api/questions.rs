use super::{push_param, Api};
use crate::errors::ApiError;
use crate::models::{Question, QuestionKind};
use crate::names;

/// Optional filters for question listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionFilter {
    pub category_id: Option<i64>,
    pub question_type: Option<QuestionKind>,
    pub limit: Option<u32>,
}

impl QuestionFilter {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_param(&mut query, "category_id", self.category_id);
        push_param(&mut query, "type", self.question_type.map(QuestionKind::wire_name));
        push_param(&mut query, "limit", self.limit);
        query
    }
}

impl Api {
    pub async fn questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, ApiError> {
        self.get_json(names::QUESTIONS_PATH, &filter.query()).await
    }

    pub async fn random_question(
        &self,
        category_id: Option<i64>,
        question_type: Option<QuestionKind>,
    ) -> Result<Question, ApiError> {
        let mut query = Vec::new();
        push_param(&mut query, "category_id", category_id);
        push_param(&mut query, "type", question_type.map(QuestionKind::wire_name));
        self.get_json(names::RANDOM_QUESTION_PATH, &query).await
    }

    pub async fn question(&self, id: i64) -> Result<Question, ApiError> {
        self.get_json(&names::question_path(id), &[]).await
    }
}
