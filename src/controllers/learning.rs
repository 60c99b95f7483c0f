use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        learning::{LearningRecord, LearningService, LearningServiceApi},
        review::{ReviewService, ReviewServiceApi},
        words::WordDefinition,
    },
    error::{AppError, AppResult},
    infrastructure::config::Config,
};

/// Request for POST /save-learning-record
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLearningRecordRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub word: WordDefinition,
    #[serde(default)]
    pub add_to_review_list: bool,
}

/// Query for GET /get-learning-records and GET /get-review-list
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: String,
}

/// Request for POST /update-review-status
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewStatusRequest {
    pub word_id: Uuid,
    #[serde(default)]
    pub user_id: Option<String>,
    pub add_to_review_list: bool,
}

/// Request for POST /increment-review-count
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementReviewCountRequest {
    pub word_id: Uuid,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Response wrapper for record listings
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordsResponse {
    pub records: Vec<LearningRecord>,
}

pub struct LearningController {
    learning_service: Arc<LearningService>,
    review_service: Arc<ReviewService>,
    config: Arc<Config>,
}

impl LearningController {
    pub fn new(
        learning_service: Arc<LearningService>,
        review_service: Arc<ReviewService>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            learning_service,
            review_service,
            config,
        }
    }

    fn resolve_user_id(&self, user_id: Option<String>) -> String {
        user_id.unwrap_or_else(|| self.config.default_user_id.clone())
    }

    /// POST /save-learning-record - Persist a word definition for a user
    pub async fn save_learning_record(
        State(controller): State<Arc<LearningController>>,
        Json(request): Json<SaveLearningRecordRequest>,
    ) -> AppResult<Json<LearningRecord>> {
        let user_id = controller.resolve_user_id(request.user_id);

        let record = controller
            .learning_service
            .save_record(&user_id, request.word, request.add_to_review_list)
            .await
            .map_err(AppError::from)?;

        Ok(Json(record))
    }

    /// GET /get-learning-records?userId= - All records for a user
    pub async fn get_learning_records(
        State(controller): State<Arc<LearningController>>,
        Query(query): Query<UserQuery>,
    ) -> AppResult<Json<RecordsResponse>> {
        let records = controller
            .learning_service
            .get_user_records(&query.user_id)
            .await
            .map_err(AppError::from)?;

        Ok(Json(RecordsResponse { records }))
    }

    /// GET /get-review-list?userId= - Records flagged for review
    pub async fn get_review_list(
        State(controller): State<Arc<LearningController>>,
        Query(query): Query<UserQuery>,
    ) -> AppResult<Json<RecordsResponse>> {
        let records = controller
            .review_service
            .due_for_review(&query.user_id)
            .await
            .map_err(AppError::from)?;

        Ok(Json(RecordsResponse { records }))
    }

    /// POST /update-review-status - Toggle review-list membership
    pub async fn update_review_status(
        State(controller): State<Arc<LearningController>>,
        Json(request): Json<UpdateReviewStatusRequest>,
    ) -> AppResult<Json<LearningRecord>> {
        let user_id = controller.resolve_user_id(request.user_id);

        let record = controller
            .learning_service
            .set_review_membership(&user_id, request.word_id, request.add_to_review_list)
            .await
            .map_err(AppError::from)?;

        Ok(Json(record))
    }

    /// POST /increment-review-count - Record one review event
    pub async fn increment_review_count(
        State(controller): State<Arc<LearningController>>,
        Json(request): Json<IncrementReviewCountRequest>,
    ) -> AppResult<Json<LearningRecord>> {
        let user_id = controller.resolve_user_id(request.user_id);

        let record = controller
            .review_service
            .mark_reviewed(&user_id, request.word_id)
            .await
            .map_err(AppError::from)?;

        Ok(Json(record))
    }
}
