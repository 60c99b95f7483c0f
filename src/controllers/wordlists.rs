use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        wordlists::{WordList, WordListService, WordListServiceApi},
        words::WordDefinition,
    },
    error::{AppError, AppResult},
    infrastructure::config::Config,
};

/// Request for POST /save-wordlist
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveWordListRequest {
    pub name: String,
    pub words: Vec<WordDefinition>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Query for GET /get-wordlists
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordListsQuery {
    pub user_id: String,
}

/// Response for GET /get-wordlists
#[derive(Debug, Serialize, Deserialize)]
pub struct WordListsResponse {
    pub wordlists: Vec<WordList>,
}

pub struct WordListsController {
    word_list_service: Arc<WordListService>,
    config: Arc<Config>,
}

impl WordListsController {
    pub fn new(word_list_service: Arc<WordListService>, config: Arc<Config>) -> Self {
        Self {
            word_list_service,
            config,
        }
    }

    /// POST /save-wordlist - Persist a named word list
    pub async fn save_wordlist(
        State(controller): State<Arc<WordListsController>>,
        Json(request): Json<SaveWordListRequest>,
    ) -> AppResult<Json<WordList>> {
        let user_id = request
            .user_id
            .unwrap_or_else(|| controller.config.default_user_id.clone());

        let list = controller
            .word_list_service
            .create_list(&user_id, &request.name, request.words)
            .await
            .map_err(AppError::from)?;

        Ok(Json(list))
    }

    /// GET /get-wordlists?userId= - All word lists for a user
    pub async fn get_wordlists(
        State(controller): State<Arc<WordListsController>>,
        Query(query): Query<WordListsQuery>,
    ) -> AppResult<Json<WordListsResponse>> {
        let wordlists = controller
            .word_list_service
            .get_user_lists(&query.user_id)
            .await
            .map_err(AppError::from)?;

        Ok(Json(WordListsResponse { wordlists }))
    }

    /// GET /get-wordlist/{id} - One word list by id
    pub async fn get_wordlist(
        State(controller): State<Arc<WordListsController>>,
        Path(list_id): Path<Uuid>,
    ) -> AppResult<Json<WordList>> {
        let list = controller
            .word_list_service
            .get_list(list_id)
            .await
            .map_err(AppError::from)?;

        Ok(Json(list))
    }
}
