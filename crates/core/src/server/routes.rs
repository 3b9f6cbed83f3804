//! Prompt API handlers
//!
//! - `GET /api/prompts/random?category=` → one prompt
//! - `GET /api/prompts` → every prompt
//! - `GET /api/prompts/category/:category` → prompts in one category
//!
//! The random endpoint ignores an unrecognized category. The by-category
//! endpoint rejects it with 400.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{error::ApiError, SharedStore};
use crate::store::{Category, Prompt};

const RANDOM_FAILED: &str = "Failed to fetch random prompt";
const ALL_FAILED: &str = "Failed to fetch prompts";
const BY_CATEGORY_FAILED: &str = "Failed to fetch prompts by category";

#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    pub category: Option<String>,
}

pub async fn random_prompt(
    State(store): State<SharedStore>,
    query: Option<Query<RandomQuery>>,
) -> Result<Json<Prompt>, ApiError> {
    let category = query.and_then(|Query(q)| Category::parse_lenient(q.category.as_deref()));

    store
        .get_random(category)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_store(e, RANDOM_FAILED))
}

pub async fn all_prompts(State(store): State<SharedStore>) -> Result<Json<Vec<Prompt>>, ApiError> {
    store
        .get_all()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_store(e, ALL_FAILED))
}

pub async fn prompts_by_category(
    State(store): State<SharedStore>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Prompt>>, ApiError> {
    let category: Category = category.parse().map_err(|_| ApiError::invalid_category())?;

    store
        .get_by_category(category)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_store(e, BY_CATEGORY_FAILED))
}

/// Liveness probe
pub async fn health_check() -> &'static str {
    "OK"
}
