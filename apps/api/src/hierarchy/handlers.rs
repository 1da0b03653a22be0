//! Axum route handlers for the Hierarchy API.

use std::path::PathBuf;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::hierarchy::classifier::{classify_category, detect_seniority, infer_rank, Category};
use crate::hierarchy::ladder::{next_higher_label, CanonicalLabel, TechStage};
use crate::hierarchy::normalize::normalize;
use crate::hierarchy::registry::{HierarchyStats, SuperiorAnswer};
use crate::state::AppState;

/// Upper bound on queries accepted in one batch request.
const MAX_BATCH_QUERIES: usize = 1_000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SuperiorQuery {
    #[serde(default)]
    pub title: String,
    pub division: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub queries: Vec<SuperiorQuery>,
}

#[derive(Debug, Serialize)]
pub struct BatchItem {
    pub title: String,
    pub division: Option<String>,
    pub superior: SuperiorAnswer,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchItem>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub normalized_title: String,
    pub category: Option<Category>,
    pub category_label: Option<&'static str>,
    pub rank: u16,
    pub seniority: Option<TechStage>,
    pub next_higher_label: Option<CanonicalLabel>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoadRequest {
    pub path: Option<PathBuf>,
    pub title_column: Option<usize>,
    pub division_column: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct LoadResponse {
    /// `false` when an index was already loaded and nothing was rebuilt.
    pub built: bool,
    pub stats: Option<HierarchyStats>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: HierarchyStats,
    pub similarity: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/hierarchy/superior?title=&division=
pub async fn handle_get_superior(
    State(state): State<AppState>,
    Query(query): Query<SuperiorQuery>,
) -> Result<Json<SuperiorAnswer>, AppError> {
    if query.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let answer = state
        .registry
        .get_superior(&query.title, query.division.as_deref())
        .await;
    Ok(Json(answer))
}

/// POST /api/v1/hierarchy/superior/batch
///
/// Blank titles inside a batch are answered as unknown rather than rejected.
pub async fn handle_batch_superior(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    if request.queries.len() > MAX_BATCH_QUERIES {
        return Err(AppError::Validation(format!(
            "at most {MAX_BATCH_QUERIES} queries per batch"
        )));
    }

    let mut results = Vec::with_capacity(request.queries.len());
    for query in request.queries {
        let superior = state
            .registry
            .get_superior(&query.title, query.division.as_deref())
            .await;
        results.push(BatchItem {
            title: query.title,
            division: query.division,
            superior,
        });
    }

    Ok(Json(BatchResponse { results }))
}

/// GET /api/v1/hierarchy/classify?title=
///
/// Shows how a title is read: category, rank, seniority stage and next label.
pub async fn handle_classify(
    Query(query): Query<ClassifyQuery>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let normalized_title = normalize(&query.title);
    if normalized_title.is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let category = classify_category(&normalized_title);
    Ok(Json(ClassifyResponse {
        category,
        category_label: category.map(Category::label),
        rank: infer_rank(&normalized_title),
        seniority: detect_seniority(&normalized_title),
        next_higher_label: next_higher_label(&normalized_title),
        normalized_title,
    }))
}

/// POST /api/v1/hierarchy/load
///
/// Loads the export at `path`, or the configured export when omitted.
/// A no-op (`built: false`) when an index is already loaded.
pub async fn handle_load(
    State(state): State<AppState>,
    Json(request): Json<LoadRequest>,
) -> Result<Json<LoadResponse>, AppError> {
    let path = request
        .path
        .or_else(|| state.config.hierarchy_csv_path.clone())
        .ok_or_else(|| {
            AppError::Validation("path is required when no export is configured".to_string())
        })?;

    let mut layout = state.config.column_layout();
    if let Some(column) = request.title_column {
        layout.title_column = column;
    }
    if let Some(column) = request.division_column {
        layout.division_column = column;
    }
    if layout.title_column == layout.division_column {
        return Err(AppError::Validation(
            "title_column and division_column must differ".to_string(),
        ));
    }

    let built = state.registry.load_path(&path, &layout).await?;
    let stats = state.registry.stats().await;

    Ok(Json(LoadResponse { built, stats }))
}

/// DELETE /api/v1/hierarchy
pub async fn handle_clear(State(state): State<AppState>) -> StatusCode {
    state.registry.clear().await;
    StatusCode::NO_CONTENT
}

/// GET /api/v1/hierarchy/stats
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = state
        .registry
        .stats()
        .await
        .ok_or_else(|| AppError::NotFound("no hierarchy loaded".to_string()))?;

    Ok(Json(StatsResponse {
        stats,
        similarity: state.registry.similarity_name(),
    }))
}
