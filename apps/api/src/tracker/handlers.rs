//! Axum route handlers for the Tracker API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobApplication;
use crate::state::AppState;
use crate::tracker::view::{self, SortColumn, SortDirection};
use crate::tracker::{self, AnalysisReport, JobPatch, NewJob};

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub sort: Option<SortColumn>,
    #[serde(default)]
    pub dir: SortDirection,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobApplication>,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteJobResponse {
    /// The full list re-read after the clear, so client state reconciles
    /// with whatever actually landed in the store.
    pub jobs: Vec<JobApplication>,
}

/// GET /api/v1/jobs
///
/// Full listing with optional search, sort, and pagination — all applied
/// in memory over the fetched list, never persisted.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = tracker::list_jobs(state.sheets.as_ref()).await?;

    let mut jobs = match params.q.as_deref() {
        Some(query) => view::search_jobs(&jobs, query),
        None => jobs,
    };
    if let Some(column) = params.sort {
        view::sort_jobs(&mut jobs, column, params.dir);
    }

    let total = jobs.len();
    let page_count = view::page_count(total, params.per_page);
    let jobs = view::paginate(&jobs, params.page, params.per_page);

    Ok(Json(JobListResponse {
        jobs,
        total,
        page: params.page,
        page_count,
    }))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<NewJob>,
) -> Result<Json<JobApplication>, AppError> {
    if request.employer.trim().is_empty() {
        return Err(AppError::Validation("employer cannot be empty".to_string()));
    }
    if request.position.trim().is_empty() {
        return Err(AppError::Validation("position cannot be empty".to_string()));
    }

    let job = tracker::create_job(state.sheets.as_ref(), request).await?;
    Ok(Json(job))
}

/// PATCH /api/v1/jobs/:id
///
/// Partial field update, written through to the store immediately.
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<JobPatch>,
) -> Result<Json<JobApplication>, AppError> {
    let job = tracker::update_job(state.sheets.as_ref(), id, patch).await?;
    Ok(Json(job))
}

/// DELETE /api/v1/jobs/:id
///
/// Clears the backing row (the row stays, blank) and returns the re-read
/// list.
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteJobResponse>, AppError> {
    let jobs = tracker::delete_job(state.sheets.as_ref(), id).await?;
    Ok(Json(DeleteJobResponse { jobs }))
}

/// POST /api/v1/jobs/:id/analyze
///
/// Runs keyword extraction, relevance scoring, and feedback generation
/// against the record, persists whatever succeeded, and reports the rest.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = tracker::analyze_job(state.sheets.as_ref(), &state.llm, id).await?;
    Ok(Json(report))
}
