//! Tracker Controller — orchestrates the sheet store, the record mapper,
//! and the analysis gateway.
//!
//! Persistence is write-through: every mutation immediately overwrites the
//! full backing row. Row identity is resolved by the record's stable id
//! over a fresh read, never by display fields or a remembered position.

pub mod handlers;
pub mod view;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{self, RelevanceAssessment};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::job::{JobApplication, Status};
use crate::records::{record_to_row, row_to_record, ROW_OFFSET};
use crate::sheets::SheetStore;

/// Fields accepted when creating an application. Everything but employer
/// and position is optional.
#[derive(Debug, Deserialize)]
pub struct NewJob {
    pub employer: String,
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub applied_date: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub url: String,
}

/// Partial field update. Absent fields keep their stored values; the merged
/// record is written back as one full row.
#[derive(Debug, Default, Deserialize)]
pub struct JobPatch {
    pub employer: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub status: Option<Status>,
    pub applied_date: Option<String>,
    pub relevance: Option<f64>,
    pub job_description: Option<String>,
    pub resume: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub notes: Option<String>,
    pub url: Option<String>,
    pub updated_resume: Option<String>,
    pub updated_resume_analysis: Option<String>,
    pub latex_resume: Option<String>,
    pub keyword_analysis: Option<String>,
}

impl JobPatch {
    fn apply(self, record: &mut JobApplication) {
        if let Some(v) = self.employer {
            record.employer = v;
        }
        if let Some(v) = self.position {
            record.position = v;
        }
        if let Some(v) = self.location {
            record.location = v;
        }
        if let Some(v) = self.status {
            record.status = v;
        }
        if let Some(v) = self.applied_date {
            record.applied_date = v;
        }
        if let Some(v) = self.relevance {
            record.relevance = Some(v);
        }
        if let Some(v) = self.job_description {
            record.job_description = v;
        }
        if let Some(v) = self.resume {
            record.resume = v;
        }
        if let Some(v) = self.keywords {
            record.keywords = v;
        }
        if let Some(v) = self.notes {
            record.notes = v;
        }
        if let Some(v) = self.url {
            record.url = v;
        }
        if let Some(v) = self.updated_resume {
            record.updated_resume = v;
        }
        if let Some(v) = self.updated_resume_analysis {
            record.updated_resume_analysis = v;
        }
        if let Some(v) = self.latex_resume {
            record.latex_resume = v;
        }
        if let Some(v) = self.keyword_analysis {
            record.keyword_analysis = v;
        }
    }
}

/// Result of running the three analyses against one record.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// The record after merging successful results and persisting.
    pub job: JobApplication,
    /// Explanation attached to the relevance score. Response-only — the
    /// sheet has no column for it.
    pub relevance_reason: Option<String>,
    /// One message per failed analysis; empty when all three succeeded.
    pub errors: Vec<String>,
}

/// Raw per-operation outcomes before merge. `None` means that operation
/// failed and its field keeps its stored value.
#[derive(Debug, Default)]
struct AnalysisOutcome {
    keywords: Option<Vec<String>>,
    relevance: Option<RelevanceAssessment>,
    feedback: Option<String>,
    errors: Vec<String>,
}

impl AnalysisOutcome {
    fn is_empty(&self) -> bool {
        self.keywords.is_none() && self.relevance.is_none() && self.feedback.is_none()
    }
}

/// The sheet row holding the record at local index `index`.
fn sheet_row(index: usize) -> usize {
    index + ROW_OFFSET
}

/// Looks up a record by stable id. Returns the local index (row = index +
/// offset) and the record.
fn resolve(jobs: &[JobApplication], id: Uuid) -> Option<(usize, &JobApplication)> {
    jobs.iter().enumerate().find(|(_, job)| job.id == Some(id))
}

/// Reads and maps every row, in storage order. Cleared rows map to blank
/// records and stay in place so index-to-row mapping holds.
pub async fn list_jobs(store: &dyn SheetStore) -> Result<Vec<JobApplication>, AppError> {
    let rows = store.read_rows().await?;
    Ok(rows.iter().map(row_to_record).collect())
}

/// Appends a new application with a generated id. The applied date defaults
/// to today when not supplied.
pub async fn create_job(store: &dyn SheetStore, new: NewJob) -> Result<JobApplication, AppError> {
    let applied_date = if new.applied_date.trim().is_empty() {
        Utc::now().format("%Y-%m-%d").to_string()
    } else {
        new.applied_date
    };

    let record = JobApplication {
        id: Some(Uuid::new_v4()),
        employer: new.employer,
        position: new.position,
        location: new.location,
        status: new.status,
        applied_date,
        relevance: None,
        job_description: new.job_description,
        resume: new.resume,
        keywords: new.keywords,
        notes: new.notes,
        url: new.url,
        ..Default::default()
    };

    store.append_row(record_to_row(&record)).await?;
    info!(
        "Added application: {} at {}",
        record.position, record.employer
    );

    Ok(record)
}

/// Merges a field patch into the stored record and writes the full row back.
pub async fn update_job(
    store: &dyn SheetStore,
    id: Uuid,
    patch: JobPatch,
) -> Result<JobApplication, AppError> {
    let jobs = list_jobs(store).await?;
    let (index, existing) =
        resolve(&jobs, id).ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    let mut updated = existing.clone();
    patch.apply(&mut updated);

    store.update_row(sheet_row(index), record_to_row(&updated)).await?;
    info!("Updated application {id} (row {})", sheet_row(index));

    Ok(updated)
}

/// Blanks the record's row. The row is not removed, so no other record
/// shifts. Returns the re-read list so the caller's state reconciles with
/// the store.
pub async fn delete_job(
    store: &dyn SheetStore,
    id: Uuid,
) -> Result<Vec<JobApplication>, AppError> {
    let jobs = list_jobs(store).await?;
    let (index, _) =
        resolve(&jobs, id).ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    store.clear_row(sheet_row(index)).await?;
    info!("Cleared application {id} (row {})", sheet_row(index));

    list_jobs(store).await
}

/// Runs the three analyses against the record's job description and resume,
/// then merges the successful results and persists them in one write.
pub async fn analyze_job(
    store: &dyn SheetStore,
    llm: &LlmClient,
    id: Uuid,
) -> Result<AnalysisReport, AppError> {
    let jobs = list_jobs(store).await?;
    let (_, snapshot) =
        resolve(&jobs, id).ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    let job_description = snapshot.job_description.clone();
    let resume = snapshot.resume.clone();

    let outcome = run_analyses(llm, &job_description, &resume).await;

    apply_analysis(store, id, outcome).await
}

/// Each analysis stands alone: one failing demotes to an error message and
/// leaves its field untouched, the others proceed.
async fn run_analyses(llm: &LlmClient, job_description: &str, resume: &str) -> AnalysisOutcome {
    let mut outcome = AnalysisOutcome::default();

    match analysis::extract_keywords(job_description, llm).await {
        Ok(extraction) => outcome.keywords = Some(extraction.keywords),
        Err(e) => {
            warn!("Keyword extraction failed: {e}");
            outcome.errors.push(e.to_string());
        }
    }

    match analysis::score_relevance(job_description, resume, llm).await {
        Ok(assessment) => outcome.relevance = Some(assessment),
        Err(e) => {
            warn!("Relevance scoring failed: {e}");
            outcome.errors.push(e.to_string());
        }
    }

    match analysis::generate_feedback(job_description, resume, llm).await {
        Ok(feedback) => outcome.feedback = Some(feedback.feedback),
        Err(e) => {
            warn!("Feedback generation failed: {e}");
            outcome.errors.push(e.to_string());
        }
    }

    outcome
}

/// Write-back half of `analyze_job`. Re-resolves the record by id: the
/// analyses are slow, and results must merge into the store's current view
/// of the record — or be discarded when the record is gone.
async fn apply_analysis(
    store: &dyn SheetStore,
    id: Uuid,
    outcome: AnalysisOutcome,
) -> Result<AnalysisReport, AppError> {
    let current = list_jobs(store).await?;
    let (index, fresh) = match resolve(&current, id) {
        Some(found) => found,
        None => {
            warn!("Discarding analysis results: job {id} no longer exists");
            return Err(AppError::NotFound(format!(
                "Job {id} was removed while analysis was running"
            )));
        }
    };

    let mut merged = fresh.clone();
    let mut relevance_reason = None;
    let changed = !outcome.is_empty();

    if let Some(keywords) = outcome.keywords {
        merged.keywords = keywords;
    }
    if let Some(assessment) = outcome.relevance {
        merged.relevance = Some(assessment.relevance_score);
        relevance_reason = Some(assessment.reason);
    }
    if let Some(feedback) = outcome.feedback {
        merged.updated_resume_analysis = feedback;
    }

    if changed {
        store.update_row(sheet_row(index), record_to_row(&merged)).await?;
        info!("Persisted analysis results for {id}");
    }

    Ok(AnalysisReport {
        job: merged,
        relevance_reason,
        errors: outcome.errors,
    })
}
