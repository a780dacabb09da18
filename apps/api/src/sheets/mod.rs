//! Spreadsheet access — the `SheetStore` contract plus the Google Sheets
//! implementation.
//!
//! The store is deliberately dumb: it moves rows of cells, keyed by a
//! 1-based row index, and knows nothing about job records. Mapping lives in
//! `records`; orchestration lives in `tracker`.

mod client;

pub use client::GoogleSheetsClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::records::SheetRow;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheets API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Auth error: {0}")]
    Auth(String),
}

/// One shared handle to the backing spreadsheet for the process lifetime.
/// Carried in `AppState` as `Arc<dyn SheetStore>`; tests implement it with
/// an in-memory fake.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Ensures the worksheet tab and header row exist. Idempotent: a second
    /// call against a correctly-configured store performs no writes.
    async fn ensure_sheet(&self) -> Result<(), SheetError>;

    /// Every data row below the header, in storage (append) order. Cleared
    /// rows come back as rows of empty cells, not gaps in the sequence.
    async fn read_rows(&self) -> Result<Vec<SheetRow>, SheetError>;

    /// Appends one row after the used range, cells in fixed header order.
    async fn append_row(&self, values: Vec<String>) -> Result<(), SheetError>;

    /// Overwrites the full row (all columns) at the given 1-based index.
    /// The caller is responsible for supplying an index consistent with
    /// current storage order.
    async fn update_row(&self, row_index: usize, values: Vec<String>) -> Result<(), SheetError>;

    /// Blanks the cells of the row at the given 1-based index. The row is
    /// not removed and no subsequent row shifts.
    async fn clear_row(&self, row_index: usize) -> Result<(), SheetError>;
}
