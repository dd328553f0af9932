//! Sheet-access collaborator boundary
//!
//! The mapping and generation core never talks to the network itself; it
//! hands grids and request batches to an implementation of
//! [`SheetsClient`]. Every operation is fallible-returns-`None`: backend
//! problems (auth failure, invalid id, quota, not-found) surface as
//! `None`, never as errors propagated into the core. Callers turn `None`
//! into an Error-level [`Message`](gridbind_core::Message).

use std::collections::HashMap;

use async_trait::async_trait;
use gridbind_core::CellValue;
use gridbind_requests::Request;

/// A raw sheet grid: rows of cells, row 0 being the header row
pub type Grid = Vec<Vec<CellValue>>;

/// Spreadsheet metadata
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpreadsheetInfo {
    /// Spreadsheet title
    pub title: String,
    /// Names of the sheets that currently exist
    pub sheet_names: Vec<String>,
}

impl SpreadsheetInfo {
    /// Whether a sheet with this name already exists
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheet_names.iter().any(|n| n == name)
    }
}

/// Confirmation for an append operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppendOutcome {
    pub updated_rows: u32,
}

/// Confirmation for an in-place update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    pub updated_cells: u32,
}

/// Confirmation for a structural batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    pub reply_count: u32,
}

/// The external sheet-access collaborator
#[async_trait]
pub trait SheetsClient: Send + Sync {
    /// Read a sheet's full value grid; `None` = not found or backend error
    async fn get_sheet_data(&self, sheet_name: &str) -> Option<Grid>;

    /// Read the same range from several sheets at once
    async fn get_batch_data(
        &self,
        sheet_names: &[String],
        range: &str,
    ) -> Option<HashMap<String, Grid>>;

    /// Spreadsheet title and existing sheet names
    async fn get_sheet_info(&self) -> Option<SpreadsheetInfo>;

    /// Append rows after the last data row of `range`
    async fn append_data(&self, rows: Grid, range: &str) -> Option<AppendOutcome>;

    /// Overwrite `range` with rows
    async fn update_data(&self, rows: Grid, range: &str) -> Option<UpdateOutcome>;

    /// Apply a structural request batch
    async fn batch_update(&self, requests: Vec<Request>) -> Option<BatchOutcome>;
}
