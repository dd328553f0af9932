//! # gridbind
//!
//! A data-mapping and request-generation layer between typed row entities
//! and a spreadsheet backend's untyped grid.
//!
//! Reading: raw grid → [`HeaderIndex`](gridbind_mapping::HeaderIndex) →
//! row mapper → typed entities. Writing: typed entities → row mapper →
//! raw grid in the live sheet's column order, plus a
//! [`RequestBatch`](gridbind_requests::RequestBatch) of structural
//! requests to create or repair sheets. All I/O goes through the
//! [`SheetsClient`] collaborator; expected failures come back as
//! [`Message`](gridbind_core::Message) lists, not errors.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gridbind::prelude::*;
//!
//! # #[derive(Default)] struct Trip { meta: RowMeta }
//! # impl RowEntity for Trip {
//! #     fn schema() -> &'static [ColumnSchema] { &[] }
//! #     fn get(&self, _: &str) -> CellValue { CellValue::Null }
//! #     fn set(&mut self, _: &str, _: &CellValue) {}
//! #     fn meta(&self) -> &RowMeta { &self.meta }
//! #     fn meta_mut(&mut self) -> &mut RowMeta { &mut self.meta }
//! # }
//! # async fn demo(client: impl SheetsClient) {
//! let manager = SheetManager::new(client);
//! let (trips, messages) = manager.read_entities::<Trip>("Trips").await;
//! # }
//! ```

pub mod client;
pub mod manager;
pub mod prelude;

pub use client::{
    AppendOutcome, BatchOutcome, Grid, SheetsClient, SpreadsheetInfo, UpdateOutcome,
};
pub use manager::SheetManager;

// Re-export the component crates under one roof
pub use gridbind_core as core;
pub use gridbind_mapping as mapping;
pub use gridbind_requests as requests;
