//! Domain sheet manager
//!
//! Thin orchestration over the row mapper, header validator, and request
//! generator, delegating all I/O to the [`SheetsClient`] collaborator.
//! Expected failures come back as [`Message`] lists; the only `Err` paths
//! anywhere below are programmer errors.

use std::collections::HashMap;

use gridbind_core::{column_to_letters, CellValue, Message};
use gridbind_mapping::{
    check_sheet_header_cells, map_from_range_data, map_to_row_data, RowAction, RowEntity,
};
use gridbind_requests::{RequestBatch, SheetModel};
use log::{debug, warn};

use crate::client::{Grid, SheetsClient};

/// Diagnostic category for backend failures
pub const BACKEND_CATEGORY: &str = "backend";

/// Diagnostic category for sheet lifecycle notices
pub const SHEETS_CATEGORY: &str = "sheets";

/// Orchestrates mapping, validation, and generation for a set of sheets
pub struct SheetManager<C> {
    client: C,
}

impl<C: SheetsClient> SheetManager<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying collaborator
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Read a sheet and map its rows to entities
    ///
    /// A backend failure yields an empty list plus one Error message; it
    /// never panics or propagates.
    pub async fn read_entities<E: RowEntity>(
        &self,
        sheet_name: &str,
    ) -> (Vec<E>, Vec<Message>) {
        match self.client.get_sheet_data(sheet_name).await {
            Some(grid) => {
                let entities = map_from_range_data(&grid);
                debug!("read {} entities from '{}'", entities.len(), sheet_name);
                (entities, Vec::new())
            }
            None => {
                warn!("backend returned no data for '{}'", sheet_name);
                (
                    Vec::new(),
                    vec![Message::error(
                        BACKEND_CATEGORY,
                        format!("Unable to read sheet [{}]", sheet_name),
                    )],
                )
            }
        }
    }

    /// Write entities back to a sheet in its live column order
    ///
    /// Unsaved entities (row-id 0) are appended below the existing data;
    /// saved ones are rewritten in place at their row. An explicit
    /// [`RowAction::Insert`] forces an append regardless of row-id, and
    /// rows marked [`RowAction::Delete`] are skipped with a Warning (this
    /// path never removes rows). The live header row decides column
    /// order, so a sheet whose columns were rearranged still receives
    /// every value in the right place.
    pub async fn write_entities<E: RowEntity>(
        &self,
        sheet_name: &str,
        entities: &[E],
    ) -> Vec<Message> {
        let Some(grid) = self.client.get_sheet_data(sheet_name).await else {
            return vec![Message::error(
                BACKEND_CATEGORY,
                format!("Unable to read sheet [{}]", sheet_name),
            )];
        };
        let Some(headers) = live_headers(&grid) else {
            return vec![Message::error(
                SHEETS_CATEGORY,
                format!("Sheet [{}] has no header row", sheet_name),
            )];
        };

        let mut messages = Vec::new();
        let last_letter = column_to_letters(headers.len().saturating_sub(1) as u32);

        let mut appends: Grid = Vec::new();
        for entity in entities {
            let meta = entity.meta();
            if meta.action == RowAction::Delete {
                messages.push(Message::warning(
                    SHEETS_CATEGORY,
                    format!(
                        "Row {} of [{}] is marked Delete and was not written",
                        meta.row_id, sheet_name
                    ),
                ));
                continue;
            }
            let row = map_to_row_data(entity, &headers);
            if meta.is_new() || meta.action == RowAction::Insert {
                appends.push(row);
            } else {
                let range = format!(
                    "{}!A{}:{}{}",
                    sheet_name, meta.row_id, last_letter, meta.row_id
                );
                if self.client.update_data(vec![row], &range).await.is_none() {
                    messages.push(Message::error(
                        BACKEND_CATEGORY,
                        format!("Unable to update row {} of [{}]", meta.row_id, sheet_name),
                    ));
                }
            }
        }

        if !appends.is_empty() {
            let count = appends.len();
            let range = format!("{}!A2:{}", sheet_name, last_letter);
            match self.client.append_data(appends, &range).await {
                Some(outcome) => messages.push(Message::info(
                    SHEETS_CATEGORY,
                    format!(
                        "Appended {} rows to [{}] ({} reported)",
                        count, sheet_name, outcome.updated_rows
                    ),
                )),
                None => messages.push(Message::error(
                    BACKEND_CATEGORY,
                    format!("Unable to append {} rows to [{}]", count, sheet_name),
                )),
            }
        }

        messages
    }

    /// Read the same range from several sheets and map each to entities
    ///
    /// Sheets the backend omits from its reply get an Error message and an
    /// empty list; the rest map normally.
    pub async fn read_entities_batch<E: RowEntity>(
        &self,
        sheet_names: &[String],
        range: &str,
    ) -> (HashMap<String, Vec<E>>, Vec<Message>) {
        let Some(mut grids) = self.client.get_batch_data(sheet_names, range).await else {
            return (
                HashMap::new(),
                vec![Message::error(
                    BACKEND_CATEGORY,
                    format!("Unable to batch-read sheets {:?}", sheet_names),
                )],
            );
        };

        let mut entities = HashMap::new();
        let mut messages = Vec::new();
        for name in sheet_names {
            match grids.remove(name) {
                Some(grid) => {
                    entities.insert(name.clone(), map_from_range_data(&grid));
                }
                None => messages.push(Message::error(
                    BACKEND_CATEGORY,
                    format!("Unable to read sheet [{}]", name),
                )),
            }
        }
        (entities, messages)
    }

    /// Validate every model's header row against the live sheet
    ///
    /// Diagnostics across all sheets are accumulated into one report.
    pub async fn validate_sheets(&self, models: &[SheetModel]) -> Vec<Message> {
        let mut messages = Vec::new();
        for model in models {
            match self.client.get_sheet_data(&model.name).await {
                Some(grid) => match grid.first() {
                    Some(header_row) => {
                        messages
                            .extend(check_sheet_header_cells(header_row, &model.header_names()));
                    }
                    None => messages.push(Message::error(
                        SHEETS_CATEGORY,
                        format!("Sheet [{}] has no header row", model.name),
                    )),
                },
                None => messages.push(Message::error(
                    BACKEND_CATEGORY,
                    format!("Unable to read sheet [{}]", model.name),
                )),
            }
        }
        messages
    }

    /// Create the sheets that do not exist yet
    ///
    /// Models whose tab already exists are skipped with an Info message;
    /// the rest go through the request generator as one batch.
    pub async fn materialize_sheets(&self, mut models: Vec<SheetModel>) -> Vec<Message> {
        let Some(info) = self.client.get_sheet_info().await else {
            return vec![Message::error(
                BACKEND_CATEGORY,
                "Unable to read spreadsheet metadata".to_string(),
            )];
        };

        let mut messages = Vec::new();
        models.retain(|model| {
            if info.has_sheet(&model.name) {
                messages.push(Message::info(
                    SHEETS_CATEGORY,
                    format!("Sheet [{}] already exists", model.name),
                ));
                false
            } else {
                true
            }
        });

        if models.is_empty() {
            return messages;
        }

        let names: Vec<String> = models.iter().map(|m| m.name.clone()).collect();
        let requests = RequestBatch::generate(&mut models);
        debug!(
            "submitting {} structural requests for sheets {:?}",
            requests.len(),
            names
        );

        match self.client.batch_update(requests).await {
            Some(_) => {
                for name in names {
                    messages.push(Message::info(
                        SHEETS_CATEGORY,
                        format!("Created sheet [{}]", name),
                    ));
                }
            }
            None => messages.push(Message::error(
                BACKEND_CATEGORY,
                format!("Unable to create sheets {:?}", names),
            )),
        }

        messages
    }
}

/// Trimmed header labels from the grid's first non-blank row
fn live_headers(grid: &[Vec<CellValue>]) -> Option<Vec<String>> {
    grid.iter()
        .find(|row| !row.first().map_or(true, CellValue::is_blank))
        .map(|row| {
            row.iter()
                .map(|cell| cell.display_text().trim().to_string())
                .collect()
        })
}
