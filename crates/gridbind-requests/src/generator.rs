//! Sheet request generator
//!
//! Folds a list of sheet models into the ordered request batch that
//! materializes them. The order within a sheet matters: every later
//! request references the sheet id the AddSheet request introduces.
//!
//! A builder is constructed fresh per `generate` call; nothing is shared
//! across invocations, so concurrent generations cannot interfere.

use gridbind_core::DEFAULT_COLUMN_COUNT;
use log::debug;

use crate::model::{SheetCell, SheetModel};
use crate::requests::{
    AddBandingRequest, AddProtectedRangeRequest, AddSheetRequest, AppendCellsRequest,
    AppendDimensionRequest, BandedRange, BandingProperties, BooleanCondition, Borders, CellData,
    CellFormat, ConditionValue, DataValidationRule, ExtendedValue, GridProperties, GridRange,
    NumberFormatSpec, ProtectedRange, RepeatCellRequest, Request, RowData,
    SetDataValidationRequest, SheetProperties, TextFormat,
};
use crate::style::SheetColor;

/// One-shot builder for a structural request batch
#[derive(Debug, Default)]
pub struct RequestBatch {
    requests: Vec<Request>,
    // Column format/validation requests are collected here and appended
    // after every sheet's structural requests.
    deferred: Vec<Request>,
}

impl RequestBatch {
    /// Generate the full batch for a list of sheet models
    ///
    /// Assigns each model's id when unset. Per-sheet requests come first
    /// in model order; the deferred per-column format and validation
    /// requests follow as one trailing group.
    pub fn generate(sheets: &mut [SheetModel]) -> Vec<Request> {
        let mut batch = RequestBatch::default();
        for sheet in sheets.iter_mut() {
            batch.push_sheet(sheet);
        }
        batch.finish()
    }

    fn finish(mut self) -> Vec<Request> {
        self.requests.append(&mut self.deferred);
        self.requests
    }

    fn push_sheet(&mut self, sheet: &mut SheetModel) {
        let sheet_id = sheet.ensure_id();
        let column_count = sheet.column_count();
        debug!(
            "generating requests for sheet '{}' (id {}, {} columns)",
            sheet.name, sheet_id, column_count
        );

        self.requests.push(Request::AddSheet(AddSheetRequest {
            properties: SheetProperties {
                sheet_id,
                title: sheet.name.clone(),
                tab_color: Some(sheet.tab_color.color()),
                grid_properties: Some(GridProperties {
                    frozen_row_count: Some(sheet.freeze_row_count),
                    frozen_column_count: Some(sheet.freeze_column_count),
                }),
            },
        }));

        // A new sheet starts with 26 columns; wider schemas extend first.
        if column_count as usize > DEFAULT_COLUMN_COUNT {
            self.requests
                .push(Request::AppendDimension(AppendDimensionRequest {
                    sheet_id,
                    dimension: "COLUMNS",
                    length: column_count - DEFAULT_COLUMN_COUNT as u32,
                }));
        }

        self.requests.push(Request::AppendCells(AppendCellsRequest {
            sheet_id,
            rows: vec![RowData {
                values: sheet
                    .headers
                    .iter()
                    .map(|cell| header_cell(cell, sheet.protect_sheet))
                    .collect(),
            }],
            fields: "userEnteredValue,userEnteredFormat,note".to_string(),
        }));

        for cell in &sheet.headers {
            // Formula columns get their own warning-only protection unless
            // the whole sheet is protected anyway.
            if (cell.has_formula() || cell.protect) && !sheet.protect_sheet {
                self.requests
                    .push(Request::AddProtectedRange(AddProtectedRangeRequest {
                        protected_range: ProtectedRange {
                            range: GridRange::column_data(sheet_id, cell.index),
                            description: Some(format!("{} column", cell.name)),
                            warning_only: true,
                        },
                    }));
            }

            if let Some(format) = cell.format {
                self.deferred.push(Request::RepeatCell(RepeatCellRequest {
                    range: GridRange::column_data(sheet_id, cell.index),
                    cell: CellData {
                        user_entered_format: Some(CellFormat {
                            number_format: Some(NumberFormatSpec {
                                format_type: format.format_type(),
                                pattern: format.pattern(),
                            }),
                            ..CellFormat::default()
                        }),
                        ..CellData::default()
                    },
                    fields: "userEnteredFormat.numberFormat".to_string(),
                }));
            }

            if !cell.validation.is_empty() {
                self.deferred
                    .push(Request::SetDataValidation(SetDataValidationRequest {
                        range: GridRange::column_data(sheet_id, cell.index),
                        rule: DataValidationRule {
                            condition: BooleanCondition {
                                condition_type: "ONE_OF_LIST",
                                values: cell
                                    .validation
                                    .split(',')
                                    .map(|value| ConditionValue {
                                        user_entered_value: value.trim().to_string(),
                                    })
                                    .collect(),
                            },
                            strict: false,
                            show_custom_ui: true,
                        },
                    }));
            }
        }

        self.requests.push(Request::AddBanding(AddBandingRequest {
            banded_range: BandedRange {
                range: GridRange {
                    sheet_id,
                    start_row_index: Some(0),
                    end_row_index: None,
                    start_column_index: Some(0),
                    end_column_index: Some(column_count),
                },
                row_properties: BandingProperties {
                    header_color: sheet.tab_color.color(),
                    first_band_color: SheetColor::White.color(),
                    second_band_color: sheet.cell_color.color(),
                },
            },
        }));

        let protected = if sheet.protect_sheet {
            GridRange::whole_sheet(sheet_id)
        } else {
            GridRange::header_row(sheet_id, column_count)
        };
        self.requests
            .push(Request::AddProtectedRange(AddProtectedRangeRequest {
                protected_range: ProtectedRange {
                    range: protected,
                    description: Some(sheet.name.clone()),
                    warning_only: true,
                },
            }));
    }
}

/// Build one header cell: literal name or formula, bold always, thick
/// borders on formula cells when the sheet is not fully protected
fn header_cell(cell: &SheetCell, sheet_protected: bool) -> CellData {
    let value = if cell.has_formula() {
        ExtendedValue::FormulaValue(cell.formula.clone())
    } else {
        ExtendedValue::StringValue(cell.name.clone())
    };

    let borders = if cell.has_formula() && !sheet_protected {
        Some(Borders::thick())
    } else {
        None
    };

    CellData {
        user_entered_value: Some(value),
        user_entered_format: Some(CellFormat {
            text_format: Some(TextFormat { bold: true }),
            borders,
            ..CellFormat::default()
        }),
        note: if cell.note.is_empty() {
            None
        } else {
            Some(cell.note.clone())
        },
    }
}
