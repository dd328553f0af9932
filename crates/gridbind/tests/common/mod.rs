//! Shared fixtures: a domain entity and an in-memory collaborator

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use gridbind::client::{
    AppendOutcome, BatchOutcome, Grid, SheetsClient, SpreadsheetInfo, UpdateOutcome,
};
use gridbind::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// A delivery trip, one sheet row each
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Trip {
    pub date: Option<NaiveDate>,
    pub pay: Decimal,
    pub miles: i64,
    pub paid_out: bool,
    pub meta: RowMeta,
}

impl RowEntity for Trip {
    fn schema() -> &'static [ColumnSchema] {
        const SCHEMA: &[ColumnSchema] = &[
            ColumnSchema::input("Date", FieldType::DateTime),
            ColumnSchema::input("Pay", FieldType::Currency),
            ColumnSchema::input("Miles", FieldType::Integer),
            ColumnSchema::input("Paid Out", FieldType::Boolean),
        ];
        SCHEMA
    }

    fn get(&self, header: &str) -> CellValue {
        match header {
            "Date" => CellValue::String(convert::date_display(self.date)),
            "Pay" => CellValue::Number(self.pay.to_f64().unwrap_or(0.0)),
            "Miles" => CellValue::Number(self.miles as f64),
            "Paid Out" => CellValue::Bool(self.paid_out),
            _ => CellValue::Null,
        }
    }

    fn set(&mut self, header: &str, value: &CellValue) {
        match header {
            "Date" => self.date = convert::date_value(value),
            "Pay" => self.pay = convert::currency_value(value),
            "Miles" => self.miles = convert::int_value(value),
            "Paid Out" => self.paid_out = convert::bool_value(value),
            _ => {}
        }
    }

    fn meta(&self) -> &RowMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RowMeta {
        &mut self.meta
    }
}

/// The declarative model for the Trips sheet
pub fn trips_model() -> SheetModel {
    let mut model = SheetModel::new("Trips");
    model.add_columns([
        SheetCell::new("Date").with_format(CellFormatType::Date),
        SheetCell::new("Pay").with_format(CellFormatType::Currency),
        SheetCell::new("Miles").with_format(CellFormatType::Integer),
        SheetCell::new("Paid Out"),
    ]);
    model
}

/// In-memory collaborator recording everything the manager sends it
#[derive(Default)]
pub struct InMemoryClient {
    pub grids: HashMap<String, Grid>,
    pub info: Option<SpreadsheetInfo>,
    pub appended: Mutex<Vec<(String, Grid)>>,
    pub updated: Mutex<Vec<(String, Grid)>>,
    pub batches: Mutex<Vec<Vec<Request>>>,
    /// When set, every operation reports backend failure
    pub fail: bool,
}

impl InMemoryClient {
    pub fn with_grid(sheet: &str, grid: Grid) -> Self {
        let mut client = Self::default();
        client.grids.insert(sheet.to_string(), grid);
        client
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl SheetsClient for InMemoryClient {
    async fn get_sheet_data(&self, sheet_name: &str) -> Option<Grid> {
        if self.fail {
            return None;
        }
        self.grids.get(sheet_name).cloned()
    }

    async fn get_batch_data(
        &self,
        sheet_names: &[String],
        _range: &str,
    ) -> Option<HashMap<String, Grid>> {
        if self.fail {
            return None;
        }
        let mut out = HashMap::new();
        for name in sheet_names {
            if let Some(grid) = self.grids.get(name) {
                out.insert(name.clone(), grid.clone());
            }
        }
        Some(out)
    }

    async fn get_sheet_info(&self) -> Option<SpreadsheetInfo> {
        if self.fail {
            return None;
        }
        self.info.clone()
    }

    async fn append_data(&self, rows: Grid, range: &str) -> Option<AppendOutcome> {
        if self.fail {
            return None;
        }
        let count = rows.len() as u32;
        self.appended.lock().unwrap().push((range.to_string(), rows));
        Some(AppendOutcome {
            updated_rows: count,
        })
    }

    async fn update_data(&self, rows: Grid, range: &str) -> Option<UpdateOutcome> {
        if self.fail {
            return None;
        }
        let cells: usize = rows.iter().map(Vec::len).sum();
        self.updated.lock().unwrap().push((range.to_string(), rows));
        Some(UpdateOutcome {
            updated_cells: cells as u32,
        })
    }

    async fn batch_update(&self, requests: Vec<Request>) -> Option<BatchOutcome> {
        if self.fail {
            return None;
        }
        let count = requests.len() as u32;
        self.batches.lock().unwrap().push(requests);
        Some(BatchOutcome { reply_count: count })
    }
}

/// Build a grid of string cells from string literals
pub fn grid(rows: &[&[&str]]) -> Grid {
    rows.iter()
        .map(|row| row.iter().map(|c| CellValue::from(*c)).collect())
        .collect()
}
