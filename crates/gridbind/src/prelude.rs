//! Commonly used imports
//!
//! ```rust
//! use gridbind::prelude::*;
//! ```

pub use gridbind_core::{
    column_to_letters, letters_to_column, CellValue, Message, MessageLevel, ValidationResult,
};
pub use gridbind_mapping::{
    check_sheet_header_cells, check_sheet_headers, convert, map_from_range_data,
    map_to_range_data, map_to_row_data, ColumnSchema, FieldType, HeaderIndex, RowAction,
    RowEntity, RowMeta,
};
pub use gridbind_requests::{CellFormatType, Request, RequestBatch, SheetCell, SheetColor, SheetModel};

pub use crate::client::{Grid, SheetsClient, SpreadsheetInfo};
pub use crate::manager::SheetManager;
