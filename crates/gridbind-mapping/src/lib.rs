//! # gridbind-mapping
//!
//! Schema-driven, bidirectional mapping between typed row entities and the
//! untyped cell grids a spreadsheet backend serves.
//!
//! The pieces, leaf-first:
//! - [`HeaderIndex`] - position↔label lookup built from a sheet's first row
//! - [`convert`] - typed field converter with defined fallback defaults
//! - [`ColumnSchema`] / [`RowEntity`] - per-field metadata declared once in
//!   a static table, consulted by both directions of mapping
//! - [`mapper`] - grid → entity list and entity list → grid
//! - [`validator`] - actual header row vs expected schema diagnostics
//!
//! A malformed cell never fails a mapping call; it degrades to the field
//! type's default. Schema problems are reported separately as
//! [`Message`](gridbind_core::Message) lists by the validator.

pub mod convert;
pub mod header_index;
pub mod mapper;
pub mod schema;
pub mod validator;

pub use convert::FieldType;
pub use header_index::HeaderIndex;
pub use mapper::{map_from_range_data, map_to_range_data, map_to_row_data};
pub use schema::{ColumnSchema, RowAction, RowEntity, RowMeta};
pub use validator::{check_sheet_header_cells, check_sheet_headers};
