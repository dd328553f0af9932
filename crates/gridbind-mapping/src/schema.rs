//! Column schema and the row-entity contract
//!
//! Each field of a row-backed entity is described once, in a static
//! registration table of [`ColumnSchema`] entries. The row mapper walks
//! that table; there is no runtime reflection. Implementing [`RowEntity`]
//! by hand keeps the table and the match arms next to the struct they
//! describe.

use gridbind_core::label::{LabelCache, Labeled};
use gridbind_core::CellValue;

use crate::convert::FieldType;

/// Per-field metadata driving conversion and mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Header label in the sheet's first row
    pub header: &'static str,
    /// Declared value type
    pub field_type: FieldType,
    /// Whether the system writes this column back (user-editable), as
    /// opposed to formula/output-only columns
    pub is_input: bool,
    /// Serialized name, when it differs from the header
    pub json_name: Option<&'static str>,
}

impl ColumnSchema {
    /// A user-editable column the system writes back
    pub const fn input(header: &'static str, field_type: FieldType) -> Self {
        Self {
            header,
            field_type,
            is_input: true,
            json_name: None,
        }
    }

    /// A formula/output-only column, read but never written back
    pub const fn output(header: &'static str, field_type: FieldType) -> Self {
        Self {
            header,
            field_type,
            is_input: false,
            json_name: None,
        }
    }

    /// Override the serialized name
    pub const fn json_name(mut self, name: &'static str) -> Self {
        self.json_name = Some(name);
        self
    }
}

/// Intended persistence operation for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowAction {
    /// No pending operation
    #[default]
    None,
    /// Row is new and should be appended
    Insert,
    /// Row exists and should be rewritten in place
    Update,
    /// Row should be removed
    Delete,
}

impl Labeled for RowAction {
    fn label(&self) -> &'static str {
        match self {
            RowAction::None => "",
            RowAction::Insert => "Insert",
            RowAction::Update => "Update",
            RowAction::Delete => "Delete",
        }
    }

    fn variants() -> &'static [Self] {
        &[
            RowAction::None,
            RowAction::Insert,
            RowAction::Update,
            RowAction::Delete,
        ]
    }
}

static ROW_ACTION_LABELS: LabelCache<RowAction> = LabelCache::new();

impl RowAction {
    /// Case-insensitive parse; unrecognized text is `None` (no pending
    /// operation), not an error
    pub fn parse(text: &str) -> Self {
        ROW_ACTION_LABELS.parse(text).unwrap_or(RowAction::None)
    }
}

/// Bookkeeping carried by every row-backed entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowMeta {
    /// 1-based sheet row number; 0 means new/unsaved
    pub row_id: u32,
    /// Intended operation for the next write
    pub action: RowAction,
    /// Whether the row currently exists in the sheet
    pub saved: bool,
}

impl RowMeta {
    /// Whether the entity has been assigned a sheet row yet
    pub fn is_new(&self) -> bool {
        self.row_id == 0
    }
}

/// A typed entity backed by one sheet row
///
/// `get`/`set` address fields by header name so the mapper can work in
/// whatever column order the live sheet has. Implementations convert with
/// the [`convert`](crate::convert) functions matching each field's
/// declared [`FieldType`]; unknown headers are ignored on `set` and yield
/// [`CellValue::Null`] on `get`.
pub trait RowEntity: Default {
    /// The entity's column registration table
    fn schema() -> &'static [ColumnSchema];

    /// Raw value for the field behind `header`
    fn get(&self, header: &str) -> CellValue;

    /// Assign the field behind `header` from a raw cell
    fn set(&mut self, header: &str, value: &CellValue);

    /// Row bookkeeping
    fn meta(&self) -> &RowMeta;

    /// Mutable row bookkeeping
    fn meta_mut(&mut self) -> &mut RowMeta;

    /// The schema entry for a header, if declared
    fn schema_entry(header: &str) -> Option<&'static ColumnSchema> {
        Self::schema().iter().find(|entry| entry.header == header)
    }

    /// Headers of the input (write-back) columns, in declared order
    fn input_headers() -> Vec<&'static str> {
        Self::schema()
            .iter()
            .filter(|entry| entry.is_input)
            .map(|entry| entry.header)
            .collect()
    }
}
