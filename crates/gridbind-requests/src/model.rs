//! Declarative sheet model
//!
//! One [`SheetModel`] describes everything needed to materialize a tab:
//! ordered columns, colors, protection, and freeze settings. Models are
//! built fresh by pure constructor functions per domain sheet and are not
//! mutated after construction, except for `id`, which is assigned at
//! generation time as the per-batch correlation handle.

use gridbind_core::column_to_letters;
use rand::Rng;

use crate::style::{CellFormatType, SheetColor};

/// One column of a sheet definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCell {
    /// Header label
    pub name: String,
    /// 0-based column position
    pub index: u32,
    /// Letter form of `index`, kept in sync by [`SheetModel::update_columns`]
    pub column_letter: String,
    /// Formula filling the column; empty means a plain data column
    pub formula: String,
    /// Display format applied to the column's data rows
    pub format: Option<CellFormatType>,
    /// Whether the column gets its own warning-only protection
    pub protect: bool,
    /// Comma-separated allowed values; empty means no validation
    pub validation: String,
    /// Note attached to the header cell
    pub note: String,
}

impl SheetCell {
    /// A plain data column
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            index: 0,
            column_letter: "A".to_string(),
            formula: String::new(),
            format: None,
            protect: false,
            validation: String::new(),
            note: String::new(),
        }
    }

    /// Set the formula computing this column
    pub fn with_formula<S: Into<String>>(mut self, formula: S) -> Self {
        self.formula = formula.into();
        self
    }

    /// Set the display format
    pub fn with_format(mut self, format: CellFormatType) -> Self {
        self.format = Some(format);
        self
    }

    /// Mark the column protected (warning-only)
    pub fn protected(mut self) -> Self {
        self.protect = true;
        self
    }

    /// Restrict the column to a list of allowed values
    pub fn with_validation<S: Into<String>>(mut self, values: S) -> Self {
        self.validation = values.into();
        self
    }

    /// Attach a note to the header cell
    pub fn with_note<S: Into<String>>(mut self, note: S) -> Self {
        self.note = note.into();
        self
    }

    /// Whether the column is computed by a formula
    pub fn has_formula(&self) -> bool {
        !self.formula.is_empty()
    }
}

/// Declarative definition of one spreadsheet tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetModel {
    /// Backend sheet id; 0 until assigned by [`ensure_id`](Self::ensure_id)
    pub id: i32,
    /// Tab title
    pub name: String,
    /// Ordered columns
    pub headers: Vec<SheetCell>,
    /// Tab and banding-header color
    pub tab_color: SheetColor,
    /// Second banding color
    pub cell_color: SheetColor,
    /// Protect the whole sheet (warning-only) instead of just the header row
    pub protect_sheet: bool,
    /// Leading columns to freeze
    pub freeze_column_count: u32,
    /// Leading rows to freeze; 1 keeps the header visible
    pub freeze_row_count: u32,
}

impl SheetModel {
    /// A new model with no columns, header row frozen
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            id: 0,
            name: name.into(),
            headers: Vec::new(),
            tab_color: SheetColor::Blue,
            cell_color: SheetColor::LightBlue,
            protect_sheet: false,
            freeze_column_count: 0,
            freeze_row_count: 1,
        }
    }

    /// Append a column, assigning the next index and column letter
    pub fn add_column(&mut self, mut cell: SheetCell) {
        let index = self.headers.len() as u32;
        cell.index = index;
        cell.column_letter = column_to_letters(index);
        self.headers.push(cell);
    }

    /// Append several columns in order
    pub fn add_columns<I: IntoIterator<Item = SheetCell>>(&mut self, cells: I) {
        for cell in cells {
            self.add_column(cell);
        }
    }

    /// Recompute every column's index and letter from its list position
    ///
    /// Required after any insert/remove or after composing the header list
    /// from shared groups, so letters stay contiguous and gap-free.
    pub fn update_columns(&mut self) {
        for (index, cell) in self.headers.iter_mut().enumerate() {
            cell.index = index as u32;
            cell.column_letter = column_to_letters(index as u32);
        }
    }

    /// Assign a random positive id if none has been set yet
    ///
    /// The id correlates every generated request for this sheet within a
    /// batch. An id set beforehand (a known backend id during repair) is
    /// kept.
    pub fn ensure_id(&mut self) -> i32 {
        if self.id == 0 {
            self.id = rand::thread_rng().gen_range(1..i32::MAX);
        }
        self.id
    }

    /// Header labels in column order
    pub fn header_names(&self) -> Vec<&str> {
        self.headers.iter().map(|cell| cell.name.as_str()).collect()
    }

    /// Number of columns
    pub fn column_count(&self) -> u32 {
        self.headers.len() as u32
    }

    /// Find a column by header name
    pub fn column(&self, name: &str) -> Option<&SheetCell> {
        self.headers.iter().find(|cell| cell.name == name)
    }

    /// A1 range covering `row_count` data rows under the header
    pub fn data_range(&self, row_count: u32) -> String {
        let last_letter = column_to_letters(self.column_count().saturating_sub(1));
        format!("{}!A2:{}{}", self.name, last_letter, row_count + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn model_with(names: &[&str]) -> SheetModel {
        let mut model = SheetModel::new("Trips");
        model.add_columns(names.iter().copied().map(SheetCell::new));
        model
    }

    #[test]
    fn test_add_column_assigns_letters() {
        let model = model_with(&["Date", "Pay", "Miles"]);
        assert_eq!(model.headers[0].column_letter, "A");
        assert_eq!(model.headers[1].column_letter, "B");
        assert_eq!(model.headers[2].column_letter, "C");
        assert_eq!(model.headers[2].index, 2);
    }

    #[test]
    fn test_update_columns_after_removal() {
        let mut model = model_with(&["Date", "Pay", "Miles"]);
        model.headers.remove(1);
        model.update_columns();

        assert_eq!(model.headers[1].name, "Miles");
        assert_eq!(model.headers[1].index, 1);
        assert_eq!(model.headers[1].column_letter, "B");
    }

    #[test]
    fn test_update_columns_past_z() {
        let names: Vec<String> = (0..30).map(|i| format!("Col{}", i)).collect();
        let mut model = SheetModel::new("Wide");
        model.add_columns(names.iter().cloned().map(SheetCell::new));

        assert_eq!(model.headers[25].column_letter, "Z");
        assert_eq!(model.headers[26].column_letter, "AA");
        assert_eq!(model.headers[29].column_letter, "AD");
    }

    #[test]
    fn test_ensure_id_sticks_and_respects_existing() {
        let mut model = model_with(&["Date"]);
        let id = model.ensure_id();
        assert!(id > 0);
        assert_eq!(model.ensure_id(), id);

        let mut repaired = model_with(&["Date"]);
        repaired.id = 1234;
        assert_eq!(repaired.ensure_id(), 1234);
    }

    #[test]
    fn test_data_range() {
        let model = model_with(&["Date", "Pay", "Miles"]);
        assert_eq!(model.data_range(10), "Trips!A2:C11");
    }

    #[test]
    fn test_sheet_cell_builders() {
        let cell = SheetCell::new("Total")
            .with_formula("=SUM(B2:B)")
            .with_format(CellFormatType::Currency)
            .protected()
            .with_note("computed");

        assert!(cell.has_formula());
        assert!(cell.protect);
        assert_eq!(cell.format, Some(CellFormatType::Currency));
        assert_eq!(cell.note, "computed");
    }
}
