//! Structural request shapes
//!
//! Typed counterparts of the backend's `batchUpdate` request union,
//! serialized with camelCase keys so a batch can be posted as-is. Only
//! the operations the generator emits are modeled.

use serde::Serialize;

use crate::style::ColorSpec;

/// One structural operation against the spreadsheet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    AddSheet(AddSheetRequest),
    AppendDimension(AppendDimensionRequest),
    AppendCells(AppendCellsRequest),
    RepeatCell(RepeatCellRequest),
    SetDataValidation(SetDataValidationRequest),
    AddBanding(AddBandingRequest),
    AddProtectedRange(AddProtectedRangeRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSheetRequest {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    pub sheet_id: i32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_properties: Option<GridProperties>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen_row_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen_column_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendDimensionRequest {
    pub sheet_id: i32,
    /// `COLUMNS` or `ROWS`
    pub dimension: &'static str,
    pub length: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendCellsRequest {
    pub sheet_id: i32,
    pub rows: Vec<RowData>,
    /// Field mask for the written cell parts
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowData {
    pub values: Vec<CellData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_entered_value: Option<ExtendedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_entered_format: Option<CellFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The `oneof` value a written cell carries
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtendedValue {
    StringValue(String),
    NumberValue(f64),
    BoolValue(bool),
    FormulaValue(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_format: Option<TextFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<NumberFormatSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borders: Option<Borders>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFormat {
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormatSpec {
    #[serde(rename = "type")]
    pub format_type: &'static str,
    pub pattern: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Borders {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Border>,
}

impl Borders {
    /// Thick solid border on all four edges
    pub fn thick() -> Self {
        let edge = Some(Border {
            style: "SOLID_THICK",
        });
        Self {
            top: edge,
            bottom: edge,
            left: edge,
            right: edge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    pub style: &'static str,
}

/// Half-open grid rectangle; absent bounds extend to the sheet edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    pub sheet_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_row_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_row_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column_index: Option<u32>,
}

impl GridRange {
    /// The whole sheet
    pub fn whole_sheet(sheet_id: i32) -> Self {
        Self {
            sheet_id,
            ..Self::default()
        }
    }

    /// One column's data rows: everything below the header row
    pub fn column_data(sheet_id: i32, column: u32) -> Self {
        Self {
            sheet_id,
            start_row_index: Some(1),
            end_row_index: None,
            start_column_index: Some(column),
            end_column_index: Some(column + 1),
        }
    }

    /// The header row across the first `column_count` columns
    pub fn header_row(sheet_id: i32, column_count: u32) -> Self {
        Self {
            sheet_id,
            start_row_index: Some(0),
            end_row_index: Some(1),
            start_column_index: Some(0),
            end_column_index: Some(column_count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatCellRequest {
    pub range: GridRange,
    pub cell: CellData,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDataValidationRequest {
    pub range: GridRange,
    pub rule: DataValidationRule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataValidationRule {
    pub condition: BooleanCondition,
    pub strict: bool,
    pub show_custom_ui: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanCondition {
    #[serde(rename = "type")]
    pub condition_type: &'static str,
    pub values: Vec<ConditionValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionValue {
    pub user_entered_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBandingRequest {
    pub banded_range: BandedRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandedRange {
    pub range: GridRange,
    pub row_properties: BandingProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandingProperties {
    pub header_color: ColorSpec,
    pub first_band_color: ColorSpec,
    pub second_band_color: ColorSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProtectedRangeRequest {
    pub protected_range: ProtectedRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedRange {
    pub range: GridRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Editors are warned, never blocked
    pub warning_only: bool,
}
