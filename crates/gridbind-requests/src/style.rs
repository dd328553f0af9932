//! Colors and cell format patterns
//!
//! The palette the sheet models draw from, plus the number-format pattern
//! attached to each declared cell format type. The backend takes colors
//! as float RGB components in 0.0..=1.0.

use gridbind_core::label::{LabelCache, Labeled};
use serde::Serialize;

/// Float RGB color as the backend's API expects it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorSpec {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl ColorSpec {
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Build from 8-bit channels
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            red: r as f32 / 255.0,
            green: g as f32 / 255.0,
            blue: b as f32 / 255.0,
        }
    }
}

/// Named colors used for tabs, headers, and banding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetColor {
    #[default]
    White,
    Black,
    Blue,
    Cyan,
    Green,
    LightBlue,
    LightGreen,
    LightYellow,
    Magenta,
    Orange,
    Purple,
    Red,
    Yellow,
}

impl SheetColor {
    /// The backend color components for this name
    pub fn color(&self) -> ColorSpec {
        match self {
            SheetColor::White => ColorSpec::from_rgb(255, 255, 255),
            SheetColor::Black => ColorSpec::from_rgb(0, 0, 0),
            SheetColor::Blue => ColorSpec::from_rgb(63, 81, 181),
            SheetColor::Cyan => ColorSpec::from_rgb(0, 188, 212),
            SheetColor::Green => ColorSpec::from_rgb(76, 175, 80),
            SheetColor::LightBlue => ColorSpec::from_rgb(207, 226, 243),
            SheetColor::LightGreen => ColorSpec::from_rgb(217, 234, 211),
            SheetColor::LightYellow => ColorSpec::from_rgb(255, 249, 196),
            SheetColor::Magenta => ColorSpec::from_rgb(233, 30, 99),
            SheetColor::Orange => ColorSpec::from_rgb(255, 152, 0),
            SheetColor::Purple => ColorSpec::from_rgb(156, 39, 176),
            SheetColor::Red => ColorSpec::from_rgb(244, 67, 54),
            SheetColor::Yellow => ColorSpec::from_rgb(255, 235, 59),
        }
    }

    /// Case-insensitive parse of a color name
    pub fn parse(text: &str) -> Option<Self> {
        SHEET_COLOR_LABELS.parse(text)
    }
}

impl Labeled for SheetColor {
    fn label(&self) -> &'static str {
        match self {
            SheetColor::White => "White",
            SheetColor::Black => "Black",
            SheetColor::Blue => "Blue",
            SheetColor::Cyan => "Cyan",
            SheetColor::Green => "Green",
            SheetColor::LightBlue => "Light Blue",
            SheetColor::LightGreen => "Light Green",
            SheetColor::LightYellow => "Light Yellow",
            SheetColor::Magenta => "Magenta",
            SheetColor::Orange => "Orange",
            SheetColor::Purple => "Purple",
            SheetColor::Red => "Red",
            SheetColor::Yellow => "Yellow",
        }
    }

    fn variants() -> &'static [Self] {
        &[
            SheetColor::White,
            SheetColor::Black,
            SheetColor::Blue,
            SheetColor::Cyan,
            SheetColor::Green,
            SheetColor::LightBlue,
            SheetColor::LightGreen,
            SheetColor::LightYellow,
            SheetColor::Magenta,
            SheetColor::Orange,
            SheetColor::Purple,
            SheetColor::Red,
            SheetColor::Yellow,
        ]
    }
}

static SHEET_COLOR_LABELS: LabelCache<SheetColor> = LabelCache::new();

/// Display format attached to a sheet column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellFormatType {
    /// `$#,##0.00`
    Currency,
    /// `yyyy-mm-dd`
    Date,
    /// `hh:mm:ss`
    Time,
    /// `[h]:mm:ss` elapsed time, can exceed 24 hours
    Duration,
    /// `0`
    Integer,
    /// `#,##0.00`
    Number,
    /// `0.00%`
    Percent,
    /// `@` plain text
    Text,
}

impl CellFormatType {
    /// The backend number-format category
    pub fn format_type(&self) -> &'static str {
        match self {
            CellFormatType::Currency => "CURRENCY",
            CellFormatType::Date => "DATE",
            CellFormatType::Time => "TIME",
            CellFormatType::Duration => "TIME",
            CellFormatType::Integer => "NUMBER",
            CellFormatType::Number => "NUMBER",
            CellFormatType::Percent => "PERCENT",
            CellFormatType::Text => "TEXT",
        }
    }

    /// The number-format pattern string
    pub fn pattern(&self) -> &'static str {
        match self {
            CellFormatType::Currency => "$#,##0.00",
            CellFormatType::Date => "yyyy-mm-dd",
            CellFormatType::Time => "hh:mm:ss",
            CellFormatType::Duration => "[h]:mm:ss",
            CellFormatType::Integer => "0",
            CellFormatType::Number => "#,##0.00",
            CellFormatType::Percent => "0.00%",
            CellFormatType::Text => "@",
        }
    }
}
