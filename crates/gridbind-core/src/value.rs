//! Raw cell value type
//!
//! A grid read from the backend is untyped: every cell is a string, a
//! number, a boolean, or absent. [`CellValue`] is the closed sum of those
//! cases. It exists only at the boundary; the typed field converter turns
//! it into domain values immediately and nothing past the converter sees it.

use std::fmt;

/// The raw value held by a single grid cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent cell (outside the row's extent, or explicitly empty)
    Null,

    /// Text cell
    String(String),

    /// Numeric cell (the backend stores all numbers as f64, dates included)
    Number(f64),

    /// Boolean cell (TRUE/FALSE)
    Bool(bool),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Check whether the cell is absent or holds only whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Bool(true) => Some(1.0),
            CellValue::Bool(false) => Some(0.0),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Render the cell the way the backend displays it
    ///
    /// `Null` renders as the empty string, booleans as `TRUE`/`FALSE`.
    /// This is the form the typed field converter parses.
    pub fn display_text(&self) -> String {
        self.to_string()
    }

    /// Get the variant name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::String(_) => "string",
            CellValue::Number(_) => "number",
            CellValue::Bool(_) => "boolean",
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::string(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}
