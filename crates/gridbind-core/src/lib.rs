//! # gridbind-core
//!
//! Foundation types for the gridbind mapping library.
//!
//! This crate provides the types shared by every other gridbind crate:
//! - [`CellValue`] - The closed sum of raw values a grid cell can hold
//! - [`column_to_letters`] / [`letters_to_column`] - Base-26 column codec
//! - [`Message`] and [`ValidationResult`] - Diagnostics as data
//! - [`Labeled`] - Enum-variant label registry with case-insensitive parse
//!
//! ## Example
//!
//! ```rust
//! use gridbind_core::{column_to_letters, CellValue};
//!
//! assert_eq!(column_to_letters(27), "AB");
//!
//! let cell = CellValue::from("  hello  ");
//! assert_eq!(cell.as_str(), Some("  hello  "));
//! ```

pub mod column;
pub mod error;
pub mod label;
pub mod message;
pub mod value;

// Re-exports for convenience
pub use column::{column_to_letters, letters_to_column};
pub use error::{Error, Result};
pub use label::Labeled;
pub use message::{Message, MessageLevel, ValidationResult};
pub use value::CellValue;

/// Default number of columns a freshly created sheet has
pub const DEFAULT_COLUMN_COUNT: usize = 26;

/// Default number of rows a freshly created sheet has
pub const DEFAULT_ROW_COUNT: usize = 1_000;
