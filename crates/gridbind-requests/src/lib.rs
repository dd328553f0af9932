//! # gridbind-requests
//!
//! Declarative sheet definitions and the generator that turns them into
//! the ordered structural request batch a spreadsheet backend applies in
//! one `batchUpdate` call.
//!
//! - [`SheetModel`] / [`SheetCell`] - the declarative schema for one tab
//! - [`style`] - color palette and per-type cell format patterns
//! - [`requests`] - typed, serde-serializable request shapes
//! - [`RequestBatch`] - the one-shot generator, ordered per sheet

pub mod generator;
pub mod model;
pub mod requests;
pub mod style;

pub use generator::RequestBatch;
pub use model::{SheetCell, SheetModel};
pub use requests::Request;
pub use style::{CellFormatType, SheetColor};
