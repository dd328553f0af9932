//! Header validator
//!
//! Compares a sheet's actual header row against the expected column names
//! in declared order. A wholly missing column is an error; a column that
//! exists but sits at the wrong position is only a warning, since mapping
//! is order-independent and the sheet still works.

use gridbind_core::{CellValue, Message};

/// Diagnostic category used by header validation messages
pub const HEADER_CATEGORY: &str = "headers";

/// Check an actual header row against the expected names, in order
///
/// Walks both sequences in lockstep by index. For each expected name:
/// - absent anywhere in the actual row → Error `Missing column [name]`
/// - present but not at the expected index → Warning
///   `Unexpected column [found] should be [name]`
///
/// A header row identical to the expectation yields an empty list.
pub fn check_sheet_headers(actual: &[String], expected: &[&str]) -> Vec<Message> {
    let actual: Vec<&str> = actual.iter().map(|h| h.trim()).collect();
    let mut messages = Vec::new();

    for (index, name) in expected.iter().enumerate() {
        if !actual.contains(name) {
            messages.push(Message::error(
                HEADER_CATEGORY,
                format!("Missing column [{}]", name),
            ));
            continue;
        }

        let found = actual.get(index).copied().unwrap_or("");
        if found != *name {
            messages.push(Message::warning(
                HEADER_CATEGORY,
                format!("Unexpected column [{}] should be [{}]", found, name),
            ));
        }
    }

    messages
}

/// Convenience overload for a raw header row straight off the grid
pub fn check_sheet_header_cells(actual: &[CellValue], expected: &[&str]) -> Vec<Message> {
    let actual: Vec<String> = actual.iter().map(|c| c.display_text()).collect();
    check_sheet_headers(&actual, expected)
}
