//! Base-26 column-letter codec
//!
//! Spreadsheet columns are addressed by letters: A-Z, then AA-ZZ, and so
//! on. The encoding is base-26 with 1-indexed digits, so there is no zero
//! digit and "AA" follows "Z".

use crate::error::{Error, Result};

/// Highest column index the codec accepts (Sheets grid limit)
pub const MAX_COLUMN_INDEX: u32 = 18_277; // "ZZZ"

/// Convert a 0-based column index to letters (0 = A, 25 = Z, 26 = AA, ...)
pub fn column_to_letters(index: u32) -> String {
    let mut result = String::new();
    let mut n = index + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Convert column letters to a 0-based index (A = 0, Z = 25, AA = 26, ...)
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidColumnLetters("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumnLetters(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }

    let col = col - 1; // Convert to 0-based

    if col > MAX_COLUMN_INDEX {
        return Err(Error::ColumnOutOfBounds(col, MAX_COLUMN_INDEX));
    }

    Ok(col)
}
