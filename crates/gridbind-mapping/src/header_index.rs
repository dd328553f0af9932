//! Header row index
//!
//! Built once per sheet read from row 0 of the value grid, then consulted
//! by every column accessor. Labels are stored trimmed; duplicates are
//! allowed and lookups return the first match.

use gridbind_core::CellValue;

/// Position↔label lookup over a sheet's header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIndex {
    labels: Vec<String>,
}

impl HeaderIndex {
    /// Build the index from a raw header row
    ///
    /// Each cell's text form is trimmed; null/empty cells map to the empty
    /// string. No uniqueness is enforced.
    pub fn build(row: &[CellValue]) -> Self {
        Self {
            labels: row
                .iter()
                .map(|cell| cell.display_text().trim().to_string())
                .collect(),
        }
    }

    /// Find the first position whose label equals `label` (trimmed,
    /// case-sensitive)
    ///
    /// `None` means "column absent"; callers skip the column rather than
    /// fail.
    pub fn position(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        self.labels.iter().position(|l| l == label)
    }

    /// Case-insensitive variant of [`position`](Self::position), for
    /// callers matching user-typed labels against the header row
    pub fn position_ci(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        self.labels
            .iter()
            .position(|l| l.eq_ignore_ascii_case(label))
    }

    /// The label at a position, if in range
    pub fn label_at(&self, position: usize) -> Option<&str> {
        self.labels.get(position).map(String::as_str)
    }

    /// All labels in position order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of header cells
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the header row had no cells
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(labels: &[&str]) -> Vec<CellValue> {
        labels.iter().map(|l| CellValue::from(*l)).collect()
    }

    #[test]
    fn test_build_trims_and_keeps_positions() {
        let index = HeaderIndex::build(&row(&["  Date ", "Pay", ""]));
        assert_eq!(index.len(), 3);
        assert_eq!(index.label_at(0), Some("Date"));
        assert_eq!(index.label_at(1), Some("Pay"));
        assert_eq!(index.label_at(2), Some(""));
    }

    #[test]
    fn test_null_cells_map_to_empty() {
        let index = HeaderIndex::build(&[CellValue::Null, CellValue::from("Pay")]);
        assert_eq!(index.label_at(0), Some(""));
        assert_eq!(index.position("Pay"), Some(1));
    }

    #[test]
    fn test_lookup_is_case_sensitive_and_trimmed() {
        let index = HeaderIndex::build(&row(&["Date", "Pay"]));
        assert_eq!(index.position("Pay"), Some(1));
        assert_eq!(index.position("  Pay  "), Some(1));
        assert_eq!(index.position("pay"), None);
        assert_eq!(index.position_ci("pay"), Some(1));
        assert_eq!(index.position("Missing"), None);
    }

    #[test]
    fn test_duplicate_labels_first_match_wins() {
        let index = HeaderIndex::build(&row(&["Total", "Total", "Other"]));
        assert_eq!(index.position("Total"), Some(0));
    }
}
