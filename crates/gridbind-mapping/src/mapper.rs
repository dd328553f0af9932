//! Row mapper
//!
//! Bidirectional transformation between a sheet's raw value grid and
//! typed entity lists. Mapping is driven entirely by header-name lookup,
//! so reordering the sheet's columns does not change the result.

use gridbind_core::CellValue;
use log::debug;

use crate::header_index::HeaderIndex;
use crate::schema::RowEntity;

/// Map a raw value grid to a list of entities
///
/// Rows whose first cell is blank are dropped. The first retained row is
/// the header row; every later row becomes one entity. Rows shorter than
/// the header are treated as padded with nulls. `row_id` is the 1-based
/// position among retained rows, with the header row counting as 1, so
/// the first data row gets row-id 2.
pub fn map_from_range_data<E: RowEntity>(grid: &[Vec<CellValue>]) -> Vec<E> {
    let retained: Vec<&Vec<CellValue>> = grid
        .iter()
        .filter(|row| !row.first().map_or(true, CellValue::is_blank))
        .collect();

    let Some((header_row, data_rows)) = retained.split_first() else {
        return Vec::new();
    };

    let index = HeaderIndex::build(header_row);
    debug!(
        "mapping {} data rows against {} header columns",
        data_rows.len(),
        index.len()
    );

    let mut entities = Vec::with_capacity(data_rows.len());
    for (offset, row) in data_rows.iter().enumerate() {
        let mut entity = E::default();
        for entry in E::schema() {
            if let Some(position) = index.position(entry.header) {
                // Short rows pad with nulls past their extent
                let cell = row.get(position).unwrap_or(&CellValue::Null);
                entity.set(entry.header, cell);
            }
        }
        let meta = entity.meta_mut();
        meta.row_id = (offset + 2) as u32;
        meta.saved = true;
        entities.push(entity);
    }
    entities
}

/// Map one entity to a raw row in the given header order
///
/// Headers with no matching schema entry emit a null cell, so the row
/// stays aligned with whatever column order the live sheet has.
pub fn map_to_row_data<E: RowEntity>(entity: &E, headers: &[String]) -> Vec<CellValue> {
    headers
        .iter()
        .map(|header| match E::schema_entry(header.trim()) {
            Some(entry) => entity.get(entry.header),
            None => CellValue::Null,
        })
        .collect()
}

/// Map a list of entities to a raw grid in the given header order
pub fn map_to_range_data<E: RowEntity>(entities: &[E], headers: &[String]) -> Vec<Vec<CellValue>> {
    entities
        .iter()
        .map(|entity| map_to_row_data(entity, headers))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{self, FieldType};
    use crate::schema::{ColumnSchema, RowMeta};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Trip {
        date: Option<NaiveDate>,
        pay: Decimal,
        miles: i64,
        paid_out: bool,
        meta: RowMeta,
    }

    impl RowEntity for Trip {
        fn schema() -> &'static [ColumnSchema] {
            const SCHEMA: &[ColumnSchema] = &[
                ColumnSchema::input("Date", FieldType::DateTime),
                ColumnSchema::input("Pay", FieldType::Currency),
                ColumnSchema::input("Miles", FieldType::Integer),
                ColumnSchema::input("Paid Out", FieldType::Boolean),
            ];
            SCHEMA
        }

        fn get(&self, header: &str) -> CellValue {
            match header {
                "Date" => CellValue::String(convert::date_display(self.date)),
                "Pay" => CellValue::Number(self.pay.to_f64().unwrap_or(0.0)),
                "Miles" => CellValue::Number(self.miles as f64),
                "Paid Out" => CellValue::Bool(self.paid_out),
                _ => CellValue::Null,
            }
        }

        fn set(&mut self, header: &str, value: &CellValue) {
            match header {
                "Date" => self.date = convert::date_value(value),
                "Pay" => self.pay = convert::currency_value(value),
                "Miles" => self.miles = convert::int_value(value),
                "Paid Out" => self.paid_out = convert::bool_value(value),
                _ => {}
            }
        }

        fn meta(&self) -> &RowMeta {
            &self.meta
        }

        fn meta_mut(&mut self) -> &mut RowMeta {
            &mut self.meta
        }
    }

    fn grid(rows: &[&[&str]]) -> Vec<Vec<CellValue>> {
        rows.iter()
            .map(|row| row.iter().map(|c| CellValue::from(*c)).collect())
            .collect()
    }

    #[test]
    fn test_pipeline_scenario() {
        let grid = grid(&[
            &["Date", "Pay"],
            &["2025-11-01", "100"],
            &["2025-11-05", "200"],
        ]);
        let trips: Vec<Trip> = map_from_range_data(&grid);

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].date, NaiveDate::from_ymd_opt(2025, 11, 1));
        assert_eq!(trips[0].pay, Decimal::new(100, 0));
        assert_eq!(trips[0].meta.row_id, 2);
        assert!(trips[0].meta.saved);
        assert_eq!(trips[1].date, NaiveDate::from_ymd_opt(2025, 11, 5));
        assert_eq!(trips[1].pay, Decimal::new(200, 0));
        assert_eq!(trips[1].meta.row_id, 3);
    }

    #[test]
    fn test_blank_rows_skipped_but_counted_after_header() {
        let grid = grid(&[
            &["", "noise"],
            &["Date", "Pay"],
            &["2025-11-01", "100"],
            &["", ""],
            &["2025-11-05", "200"],
        ]);
        let trips: Vec<Trip> = map_from_range_data(&grid);

        // Blank rows are dropped before numbering, so the ids stay dense.
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].meta.row_id, 2);
        assert_eq!(trips[1].meta.row_id, 3);
    }

    #[test]
    fn test_ragged_rows_pad_with_defaults() {
        let grid = grid(&[
            &["Date", "Pay", "Miles", "Paid Out"],
            &["2025-11-01"],
            &["2025-11-05", "50", "12"],
        ]);
        let trips: Vec<Trip> = map_from_range_data(&grid);

        assert_eq!(trips[0].pay, Decimal::ZERO);
        assert_eq!(trips[0].miles, 0);
        assert!(!trips[0].paid_out);
        assert_eq!(trips[1].pay, Decimal::new(50, 0));
        assert_eq!(trips[1].miles, 12);
    }

    #[test]
    fn test_column_order_irrelevant() {
        let forward = grid(&[
            &["Date", "Pay", "Miles", "Paid Out"],
            &["2025-11-01", "100", "12", "TRUE"],
        ]);
        let shuffled = grid(&[
            &["Paid Out", "Miles", "Date", "Pay"],
            &["TRUE", "12", "2025-11-01", "100"],
        ]);

        let a: Vec<Trip> = map_from_range_data(&forward);
        let b: Vec<Trip> = map_from_range_data(&shuffled);
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_cells_degrade_to_defaults() {
        let grid = grid(&[
            &["Date", "Pay", "Miles", "Paid Out"],
            &["garbage", "not-money", "n/a", "maybe"],
        ]);
        let trips: Vec<Trip> = map_from_range_data(&grid);

        assert_eq!(trips[0].date, None);
        assert_eq!(trips[0].pay, Decimal::ZERO);
        assert_eq!(trips[0].miles, 0);
        assert!(!trips[0].paid_out);
    }

    #[test]
    fn test_empty_grid() {
        let trips: Vec<Trip> = map_from_range_data(&[]);
        assert!(trips.is_empty());

        let only_blanks = grid(&[&["", ""], &[""]]);
        let trips: Vec<Trip> = map_from_range_data(&only_blanks);
        assert!(trips.is_empty());
    }

    #[test]
    fn test_map_to_row_data_follows_header_order() {
        let trip = Trip {
            date: NaiveDate::from_ymd_opt(2025, 11, 1),
            pay: Decimal::new(100, 0),
            miles: 12,
            paid_out: true,
            meta: RowMeta::default(),
        };

        let headers: Vec<String> = ["Pay", "Unknown", "Date"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let row = map_to_row_data(&trip, &headers);

        assert_eq!(
            row,
            vec![
                CellValue::Number(100.0),
                CellValue::Null,
                CellValue::String("2025-11-01".into()),
            ]
        );
    }

    #[test]
    fn test_round_trip() {
        let headers: Vec<String> = ["Date", "Pay", "Miles", "Paid Out"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let original = vec![
            Trip {
                date: NaiveDate::from_ymd_opt(2025, 11, 1),
                pay: Decimal::new(10050, 2),
                miles: 12,
                paid_out: true,
                meta: RowMeta {
                    row_id: 2,
                    saved: true,
                    ..RowMeta::default()
                },
            },
            Trip {
                date: NaiveDate::from_ymd_opt(2025, 11, 5),
                pay: Decimal::new(200, 0),
                miles: 0,
                paid_out: false,
                meta: RowMeta {
                    row_id: 3,
                    saved: true,
                    ..RowMeta::default()
                },
            },
        ];

        let mut grid = vec![headers.iter().map(|h| CellValue::from(h.clone())).collect()];
        grid.extend(map_to_range_data(&original, &headers));

        let mapped: Vec<Trip> = map_from_range_data(&grid);
        assert_eq!(mapped, original);
    }
}
