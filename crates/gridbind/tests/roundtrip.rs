//! Property tests: mapping survives arbitrary column reordering

mod common;

use chrono::{Duration, NaiveDate};
use common::Trip;
use gridbind::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn trip_strategy() -> impl Strategy<Value = Trip> {
    (0i64..=2_000_000, 0i64..=500, any::<bool>(), 0i64..=2000).prop_map(
        |(cents, miles, paid_out, day_offset)| Trip {
            date: NaiveDate::from_ymd_opt(2024, 1, 1)
                .map(|d| d + Duration::days(day_offset)),
            pay: Decimal::new(cents, 2),
            miles,
            paid_out,
            meta: RowMeta::default(),
        },
    )
}

fn permutation() -> impl Strategy<Value = Vec<usize>> {
    Just((0..Trip::schema().len()).collect::<Vec<usize>>()).prop_shuffle()
}

proptest! {
    /// Mapping entities to a grid and back yields the same entities for
    /// any column order, as long as header and data share the order.
    #[test]
    fn round_trip_under_column_permutation(
        trips in proptest::collection::vec(trip_strategy(), 1..8),
        perm in permutation(),
    ) {
        let declared: Vec<&str> = Trip::schema().iter().map(|e| e.header).collect();
        let headers: Vec<String> = perm.iter().map(|&i| declared[i].to_string()).collect();

        let mut grid: Vec<Vec<CellValue>> =
            vec![headers.iter().map(|h| CellValue::from(h.clone())).collect()];
        grid.extend(map_to_range_data(&trips, &headers));

        let mapped: Vec<Trip> = map_from_range_data(&grid);

        let expected: Vec<Trip> = trips
            .iter()
            .enumerate()
            .map(|(i, trip)| {
                let mut t = trip.clone();
                t.meta.row_id = (i + 2) as u32;
                t.meta.saved = true;
                t
            })
            .collect();

        prop_assert_eq!(mapped, expected);
    }

    /// Column letters are unique and round-trip through the decoder.
    #[test]
    fn column_letters_bijective(index in 0u32..10_000) {
        let letters = column_to_letters(index);
        prop_assert_eq!(letters_to_column(&letters).unwrap(), index);
    }
}
