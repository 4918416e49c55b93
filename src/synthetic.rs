use rand::Rng;

use crate::constants::{
    sample_end, sample_start, CIRCULATING_SUPPLY, SAMPLE_BASE_PRICE, SAMPLE_PRICE_FLOOR,
};
use crate::normalize::SCHEMA;
use crate::table::{Cell, DataTable};

/// Build the fallback dataset: one row per calendar day from 2020-01-01
/// through 2024-12-31, already in canonical column order.
///
/// The shape is deterministic; the values are not. Callers that need a
/// reproducible table pass a seeded rng.
pub fn sample_table<R: Rng>(rng: &mut R) -> DataTable {
    let columns = SCHEMA.iter().map(|c| c.canonical.to_string()).collect();
    let mut table = DataTable::new(columns);

    let end = sample_end();
    for (i, day) in sample_start()
        .iter_days()
        .take_while(|d| *d <= end)
        .enumerate()
    {
        let trend = i as f64 * 15.0;
        let cycle = (i as f64 * 0.01).sin() * 10_000.0;
        let noise = (rng.gen::<f64>() - 0.5) * 5_000.0;

        let price = (SAMPLE_BASE_PRICE + trend + cycle + noise).max(SAMPLE_PRICE_FLOOR);

        // High and low are independent offsets around the simulated price;
        // they are not clamped against open/close.
        let open = price - (rng.gen::<f64>() * 1_000.0 - 500.0);
        let high = price + rng.gen::<f64>() * 2_000.0;
        let low = price - rng.gen::<f64>() * 2_000.0;
        let close = price;
        let volume = 15_000_000_000.0 + rng.gen::<f64>() * 10_000_000_000.0;
        let market_cap = close * CIRCULATING_SUPPLY;

        table.push_row(vec![
            Cell::Text(day.format("%Y-%m-%d").to_string()),
            Cell::Number(open),
            Cell::Number(high),
            Cell::Number(low),
            Cell::Number(close),
            Cell::Number(volume),
            Cell::Number(market_cap),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(seed: u64) -> DataTable {
        let mut rng = StdRng::seed_from_u64(seed);
        sample_table(&mut rng)
    }

    fn timestamps(table: &DataTable) -> Vec<NaiveDate> {
        (0..table.row_count())
            .map(|i| {
                let text = table.cell(i, "timestamp").unwrap().as_text();
                NaiveDate::parse_from_str(&text, "%Y-%m-%d").unwrap()
            })
            .collect()
    }

    #[test]
    fn covers_the_full_range_without_gaps_or_duplicates() {
        let table = generate(1);
        assert_eq!(table.row_count(), 1827);

        let dates = timestamps(&table);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(*dates.last().unwrap(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        for pair in dates.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn columns_match_the_canonical_schema_order() {
        let table = generate(2);
        let expected: Vec<&str> = SCHEMA.iter().map(|c| c.canonical).collect();
        assert_eq!(table.columns(), expected.as_slice());
    }

    #[test]
    fn values_respect_the_generator_bounds() {
        let table = generate(3);
        for i in 0..table.row_count() {
            let close = table.cell(i, "close").unwrap().to_f64().unwrap();
            let open = table.cell(i, "open").unwrap().to_f64().unwrap();
            let high = table.cell(i, "high").unwrap().to_f64().unwrap();
            let low = table.cell(i, "low").unwrap().to_f64().unwrap();
            let volume = table.cell(i, "volume").unwrap().to_f64().unwrap();
            let cap = table.cell(i, "market_cap").unwrap().to_f64().unwrap();

            assert!(close >= SAMPLE_PRICE_FLOOR);
            assert!((open - close).abs() <= 500.0);
            assert!(high >= close && high < close + 2_000.0);
            assert!(low > close - 2_000.0 && low <= close);
            assert!((15_000_000_000.0..25_000_000_000.0).contains(&volume));
            assert_eq!(cap, close * CIRCULATING_SUPPLY);
        }
    }

    #[test]
    fn ohlc_ordering_is_not_promised() {
        // Accepted generator property: high/low bracket the simulated price,
        // not the open, so `low <= open <= high` can be violated. Assert that
        // it actually happens rather than papering over it.
        let table = generate(4);
        let mut crossings = 0usize;
        for i in 0..table.row_count() {
            let open = table.cell(i, "open").unwrap().to_f64().unwrap();
            let high = table.cell(i, "high").unwrap().to_f64().unwrap();
            let low = table.cell(i, "low").unwrap().to_f64().unwrap();
            if open > high || open < low {
                crossings += 1;
            }
        }
        assert!(crossings > 0);
    }

    #[test]
    fn same_seed_reproduces_the_table() {
        let a = generate(42);
        let b = generate(42);
        for i in 0..a.row_count() {
            assert_eq!(a.cell(i, "close"), b.cell(i, "close"));
            assert_eq!(a.cell(i, "volume"), b.cell(i, "volume"));
        }
    }
}
