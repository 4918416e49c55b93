use chrono::Days;
use tracing::warn;

use crate::constants::{sample_start, CIRCULATING_SUPPLY};
use crate::error::{Error, Result};
use crate::record::PriceRecord;
use crate::table::{Cell, DataTable};

/// How a canonical column is filled when the source table does not provide it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnDefault {
    /// Sequential calendar dates starting 2020-01-01, one per row.
    SequentialDates,
    /// The same constant for every row.
    Constant(f64),
    /// `close * CIRCULATING_SUPPLY`, derived per row at record conversion.
    CloseTimesSupply,
}

/// One canonical output column: its name, the source spellings it absorbs,
/// and what to do when no source column matches.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub default: ColumnDefault,
}

/// The whole output schema, in record field order. Source columns matching no
/// alias are never read; they cannot leak into the output.
pub const SCHEMA: [ColumnSpec; 7] = [
    ColumnSpec {
        canonical: "timestamp",
        aliases: &["Date"],
        default: ColumnDefault::SequentialDates,
    },
    ColumnSpec {
        canonical: "open",
        aliases: &["Open"],
        default: ColumnDefault::Constant(0.0),
    },
    ColumnSpec {
        canonical: "high",
        aliases: &["High"],
        default: ColumnDefault::Constant(0.0),
    },
    ColumnSpec {
        canonical: "low",
        aliases: &["Low"],
        default: ColumnDefault::Constant(0.0),
    },
    ColumnSpec {
        canonical: "close",
        aliases: &["Close"],
        default: ColumnDefault::Constant(0.0),
    },
    ColumnSpec {
        canonical: "volume",
        aliases: &["Volume"],
        default: ColumnDefault::Constant(0.0),
    },
    ColumnSpec {
        canonical: "market_cap",
        aliases: &[],
        default: ColumnDefault::CloseTimesSupply,
    },
];

/// Rename recognized source spellings onto their canonical names.
/// Idempotent: a column already carrying a canonical name is left alone.
pub fn apply_aliases(table: &mut DataTable) {
    for spec in &SCHEMA {
        if table.has_column(spec.canonical) {
            continue;
        }
        for alias in spec.aliases {
            if table.rename_column(alias, spec.canonical) {
                break;
            }
        }
    }
}

/// Fill canonical columns still missing after aliasing, per their declared
/// default. Derived columns are left to record conversion, which runs after
/// their inputs are coerced.
pub fn fill_missing(table: &mut DataTable) {
    for spec in &SCHEMA {
        if table.has_column(spec.canonical) {
            continue;
        }
        match spec.default {
            ColumnDefault::SequentialDates => {
                warn!("missing column '{}', generating a date range", spec.canonical);
                let start = sample_start();
                table.add_column_with(spec.canonical, |i, _| {
                    let day = start + Days::new(i as u64);
                    Cell::Text(day.format("%Y-%m-%d").to_string())
                });
            }
            ColumnDefault::Constant(value) => {
                warn!("missing column '{}', defaulting to {}", spec.canonical, value);
                table.add_column_with(spec.canonical, |_, _| Cell::Number(value));
            }
            ColumnDefault::CloseTimesSupply => {}
        }
    }
}

/// Convert each row to a `PriceRecord`: timestamp cast to string, every
/// numeric field coerced to f64, market cap derived from close when the
/// source carries no such column. Coercion failures are fatal.
pub fn to_records(table: &DataTable) -> Result<Vec<PriceRecord>> {
    let timestamp = require_column(table, "timestamp")?;
    let open = require_column(table, "open")?;
    let high = require_column(table, "high")?;
    let low = require_column(table, "low")?;
    let close = require_column(table, "close")?;
    let volume = require_column(table, "volume")?;
    let market_cap = table.column_index("market_cap");

    let mut records = Vec::with_capacity(table.row_count());
    for row in table.rows() {
        let close_value = row[close].to_f64()?;
        let cap_value = match market_cap {
            Some(idx) => row[idx].to_f64()?,
            None => close_value * CIRCULATING_SUPPLY,
        };
        records.push(PriceRecord {
            timestamp: row[timestamp].as_text(),
            open: row[open].to_f64()?,
            high: row[high].to_f64()?,
            low: row[low].to_f64()?,
            close: close_value,
            volume: row[volume].to_f64()?,
            market_cap: cap_value,
        });
    }

    Ok(records)
}

/// Full normalization: alias, fill, convert. After this, every record carries
/// all seven fields or the pipeline has died with a conversion error.
pub fn normalize(mut table: DataTable) -> Result<Vec<PriceRecord>> {
    apply_aliases(&mut table);
    fill_missing(&mut table);
    to_records(&table)
}

fn require_column(table: &DataTable, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| Error::Dataset(format!("missing canonical column '{}'", name)))
}
