use std::io::{self, Write};

use crate::record::PriceRecord;

/// Descriptive statistics over the produced collection. Printed after a
/// successful write; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub first_timestamp: String,
    pub last_timestamp: String,
    pub min_close: f64,
    pub max_close: f64,
    pub mean_volume: f64,
    pub last_close: f64,
}

impl Summary {
    /// `None` for an empty collection; the reporting stage is skipped
    /// entirely rather than dividing by zero.
    pub fn compute(records: &[PriceRecord]) -> Option<Self> {
        let first = records.first()?;
        let last = records.last()?;

        let mut min_close = f64::INFINITY;
        let mut max_close = f64::NEG_INFINITY;
        let mut volume_sum = 0.0;
        for record in records {
            min_close = min_close.min(record.close);
            max_close = max_close.max(record.close);
            volume_sum += record.volume;
        }

        Some(Self {
            count: records.len(),
            first_timestamp: first.timestamp.clone(),
            last_timestamp: last.timestamp.clone(),
            min_close,
            max_close,
            mean_volume: volume_sum / records.len() as f64,
            last_close: last.close,
        })
    }

    /// Render the report to the given sink (stdout in production, a buffer in
    /// tests).
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "=== Summary Statistics ===")?;
        writeln!(out, "Total records: {}", self.count)?;
        writeln!(
            out,
            "Date range: {} to {}",
            self.first_timestamp, self.last_timestamp
        )?;
        writeln!(
            out,
            "Price range: {} to {}",
            usd(self.min_close, 2),
            usd(self.max_close, 2)
        )?;
        writeln!(out, "Average volume: {}", usd(self.mean_volume, 0))?;
        writeln!(out, "Current price: {}", usd(self.last_close, 2))?;
        Ok(())
    }
}

/// `$1,234,567.89`-style formatting.
fn usd(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("${}{}.{}", sign, grouped, f),
        None => format!("${}{}", sign, grouped),
    }
}
