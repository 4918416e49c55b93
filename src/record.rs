use serde::{Deserialize, Serialize};

/// One calendar day of market data, in the shape the front-end chart reads.
///
/// Field order matters: it is the order the keys appear in the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub market_cap: f64,
}

impl PriceRecord {
    /// All six price/volume fields plus the derived cap are finite numbers.
    pub fn is_finite(&self) -> bool {
        [
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.market_cap,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
