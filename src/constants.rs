use chrono::NaiveDate;

/// Dataset hub REST base.
pub const DATAHUB_URL: &str = "https://www.kaggle.com/api/v1";

/// Dataset slug on the hub: owner/dataset.
pub const DATASET_SLUG: &str = "mczielinski/bitcoin-historical-data";

/// Where the front-end expects the JSON artifact.
pub const OUTPUT_PATH: &str = "public/data/bitcoin-historical.json";

/// Circulating supply used to derive market cap from a close price.
pub const CIRCULATING_SUPPLY: f64 = 19_000_000.0;

/// Starting price level for the synthetic series (early-2020 BTC).
pub const SAMPLE_BASE_PRICE: f64 = 8_000.0;

/// Hard floor under the simulated price.
pub const SAMPLE_PRICE_FLOOR: f64 = 3_000.0;

/// First day covered by the synthetic sample and by generated timestamp
/// defaults.
pub fn sample_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid calendar date")
}

/// Last day covered by the synthetic sample (inclusive).
pub fn sample_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid calendar date")
}
