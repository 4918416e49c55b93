use std::path::PathBuf;

use crate::constants::{DATAHUB_URL, DATASET_SLUG, OUTPUT_PATH};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub hub: HubConfig,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct HubConfig {
    pub base_url: String,
    pub dataset: String,
    pub username: Option<String>,
    pub key: Option<String>,
}

impl Config {
    /// Every setting carries an embedded default, so the tool runs with
    /// nothing set. Environment variables (and a `.env` file) override.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let base_url =
            std::env::var("BTC_HUB_URL").unwrap_or_else(|_| DATAHUB_URL.to_string());
        let dataset =
            std::env::var("BTC_DATASET").unwrap_or_else(|_| DATASET_SLUG.to_string());
        let username = std::env::var("DATAHUB_USERNAME").ok();
        let key = std::env::var("DATAHUB_KEY").ok();
        let output_path = std::env::var("BTC_OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(OUTPUT_PATH));

        if key.is_some() && username.is_none() {
            return Err(Error::Config(
                "DATAHUB_KEY is set but DATAHUB_USERNAME is not".into(),
            ));
        }

        Ok(Config {
            hub: HubConfig {
                base_url,
                dataset,
                username,
                key,
            },
            output_path,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hub: HubConfig::default(),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: DATAHUB_URL.to_string(),
            dataset: DATASET_SLUG.to_string(),
            username: None,
            key: None,
        }
    }
}
