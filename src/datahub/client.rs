use reqwest::Client as HttpClient;
use tracing::info;

use crate::config::HubConfig;
use crate::error::{Error, Result};
use crate::table::DataTable;

/// REST client for the dataset hub. One call, no retries, no timeout: this is
/// a one-shot batch tool and the caller treats every failure as recoverable.
pub struct DatasetHubClient {
    http: HttpClient,
    base_url: String,
    username: Option<String>,
    key: Option<String>,
}

impl DatasetHubClient {
    pub fn new(config: &HubConfig) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            key: config.key.clone(),
        }
    }

    /// Download a dataset and parse the body as CSV. Connection, auth,
    /// status, parse, and empty-table failures all surface as `Err` for the
    /// caller's fallback.
    pub async fn download_table(&self, dataset: &str) -> Result<DataTable> {
        let url = format!("{}/datasets/download/{}", self.base_url, dataset);
        info!("Loading dataset {} from {}", dataset, self.base_url);

        let mut request = self.http.get(&url);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.key.as_deref());
        }

        let resp = request.send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Http(format!("HTTP {}: {}", status, body)));
        }

        let body = resp.text().await?;
        let table = DataTable::from_csv(body.as_bytes())?;
        if table.is_empty() {
            return Err(Error::Dataset(format!("dataset '{}' has no rows", dataset)));
        }

        info!(
            "Dataset loaded, shape: {} rows x {} columns",
            table.row_count(),
            table.columns().len()
        );
        Ok(table)
    }
}
