use std::io;

use tracing::{info, warn};

use crate::config::Config;
use crate::datahub::DatasetHubClient;
use crate::error::Result;
use crate::normalize;
use crate::output;
use crate::summary::Summary;
use crate::synthetic;

/// The whole pipeline: acquire (with synthetic fallback) → normalize →
/// serialize → summarize. Only normalize and serialize failures escape.
pub async fn run(config: Config) -> Result<()> {
    info!("Bitcoin historical data loader");

    let client = DatasetHubClient::new(&config.hub);
    let table = match client.download_table(&config.hub.dataset).await {
        Ok(table) => table,
        Err(e) => {
            warn!("Error loading dataset: {}", e);
            warn!("Falling back to sample data");
            synthetic::sample_table(&mut rand::thread_rng())
        }
    };

    info!("Processing {} rows", table.row_count());
    let records = normalize::normalize(table)?;

    output::write_json(&records, &config.output_path)?;

    if let Some(summary) = Summary::compute(&records) {
        summary.write(&mut io::stdout())?;
    }

    info!("Data loading complete");
    Ok(())
}
