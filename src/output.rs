use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::record::PriceRecord;

/// Write the collection as a 2-space-indented JSON array, creating any
/// missing parent directories first. An existing file is overwritten. Both
/// the directory creation and the write are fatal on failure.
pub fn write_json(records: &[PriceRecord], path: &Path) -> Result<()> {
    info!("Saving data to {}", path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;

    info!("Data saved successfully, {} records written", records.len());
    Ok(())
}
