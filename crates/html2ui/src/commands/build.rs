//! Batch build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use html2ui_batch::BatchBuilder;

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: &Path, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Converting pages...");

    let config = load_config(config_path)?.batch_config(input, output)?;
    let result = BatchBuilder::new(config).build().await?;

    tracing::info!(
        "Converted {} documents with {} components in {}ms",
        result.documents,
        result.components,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
