//! Application setup and initialization

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use picshelf_core::Config;
use picshelf_db::LedgerRepository;
use picshelf_processing::{ImagePipeline, ImageTransformer, MediaValidator};
use picshelf_storage::LocalStorage;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    picshelf_infra::init_telemetry(config.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment,
        upload_dir = %config.upload_dir.display(),
        metadata_file = %config.metadata_file.display(),
        "Configuration loaded and validated successfully"
    );

    let state = build_state(config.clone()).await?;
    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}

/// Create storage directories and the ledger, and assemble the shared state.
pub async fn build_state(config: Config) -> Result<Arc<AppState>> {
    let storage = LocalStorage::new(config.upload_dir.clone(), config.thumbnail_dir())
        .await
        .context("Failed to prepare upload directories")?;

    let ledger = LedgerRepository::new(config.metadata_file.clone());
    ledger
        .ensure_initialized()
        .await
        .context("Failed to initialize ledger")?;

    let pipeline = ImagePipeline::new(ImageTransformer::new(
        config.max_image_dimension,
        config.thumbnail_size,
    ));
    let validator = MediaValidator::new(config.max_file_size_bytes, config.max_files_per_upload);

    Ok(Arc::new(AppState {
        config,
        storage: Arc::new(storage),
        ledger,
        pipeline,
        validator,
    }))
}
