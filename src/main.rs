//! Switchboard - Main entry point
//!
//! Loads the department dataset, builds the search index, and serves
//! the JSON/HTTP boundary. Startup is strictly ordered: no request is
//! accepted before the index is fully built and published.

use anyhow::{Context, Result};
use std::sync::Arc;
use switchboard::search::{IndexHandle, SearchIndex, TokenIndex};
use switchboard::services::DirectoryServiceImpl;
use switchboard::{loader, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (stderr only)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Load the dataset and build the index before binding the listener.
    // Any fault here aborts startup; there is no partial service.
    let departments = loader::load_from_path(&config.dataset_path)
        .with_context(|| format!("loading dataset from {}", config.dataset_path))?;
    info!("Loaded {} departments", departments.len());

    let index: Arc<dyn SearchIndex> = Arc::new(TokenIndex::build(departments));
    let handle = IndexHandle::new(index);
    let service = Arc::new(DirectoryServiceImpl::new(handle));

    info!(
        "Search index built; suggested client debounce window: {} ms",
        config.debounce_wait_ms
    );

    switchboard::server::run_server(config.bind_addr, service).await
}
