//! # Catalog Browser
//!
//! Terminal front end for the product catalog.
//!
//! ```bash
//! # Run with the bundled catalog and info logs
//! cargo run
//!
//! # Use a config file and debug logs
//! RUST_LOG=debug cargo run -- catalog-browser.toml
//! ```
//!
//! Type `help` at the prompt for the command list.

use std::path::PathBuf;
use std::sync::Arc;

use catalog_browser::catalog::{Catalog, CatalogQuery};
use catalog_browser::clients::ActorClient;
use catalog_browser::config::{BrowserConfig, LoadOptions};
use catalog_browser::error::BrowserError;
use catalog_browser::lifecycle::{setup_tracing, BrowserSystem};
use catalog_browser::terminal;
use tokio::io::BufReader;
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> Result<(), BrowserError> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = BrowserConfig::load(LoadOptions {
        require_file: config_path.is_some(),
        config_path,
    })?;

    // Setup tracing once for the entire application
    setup_tracing(&config.logging.level);

    let catalog = Arc::new(Catalog::load(&config.catalog.path)?);
    info!(
        products = catalog.len(),
        asset_dir = %config.catalog.asset_dir.display(),
        "Starting catalog browser"
    );

    let system = BrowserSystem::new(Arc::clone(&catalog), config.session.channel_capacity);
    let client = system.session_client.clone();

    let session = client
        .open_session(CatalogQuery::sorted_by(config.session.default_sort))
        .await?;

    let span = info_span!("session", session_id = %session);
    terminal::run(
        &client,
        session,
        &catalog,
        &config.catalog.asset_dir,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .instrument(span)
    .await?;

    client.close_session(session).await?;
    drop(client);
    system.shutdown().await?;

    info!("Catalog browser exited");
    Ok(())
}
