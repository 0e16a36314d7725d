//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter for the
//! whole process.
//!
//! ## Configuration
//!
//! - `RUST_LOG` wins when set (`RUST_LOG=catalog_browser=debug`).
//! - Otherwise the `logging.level` value from the configuration is used.
//! - Output goes to stderr; stdout is reserved for the rendered catalog.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup with the catalog size, shutdown with open sessions
//! - **Session events**: open, query updates, basket changes and close, with
//!   `session_id` and counts as structured fields
//! - **Rejections**: sold-out or unknown products at `warn`
//! - **Client calls**: one span per [`SessionClient`](crate::clients::SessionClient) method
//!
//! With `RUST_LOG=debug` the full request payloads appear in the client spans:
//!
//! ```text
//! DEBUG set_search_term{id=SessionId(1) text="lamp"}:update{id=SessionId(1) update=SessionUpdate { search_term: Some("lamp"), .. }}: Sending request
//! INFO Query updated session_id=session_1 search_term=lamp sort_key=AtoZ stock_only=false visible=1
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths
        .compact()
        .init();
}
