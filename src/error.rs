//! Top-level error for the binary and the lifecycle layer.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::session_actor::SessionError;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("actor task failed: {0}")]
    Shutdown(String),
}
