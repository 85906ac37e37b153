pub use intsets_error::*;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Ошибки установки логирования.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid logging config: {0}")]
    InvalidConfig(String),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}
