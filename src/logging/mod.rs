//! Установка глобального `tracing` subscriber'а.
//!
//! Библиотека сама ничего не печатает: события декодера и кодировщика видны
//! только после [`init_logging`] (или после установки своего subscriber'а).

pub mod config;
mod filters;
mod formatter;
pub mod handle;

pub use config::{LogFormat, LoggingConfig};
pub use handle::LoggingHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::LoggingError;

/// Инициализация логирования с конфигурацией.
///
/// Повторный вызов (или вызов после установки другого глобального
/// subscriber'а) возвращает ошибку.
pub fn init_logging(
    mut config: LoggingConfig
) -> Result<LoggingHandle, LoggingError> {
    config.apply_env_overrides();
    config.validate().map_err(LoggingError::InvalidConfig)?;

    let env_filter = filters::build_filter_from_config(&config);
    let fmt_layer = formatter::build_formatter_from_config(config.format, config.ansi);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        log_format = %config.format,
        "Logging system initialized"
    );

    Ok(LoggingHandle::new(
        config.build_filter_directive(),
        config.format,
    ))
}
