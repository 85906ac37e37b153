use tracing_subscriber::EnvFilter;

use crate::logging::config::LoggingConfig;

/// Фильтр из `RUST_LOG`, если переменная задана, иначе из конфигурации.
pub fn build_filter_from_config(config: &LoggingConfig) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => filter_from_directive(&config.build_filter_directive()),
    }
}

/// Некорректная директива заменяется на `info`.
pub(crate) fn filter_from_directive(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Invalid log filter directive ('{directive}'): {e}; falling back to 'info'");
        EnvFilter::new("info")
    })
}
