use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use crate::{
    intset::DecodeLimits,
    logging::{LogFormat, LoggingConfig},
};

/// Префикс переменных окружения (`INTSETS_LOG_LEVEL`, ...).
pub const ENV_PREFIX: &str = "INTSETS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub log_level: String,
    pub log_format: LogFormat,
    /// Лимит кол-ва элементов при декодировании.
    pub max_decode_elements: u64,
}

impl Settings {
    /// Значения по умолчанию, переопределённые переменными `INTSETS_*`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Значения по умолчанию, переопределённые источником `env`.
    pub fn load_from(env: Environment) -> Result<Self, ConfigError> {
        let defaults = DecodeLimits::default();
        let cfg = Config::builder()
            // Добавляем значения по умолчанию
            .set_default("log_level", "info")?
            .set_default("log_format", LogFormat::default().to_string())?
            .set_default("max_decode_elements", defaults.max_elements)?
            .add_source(env)
            .build()?;

        // Десериализуем конфигурацию в нашу структуру
        let settings: Settings = cfg.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_decode_elements == 0 {
            return Err(ConfigError::Message(
                "max_decode_elements must be positive".into(),
            ));
        }
        self.logging_config().validate().map_err(ConfigError::Message)
    }

    pub fn decode_limits(&self) -> DecodeLimits {
        DecodeLimits::new(self.max_decode_elements)
    }

    /// Конфигурация логирования. Цвета включены.
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            ..Default::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            max_decode_elements: DecodeLimits::default().max_elements,
        }
    }
}
