use std::{env, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Переменная окружения с уровнем логирования.
pub const ENV_LOG_LEVEL: &str = "INTSETS_LOG_LEVEL";
/// Переменная окружения с форматом вывода.
pub const ENV_LOG_FORMAT: &str = "INTSETS_LOG_FORMAT";

/// Формат вывода событий.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Конфигурация логирования.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Уровень (`info`) или полная директива `EnvFilter` (`intsets=trace,warn`).
    pub level: String,
    pub format: LogFormat,
    /// Цветной вывод в консоль.
    pub ansi: bool,
}

impl LoggingConfig {
    /// Переопределяет поля из `INTSETS_LOG_LEVEL` и `INTSETS_LOG_FORMAT`.
    ///
    /// Нераспознанный формат игнорируется с предупреждением в stderr.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| env::var(key).ok());
    }

    /// То же, что [`apply_env_overrides`](Self::apply_env_overrides), но
    /// значения берутся из `lookup`.
    pub fn apply_overrides_from<F>(
        &mut self,
        lookup: F,
    ) where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            if !level.trim().is_empty() {
                self.level = level.trim().to_string();
            }
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            match format.parse() {
                Ok(f) => self.format = f,
                Err(e) => eprintln!("Ignoring {ENV_LOG_FORMAT}: {e}"),
            }
        }
    }

    /// Проверяет, что `level` является корректной директивой фильтра.
    pub fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("log level must not be empty".to_string());
        }
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("invalid log level '{}': {e}", self.level))
    }

    /// Директива для `EnvFilter`.
    pub fn build_filter_directive(&self) -> String {
        self.level.trim().to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            ansi: true,
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" Pretty ".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert_eq!("COMPACT".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_validate() {
        assert!(LoggingConfig::default().validate().is_ok());

        let cfg = LoggingConfig {
            level: "intsets=trace,warn".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());

        let cfg = LoggingConfig {
            level: "   ".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = LoggingConfig {
            level: "intsets=notalevel".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    /// Тест проверяет переопределение полей из переменных окружения.
    #[test]
    fn test_apply_overrides() {
        let vars: HashMap<&str, &str> =
            [(ENV_LOG_LEVEL, " debug "), (ENV_LOG_FORMAT, "json")].into();
        let mut cfg = LoggingConfig::default();
        cfg.apply_overrides_from(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.level, "debug");
        assert_eq!(cfg.format, LogFormat::Json);

        let vars: HashMap<&str, &str> = [(ENV_LOG_LEVEL, ""), (ENV_LOG_FORMAT, "yaml")].into();
        let mut cfg = LoggingConfig::default();
        cfg.apply_overrides_from(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg, LoggingConfig::default());
    }
}
