use super::config::LogFormat;

/// Handle, описывающий установленный глобальный subscriber.
///
/// Subscriber живёт до конца процесса, handle только сообщает, с какими
/// параметрами он был собран.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingHandle {
    directive: String,
    format: LogFormat,
}

impl LoggingHandle {
    pub fn new(
        directive: String,
        format: LogFormat,
    ) -> Self {
        Self { directive, format }
    }

    /// Директива фильтра из конфигурации (без учёта `RUST_LOG`).
    pub fn directive(&self) -> &str {
        &self.directive
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }
}
