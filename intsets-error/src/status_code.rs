use std::fmt;

/// Коды статуса ошибок множества.
///
/// # Диапазоны:
/// - 6xxx: ввод-вывод нижележащего reader/writer
/// - 8xxx: байтовый формат множества
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    // === 6xxx: IO ===
    Io = 6000,
    PermissionDenied = 6001,
    Timeout = 6002,
    Interrupted = 6003,
    NotFound = 6004,
    UnexpectedEof = 6007,

    // === 8xxx: Формат ===
    SizeLimit = 8007,
    ParseError = 8009,
    EncodingError = 8010,
}

impl StatusCode {
    /// Числовое представление кода статуса.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Ошибка в самих байтах или в кодируемом множестве.
    pub fn is_format_error(&self) -> bool {
        (8000..=8999).contains(&self.code())
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}
