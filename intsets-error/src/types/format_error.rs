use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки байтового формата множества.
///
/// `Malformed` и `UnexpectedEof` различаются намеренно: первая означает, что
/// байты структурно неверны, вторая означает, что поток закончился посреди значения.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Структурно неверные данные.
    #[error("Malformed set encoding: {reason}{}", fmt_offset(.offset))]
    Malformed {
        reason: String,
        offset: Option<u64>,
    },

    /// Поток закончился раньше, чем значение было прочитано целиком.
    #[error("Unexpected end of input while reading {context}{}", fmt_offset(.offset))]
    UnexpectedEof {
        context: String,
        offset: Option<u64>,
    },

    /// Заявленный размер превышает лимит декодера.
    #[error("{what} {size} exceeds limit {limit}")]
    SizeLimit { what: String, size: u64, limit: u64 },

    /// Отрицательные элементы не имеют байтового представления.
    #[error("Cannot encode negative member {value}")]
    NegativeMember { value: i64 },
}

impl FormatError {
    pub fn malformed(
        reason: impl Into<String>,
        offset: u64,
    ) -> Self {
        Self::Malformed {
            reason: reason.into(),
            offset: Some(offset),
        }
    }

    pub fn unexpected_eof(
        context: impl Into<String>,
        offset: u64,
    ) -> Self {
        Self::UnexpectedEof {
            context: context.into(),
            offset: Some(offset),
        }
    }

    /// Смещение в байтах от начала закодированного множества, если известно.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Self::Malformed { offset, .. } | Self::UnexpectedEof { offset, .. } => *offset,
            _ => None,
        }
    }

    /// Вид `io::Error`, которым ошибка отдаётся через `io::Read`/`io::Write`.
    pub fn io_kind(&self) -> std::io::ErrorKind {
        match self {
            Self::UnexpectedEof { .. } => std::io::ErrorKind::UnexpectedEof,
            Self::Malformed { .. } => std::io::ErrorKind::InvalidData,
            Self::SizeLimit { .. } | Self::NegativeMember { .. } => std::io::ErrorKind::InvalidInput,
        }
    }

    /// `true` для обрезанного ввода.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}

fn fmt_offset(offset: &Option<u64>) -> String {
    match offset {
        Some(o) => format!(" [offset: 0x{o:X}]"),
        None => String::new(),
    }
}

impl ErrorExt for FormatError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Malformed { .. } => StatusCode::ParseError,
            Self::UnexpectedEof { .. } => StatusCode::UnexpectedEof,
            Self::SizeLimit { .. } => StatusCode::SizeLimit,
            Self::NegativeMember { .. } => StatusCode::EncodingError,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<FormatError> for std::io::Error {
    fn from(e: FormatError) -> Self {
        std::io::Error::new(e.io_kind(), e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Тест проверяет, что смещение попадает в текст ошибки в hex-виде.
    #[test]
    fn test_display_with_offset() {
        let e = FormatError::malformed("varint too long", 26);
        assert_eq!(
            e.to_string(),
            "Malformed set encoding: varint too long [offset: 0x1A]"
        );
        assert_eq!(e.offset(), Some(26));

        let e = FormatError::UnexpectedEof {
            context: "element".to_string(),
            offset: None,
        };
        assert_eq!(e.to_string(), "Unexpected end of input while reading element");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            FormatError::malformed("x", 0).status_code(),
            StatusCode::ParseError
        );
        assert_eq!(
            FormatError::unexpected_eof("x", 0).status_code(),
            StatusCode::UnexpectedEof
        );
        assert_eq!(
            FormatError::NegativeMember { value: -1 }.status_code(),
            StatusCode::EncodingError
        );
        assert!(FormatError::unexpected_eof("x", 0).is_truncation());
        assert!(!FormatError::malformed("x", 0).is_truncation());
    }

    #[test]
    fn test_into_io_error_kind() {
        let io: std::io::Error = FormatError::unexpected_eof("count", 0).into();
        assert_eq!(io.kind(), std::io::ErrorKind::UnexpectedEof);
        let io: std::io::Error = FormatError::malformed("bad", 1).into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
    }
}
