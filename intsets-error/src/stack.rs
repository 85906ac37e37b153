use std::{fmt, io, panic::Location, sync::Arc};

use crate::{ErrorExt, FormatError, IoError, StatusCode};

/// Ошибка операции над множеством вместе с цепочкой контекстов.
///
/// Корневая ошибка хранится как `Arc<dyn ErrorExt>`, а каждый
/// [`context`](StackError::context) добавляет сообщение и место вызова.
#[derive(Clone)]
pub struct StackError {
    inner: Arc<dyn ErrorExt>,
    contexts: Vec<ErrorContext>,
}

#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub message: String,
    pub location: &'static Location<'static>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl StackError {
    pub fn new<E: ErrorExt>(err: E) -> Self {
        Self {
            inner: Arc::new(err),
            contexts: Vec::new(),
        }
    }

    /// Добавляет контекст к ошибке.
    #[track_caller]
    pub fn context(
        mut self,
        msg: impl Into<String>,
    ) -> Self {
        self.contexts.push(ErrorContext {
            message: msg.into(),
            location: Location::caller(),
        });
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.inner.status_code()
    }

    /// Контексты в порядке добавления.
    pub fn contexts(&self) -> &[ErrorContext] {
        &self.contexts
    }

    /// Downcast корневой ошибки к конкретному типу.
    pub fn downcast_ref<T: ErrorExt>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для StackError
////////////////////////////////////////////////////////////////////////////////

impl fmt::Debug for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let contexts: Vec<String> = self
            .contexts
            .iter()
            .map(|c| format!("{} ({}:{})", c.message, c.location.file(), c.location.line()))
            .collect();
        f.debug_struct("StackError")
            .field("inner", &self.inner.to_string())
            .field("status_code", &self.status_code())
            .field("contexts", &contexts)
            .finish()
    }
}

impl fmt::Display for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for ctx in self.contexts.iter().rev() {
            write!(f, "{}: ", ctx.message)?;
        }
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for StackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl<E: ErrorExt> From<E> for StackError {
    fn from(e: E) -> Self {
        StackError::new(e)
    }
}

/// Вид `io::Error` берётся из корневой ошибки.
impl From<StackError> for io::Error {
    fn from(e: StackError) -> Self {
        let kind = if let Some(io) = e.downcast_ref::<IoError>() {
            io.kind()
        } else if let Some(format) = e.downcast_ref::<FormatError>() {
            format.io_kind()
        } else {
            io::ErrorKind::Other
        };
        io::Error::new(kind, e.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;

    /// Корневая ошибка, которая не относится ни к IO, ни к формату.
    #[derive(Debug, thiserror::Error)]
    #[error("custom root")]
    struct CustomRoot;

    impl ErrorExt for CustomRoot {
        fn status_code(&self) -> StatusCode {
            StatusCode::Io
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    /// Тест проверяет, что внешний контекст печатается первым.
    #[test]
    fn test_context_chain_display() {
        let err = FormatError::unexpected_eof("element count", 0);
        let stack = StackError::new(err)
            .context("decode set")
            .context("load column ids");

        assert_eq!(stack.contexts().len(), 2);
        assert_eq!(stack.contexts()[0].message, "decode set");
        assert!(stack.contexts()[0].location.file().ends_with("stack.rs"));
        assert!(stack
            .to_string()
            .starts_with("load column ids: decode set: Unexpected end of input"));
    }

    #[test]
    fn test_downcast() {
        let stack = StackError::new(FormatError::NegativeMember { value: -4 });

        assert!(matches!(
            stack.downcast_ref::<FormatError>(),
            Some(FormatError::NegativeMember { value: -4 })
        ));
        assert!(stack.downcast_ref::<IoError>().is_none());
    }

    #[test]
    fn test_into_io_error() {
        let stack = StackError::new(FormatError::NegativeMember { value: -1 });
        let io: io::Error = stack.into();
        assert_eq!(io.kind(), io::ErrorKind::InvalidInput);
        assert!(io.to_string().contains("-1"));

        let stack: StackError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        let io: io::Error = stack.context("encode").into();
        assert_eq!(io.kind(), io::ErrorKind::BrokenPipe);

        let io: io::Error = StackError::new(CustomRoot).into();
        assert_eq!(io.kind(), io::ErrorKind::Other);
    }
}
