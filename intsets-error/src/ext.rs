use std::{any::Any, error::Error};

use crate::{StackError, StatusCode};

/// Корневая ошибка, которую может нести [`StackError`].
pub trait ErrorExt: Error + Send + Sync + 'static {
    fn status_code(&self) -> StatusCode;

    /// Нужен для [`StackError::downcast_ref`].
    fn as_any(&self) -> &dyn Any;
}

/// Добавляет к ошибке `Result` контекст с местом вызова.
pub trait ResultExt<T> {
    fn context<C>(
        self,
        ctx: C,
    ) -> Result<T, StackError>
    where
        C: Into<String>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<StackError>,
{
    #[track_caller]
    fn context<C>(
        self,
        ctx: C,
    ) -> Result<T, StackError>
    where
        C: Into<String>,
    {
        self.map_err(|e| e.into().context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::{FormatError, IntSetResult};

    fn short_write() -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"))
    }

    #[test]
    fn test_context_wraps_io_error() {
        fn encode() -> IntSetResult<()> {
            short_write().context("write element")?;
            Ok(())
        }

        let err = encode().unwrap_err();
        assert_eq!(err.status_code(), StatusCode::Io);
        assert_eq!(err.contexts().len(), 1);
        assert_eq!(err.contexts()[0].message, "write element");
        assert!(err.to_string().starts_with("write element: "));
    }

    #[test]
    fn test_context_keeps_format_root() {
        let res: Result<(), FormatError> = Err(FormatError::malformed("bad", 2));
        let err = res.context("decode set").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::ParseError);
        assert_eq!(err.downcast_ref::<FormatError>().and_then(FormatError::offset), Some(2));
    }
}
