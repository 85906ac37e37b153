use std::{any::Any, io};

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибка нижележащего reader/writer, переданная вызывающему без изменений.
#[derive(Debug, Error)]
#[error("I/O error: {source}")]
pub struct IoError {
    #[from]
    source: io::Error,
}

impl IoError {
    /// Вид исходной ошибки.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

impl ErrorExt for IoError {
    fn status_code(&self) -> StatusCode {
        match self.source.kind() {
            io::ErrorKind::NotFound => StatusCode::NotFound,
            io::ErrorKind::PermissionDenied => StatusCode::PermissionDenied,
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => StatusCode::Timeout,
            io::ErrorKind::Interrupted => StatusCode::Interrupted,
            io::ErrorKind::UnexpectedEof => StatusCode::UnexpectedEof,
            _ => StatusCode::Io,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
