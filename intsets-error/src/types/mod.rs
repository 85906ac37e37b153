pub mod format_error;
pub mod io_error;

pub use format_error::*;
pub use io_error::*;

/// Исходная `io::Error` сохраняется целиком.
impl From<std::io::Error> for crate::StackError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        crate::StackError::new(IoError::from(err))
    }
}
