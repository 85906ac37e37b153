//! `intsets`: sets of `i64` with a dense bitmap fast path.
//!
//! [`FastIntSet`] keeps the values `0..CUTOFF` in an inline bitmap and
//! everything else in a sorted overflow collection. Small sets of column
//! ordinals or object IDs never allocate.
//!
//! ```
//! use intsets::FastIntSet;
//!
//! let mut cols = FastIntSet::new();
//! cols.add_range(1, 4);
//! cols.add(200);
//! assert_eq!(cols.to_string(), "(1-4,200)");
//!
//! let bytes = cols.to_bytes().unwrap();
//! assert_eq!(FastIntSet::from_reader(&mut bytes.as_slice()).unwrap(), cols);
//! ```

/// Settings loading (`INTSETS_*` environment variables).
pub mod config;
/// Error types: status codes, error stack, codec errors.
pub mod error;
/// The set, its algebra, iteration, codec and text form.
pub mod intset;
/// `tracing` subscriber setup.
pub mod logging;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Settings.
pub use self::config::Settings;
/// Errors and result types.
pub use error::{FormatError, IntSetResult, LoggingError, StackError, StatusCode};
/// The set and its codec limits.
pub use intset::{DecodeLimits, FastIntSet, Iter, CUTOFF};
/// Logging setup.
pub use logging::{init_logging, LogFormat, LoggingConfig, LoggingHandle};
