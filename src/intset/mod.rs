mod algebra;
pub mod codec;
mod dense;
mod fast_set;
mod format;
pub mod iter;
mod serde_impl;
pub mod varint;

pub use codec::DecodeLimits;
pub use dense::CUTOFF;
pub use fast_set::FastIntSet;
pub use iter::Iter;
pub use varint::{read_uvarint, uvarint_size, write_uvarint, MAX_VARINT_LEN};
