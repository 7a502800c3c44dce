//! Crate-wide error re-exports.
//!
//! Most fallible surfaces define their own small error enum next to the
//! code that raises it (`cipher::PaddingError`, `codec::DecodeError`,
//! `codec::BufferLengthMismatch`); this module only re-exports them at
//! the crate root so callers don't need to remember which submodule a
//! given error type lives in.

pub use crate::cipher::PaddingError;
pub use crate::codec::{BufferLengthMismatch, DecodeError};
