//! C6: the length-prefixed, tag-delimited wire codec for ratchet and
//! pre-key messages.
//!
//! Schema-compatible with a subset of a field-tagged, varint-based
//! serialization family: tag bytes encode `(field_number << 3 |
//! wire_type)`, with wire type `0` (varint) and `2` (length-delimited)
//! in use here. See `prekey` and `ratchet` for the two record shapes.

pub mod prekey;
pub mod ratchet;
mod varint;

use std::fmt;
use varint::{varint_decode, varint_encode, varint_len, varint_skip};

/// Caller-configurable ceiling on record size (§9's open question,
/// resolved here): the decoder refuses to scan any record whose
/// declared body length exceeds this, before interpreting a single
/// byte.
pub const DEFAULT_MAX_RECORD_LEN: usize = 1 << 20;

pub(crate) const WIRE_VARINT: u8 = 0;
pub(crate) const WIRE_LEN_DELIMITED: u8 = 2;

pub(crate) mod tags {
    pub const RATCHET_KEY: u8 = 0o012;
    pub const COUNTER: u8 = 0o020;
    pub const CIPHERTEXT: u8 = 0o042;

    pub const ONE_TIME_KEY_ID: u8 = 0o010;
    pub const BASE_KEY: u8 = 0o022;
    pub const IDENTITY_KEY: u8 = 0o032;
    pub const MESSAGE: u8 = 0o042;
    pub const REGISTRATION_ID: u8 = 0o050;
}

/// The one case where the decoder refuses to parse at all, rather than
/// leaving fields absent: a declared body length past
/// [`DEFAULT_MAX_RECORD_LEN`] (or a caller-supplied ceiling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    RecordTooLarge,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::RecordTooLarge => write!(f, "record exceeds the configured size ceiling"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Returned when an encoder's caller-provided output buffer does not
/// match the exact length returned by the matching `*_length` estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLengthMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for BufferLengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "output buffer is {} bytes, expected exactly {}",
            self.actual, self.expected
        )
    }
}

impl std::error::Error for BufferLengthMismatch {}

fn write_tag(out: &mut [u8], pos: usize, tag: u8) -> usize {
    out[pos] = tag;
    pos + 1
}

/// Writes a wire-type-0 (varint) field: tag byte, then the value.
fn write_varint_field(out: &mut [u8], pos: usize, tag: u8, value: u64) -> usize {
    let pos = write_tag(out, pos, tag);
    varint_encode(out, pos, value)
}

/// Writes a wire-type-2 (length-delimited) field: tag byte, varint
/// length, then the payload bytes.
fn write_bytes_field(out: &mut [u8], pos: usize, tag: u8, payload: &[u8]) -> usize {
    let pos = write_tag(out, pos, tag);
    let pos = varint_encode(out, pos, payload.len() as u64);
    out[pos..pos + payload.len()].copy_from_slice(payload);
    pos + payload.len()
}

fn bytes_field_len(payload_len: usize) -> usize {
    1 + varint_len(payload_len as u64) + payload_len
}

/// Attempts to consume a wire-type-2 field at `pos` (which must point at
/// the tag byte). Returns `(payload, new_pos)` on success. On a missing
/// length varint or a declared length overrunning `end`, returns `None`
/// and the caller should jump the cursor to `end` (§4.6.4 item 5).
fn consume_length_delimited(body: &[u8], pos: usize, end: usize) -> Option<(Vec<u8>, usize)> {
    let len_start = pos + 1;
    if len_start >= end {
        return None;
    }
    let len_end = varint_skip(body, len_start, end);
    if !terminated(body, len_start, len_end) {
        return None;
    }
    let len = varint_decode(body, len_start, len_end) as usize;
    if len_end + len > end {
        return None;
    }
    Some((body[len_end..len_end + len].to_vec(), len_end + len))
}

/// Attempts to consume a wire-type-0 field at `pos`. Returns `(value,
/// new_pos)` on success, `None` on a missing/truncated varint.
fn consume_varint(body: &[u8], pos: usize, end: usize) -> Option<(u64, usize)> {
    let start = pos + 1;
    if start >= end {
        return None;
    }
    let value_end = varint_skip(body, start, end);
    if !terminated(body, start, value_end) {
        return None;
    }
    Some((varint_decode(body, start, value_end), value_end))
}

fn terminated(body: &[u8], start: usize, end: usize) -> bool {
    end > start && body[end - 1] & 0x80 == 0
}

/// Skips one unknown field starting at `pos` (the tag byte), per
/// §4.6.4 item 4 / §9: `(tag & 0x7) == 0` selects the varint skip rule,
/// `(tag & 0x7) == 2` the length-delimited skip rule; any other wire
/// type aborts the sweep by returning `pos` unchanged (the caller must
/// then stop, not loop).
fn skip_unknown_field(body: &[u8], pos: usize, end: usize) -> usize {
    let tag = body[pos];
    match tag & 0x7 {
        WIRE_VARINT => consume_varint(body, pos, end).map(|(_, p)| p).unwrap_or(end),
        WIRE_LEN_DELIMITED => consume_length_delimited(body, pos, end)
            .map(|(_, p)| p)
            .unwrap_or(end),
        _ => end,
    }
}
