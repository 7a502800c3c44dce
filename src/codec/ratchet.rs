//! RATCHET MESSAGE record: `version`, `ratchet_key`, `counter`,
//! `ciphertext`, followed by a trailing MAC that is NOT part of the
//! tagged body (§3/§4.6).

use super::varint::varint_len;
use super::{
    bytes_field_len, consume_length_delimited, consume_varint, skip_unknown_field, tags,
    BufferLengthMismatch, DecodeError,
};

/// Borrowed view over the fields of an outgoing ratchet message.
pub struct RatchetMessage<'a> {
    pub version: u8,
    pub ratchet_key: &'a [u8],
    pub counter: u32,
    pub ciphertext: &'a [u8],
}

impl RatchetMessage<'_> {
    /// Exact number of bytes the tagged body (excluding the trailing
    /// MAC) occupies.
    pub fn encoded_len(&self) -> usize {
        1 + bytes_field_len(self.ratchet_key.len())
            + (1 + varint_len(self.counter as u64))
            + bytes_field_len(self.ciphertext.len())
    }

    /// Writes the tagged body into `out`, which must be exactly
    /// [`Self::encoded_len`] bytes.
    pub fn encode(&self, out: &mut [u8]) -> Result<(), BufferLengthMismatch> {
        let expected = self.encoded_len();
        if out.len() != expected {
            return Err(BufferLengthMismatch {
                expected,
                actual: out.len(),
            });
        }
        let mut pos = 0;
        out[pos] = self.version;
        pos += 1;
        pos = super::write_bytes_field(out, pos, tags::RATCHET_KEY, self.ratchet_key);
        pos = super::write_varint_field(out, pos, tags::COUNTER, self.counter as u64);
        pos = super::write_bytes_field(out, pos, tags::CIPHERTEXT, self.ciphertext);
        debug_assert_eq!(pos, expected);
        Ok(())
    }

    /// Convenience allocating wrapper: encodes the tagged body and
    /// appends `mac` verbatim, producing the full wire bytes. The core
    /// [`Self::encode`] function above never allocates; this helper is
    /// a thin layer on top of it for callers who want an owned `Vec`.
    pub fn encode_to_vec(&self, mac: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; self.encoded_len()];
        self.encode(&mut out).expect("buffer sized by encoded_len");
        out.extend_from_slice(mac);
        out
    }
}

/// Decoded ratchet message fields. Absent fields (never written, or
/// left unparsed by truncation) are `None`, per §4.6.4's leniency rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedRatchetMessage {
    pub version: Option<u8>,
    pub ratchet_key: Option<Vec<u8>>,
    pub counter: Option<u32>,
    pub ciphertext: Option<Vec<u8>>,
}

/// Decodes a ratchet message wire record. `mac_len` bytes are trimmed
/// off the end of `input` before the body is scanned (§4.6.4's
/// preamble); those trailing bytes are the MAC and are never
/// interpreted here. `max_record_len` bounds the body length the
/// decoder will scan (§4.6.4's addition, resolving §9's open question).
pub fn decode(
    input: &[u8],
    mac_len: usize,
    max_record_len: usize,
) -> Result<DecodedRatchetMessage, DecodeError> {
    let body_len = input.len().saturating_sub(mac_len);
    decode_body(&input[..body_len], max_record_len)
}

fn decode_body(
    body: &[u8],
    max_record_len: usize,
) -> Result<DecodedRatchetMessage, DecodeError> {
    if body.len() > max_record_len {
        return Err(DecodeError::RecordTooLarge);
    }

    let mut result = DecodedRatchetMessage::default();
    if body.is_empty() {
        return Ok(result);
    }

    result.version = Some(body[0]);
    let mut pos = 1;
    let end = body.len();

    while pos < end {
        let tag = body[pos];
        let recognized = matches!(tag, tags::RATCHET_KEY | tags::COUNTER | tags::CIPHERTEXT);

        let advanced = match tag {
            tags::RATCHET_KEY => consume_length_delimited(body, pos, end).map(|(v, p)| {
                result.ratchet_key = Some(v);
                p
            }),
            tags::COUNTER => consume_varint(body, pos, end).map(|(v, p)| {
                result.counter = Some(v as u32);
                p
            }),
            tags::CIPHERTEXT => consume_length_delimited(body, pos, end).map(|(v, p)| {
                result.ciphertext = Some(v);
                p
            }),
            _ => None,
        };

        pos = match advanced {
            Some(p) => p,
            None if recognized => end,
            None => {
                let skipped = skip_unknown_field(body, pos, end);
                if skipped == pos {
                    break;
                }
                skipped
            }
        };
    }

    Ok(result)
}
