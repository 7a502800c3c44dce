//! PRE-KEY MESSAGE record: `version`, `registration_id`,
//! `one_time_key_id`, `base_key`, `identity_key`, `message`.
//!
//! Fields are written and scanned in ascending tag order (§4.6.2's
//! table): `one_time_key_id`, `base_key`, `identity_key`, `message`,
//! `registration_id`.

use super::varint::varint_len;
use super::{
    bytes_field_len, consume_length_delimited, consume_varint, skip_unknown_field, tags,
    BufferLengthMismatch, DecodeError,
};

/// Borrowed view over the fields of an outgoing pre-key message.
pub struct PreKeyMessage<'a> {
    pub version: u8,
    pub registration_id: u32,
    pub one_time_key_id: u32,
    pub base_key: &'a [u8],
    pub identity_key: &'a [u8],
    pub message: &'a [u8],
}

impl PreKeyMessage<'_> {
    pub fn encoded_len(&self) -> usize {
        1 + (1 + varint_len(self.one_time_key_id as u64))
            + bytes_field_len(self.base_key.len())
            + bytes_field_len(self.identity_key.len())
            + bytes_field_len(self.message.len())
            + (1 + varint_len(self.registration_id as u64))
    }

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
        pos = super::write_varint_field(out, pos, tags::ONE_TIME_KEY_ID, self.one_time_key_id as u64);
        pos = super::write_bytes_field(out, pos, tags::BASE_KEY, self.base_key);
        pos = super::write_bytes_field(out, pos, tags::IDENTITY_KEY, self.identity_key);
        pos = super::write_bytes_field(out, pos, tags::MESSAGE, self.message);
        pos = super::write_varint_field(out, pos, tags::REGISTRATION_ID, self.registration_id as u64);
        debug_assert_eq!(pos, expected);
        Ok(())
    }

    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.encoded_len()];
        self.encode(&mut out).expect("buffer sized by encoded_len");
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedPreKeyMessage {
    pub version: Option<u8>,
    pub registration_id: Option<u32>,
    pub one_time_key_id: Option<u32>,
    pub base_key: Option<Vec<u8>>,
    pub identity_key: Option<Vec<u8>>,
    pub message: Option<Vec<u8>>,
}

/// Decodes a pre-key message wire record (the entire input is the
/// tagged body; unlike ratchet messages there is no trailing MAC to
/// trim). `max_record_len` bounds the length the decoder will scan.
pub fn decode(input: &[u8], max_record_len: usize) -> Result<DecodedPreKeyMessage, DecodeError> {
    if input.len() > max_record_len {
        return Err(DecodeError::RecordTooLarge);
    }

    let mut result = DecodedPreKeyMessage::default();
    if input.is_empty() {
        return Ok(result);
    }

    result.version = Some(input[0]);
    let mut pos = 1;
    let end = input.len();

    while pos < end {
        let tag = input[pos];
        let recognized = matches!(
            tag,
            tags::ONE_TIME_KEY_ID | tags::BASE_KEY | tags::IDENTITY_KEY | tags::MESSAGE | tags::REGISTRATION_ID
        );

        let advanced = match tag {
            tags::ONE_TIME_KEY_ID => consume_varint(input, pos, end).map(|(v, p)| {
                result.one_time_key_id = Some(v as u32);
                p
            }),
            tags::BASE_KEY => consume_length_delimited(input, pos, end).map(|(v, p)| {
                result.base_key = Some(v);
                p
            }),
            tags::IDENTITY_KEY => consume_length_delimited(input, pos, end).map(|(v, p)| {
                result.identity_key = Some(v);
                p
            }),
            tags::MESSAGE => consume_length_delimited(input, pos, end).map(|(v, p)| {
                result.message = Some(v);
                p
            }),
            tags::REGISTRATION_ID => consume_varint(input, pos, end).map(|(v, p)| {
                result.registration_id = Some(v as u32);
                p
            }),
            _ => None,
        };

        pos = match advanced {
            Some(p) => p,
            None if recognized => end,
            None => {
                let skipped = skip_unknown_field(input, pos, end);
                if skipped == pos {
                    break;
                }
                skipped
            }
        };
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_all_fields() {
        let base_key = [1u8; 32];
        let identity_key = [2u8; 32];
        let message = b"prekey wire payload";
        let msg = PreKeyMessage {
            version: 3,
            registration_id: 1234,
            one_time_key_id: 7,
            base_key: &base_key,
            identity_key: &identity_key,
            message,
        };
        let wire = msg.encode_to_vec();
        let decoded = decode(&wire, super::super::DEFAULT_MAX_RECORD_LEN).unwrap();

        assert_eq!(decoded.version, Some(3));
        assert_eq!(decoded.registration_id, Some(1234));
        assert_eq!(decoded.one_time_key_id, Some(7));
        assert_eq!(decoded.base_key.as_deref(), Some(&base_key[..]));
        assert_eq!(decoded.identity_key.as_deref(), Some(&identity_key[..]));
        assert_eq!(decoded.message.as_deref(), Some(&message[..]));
    }

    #[test]
    fn empty_input_decodes_to_all_absent() {
        let decoded = decode(&[], super::super::DEFAULT_MAX_RECORD_LEN).unwrap();
        assert_eq!(decoded, DecodedPreKeyMessage::default());
    }

    #[test]
    fn fields_may_appear_out_of_order() {
        let base_key = [9u8; 32];
        let identity_key = [8u8; 32];
        let msg = PreKeyMessage {
            version: 3,
            registration_id: 99,
            one_time_key_id: 5,
            base_key: &base_key,
            identity_key: &identity_key,
            message: b"m",
        };
        let canonical = msg.encode_to_vec();

        // Splice an extra copy of the registration_id field right after
        // the version byte, ahead of its canonical position at the end.
        let mut regbuf = [0u8; 2];
        let p = super::super::write_varint_field(&mut regbuf, 0, tags::REGISTRATION_ID, 99);

        let mut reordered = Vec::new();
        reordered.push(canonical[0]);
        reordered.extend_from_slice(&regbuf[..p]);
        reordered.extend_from_slice(&canonical[1..]);

        let decoded = decode(&reordered, super::super::DEFAULT_MAX_RECORD_LEN).unwrap();
        assert_eq!(decoded.registration_id, Some(99));
        assert_eq!(decoded.one_time_key_id, Some(5));
        assert_eq!(decoded.base_key.as_deref(), Some(&base_key[..]));
    }

    #[test]
    fn oversized_record_is_rejected_before_scanning() {
        let err = decode(&[0u8; 10], 4).unwrap_err();
        assert_eq!(err, DecodeError::RecordTooLarge);
    }
}
