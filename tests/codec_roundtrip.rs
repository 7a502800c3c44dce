//! Testable properties 7 and 8, plus the codec's boundary behaviors,
//! driven through the public API only.

use cryptography::codec::prekey::{decode as decode_prekey, PreKeyMessage};
use cryptography::codec::ratchet::{decode as decode_ratchet, RatchetMessage};
use cryptography::codec::{DecodeError, DEFAULT_MAX_RECORD_LEN};

#[test]
fn ratchet_message_round_trips_bit_exactly() {
    let ratchet_key = [0x42u8; 32];
    let ciphertext = b"some ratcheted payload bytes";
    let msg = RatchetMessage {
        version: 3,
        ratchet_key: &ratchet_key,
        counter: 17,
        ciphertext,
    };
    let wire = msg.encode_to_vec(&[0xABu8; 8]);
    let decoded = decode_ratchet(&wire, 8, DEFAULT_MAX_RECORD_LEN).unwrap();

    assert_eq!(decoded.version, Some(3));
    assert_eq!(decoded.ratchet_key.as_deref(), Some(&ratchet_key[..]));
    assert_eq!(decoded.counter, Some(17));
    assert_eq!(decoded.ciphertext.as_deref(), Some(&ciphertext[..]));

    // The trailing 8 bytes are the MAC and must not appear in any field.
    assert_eq!(&wire[wire.len() - 8..], &[0xABu8; 8]);
}

#[test]
fn prekey_message_round_trips_bit_exactly() {
    let base_key = [1u8; 32];
    let identity_key = [2u8; 32];
    let message = b"handshake message body";
    let msg = PreKeyMessage {
        version: 3,
        registration_id: 424242,
        one_time_key_id: 99,
        base_key: &base_key,
        identity_key: &identity_key,
        message,
    };
    let wire = msg.encode_to_vec();
    let decoded = decode_prekey(&wire, DEFAULT_MAX_RECORD_LEN).unwrap();

    assert_eq!(decoded.version, Some(3));
    assert_eq!(decoded.registration_id, Some(424242));
    assert_eq!(decoded.one_time_key_id, Some(99));
    assert_eq!(decoded.base_key.as_deref(), Some(&base_key[..]));
    assert_eq!(decoded.identity_key.as_deref(), Some(&identity_key[..]));
    assert_eq!(decoded.message.as_deref(), Some(&message[..]));
}

#[test]
fn decoder_tolerates_a_trailing_unknown_field_appended_after_encoding() {
    let base_key = [9u8; 32];
    let identity_key = [8u8; 32];
    let msg = PreKeyMessage {
        version: 3,
        registration_id: 5,
        one_time_key_id: 6,
        base_key: &base_key,
        identity_key: &identity_key,
        message: b"m",
    };
    let mut wire = msg.encode_to_vec();
    let baseline = decode_prekey(&wire, DEFAULT_MAX_RECORD_LEN).unwrap();

    // Append a well-formed but unrecognized length-delimited field
    // (tag for field number 15, wire type 2).
    wire.push((15 << 3) | 2);
    wire.push(3);
    wire.extend_from_slice(b"abc");

    let with_suffix = decode_prekey(&wire, DEFAULT_MAX_RECORD_LEN).unwrap();
    assert_eq!(with_suffix, baseline);
}

#[test]
fn empty_ratchet_input_decodes_with_all_fields_absent() {
    let decoded = decode_ratchet(&[], 0, DEFAULT_MAX_RECORD_LEN).unwrap();
    assert_eq!(decoded.version, None);
    assert_eq!(decoded.ratchet_key, None);
    assert_eq!(decoded.counter, None);
    assert_eq!(decoded.ciphertext, None);
}

#[test]
fn empty_prekey_input_decodes_with_all_fields_absent() {
    let decoded = decode_prekey(&[], DEFAULT_MAX_RECORD_LEN).unwrap();
    assert_eq!(decoded.version, None);
    assert_eq!(decoded.registration_id, None);
    assert_eq!(decoded.one_time_key_id, None);
    assert_eq!(decoded.base_key, None);
    assert_eq!(decoded.identity_key, None);
    assert_eq!(decoded.message, None);
}

#[test]
fn overrun_length_prefix_truncates_without_faulting() {
    let base_key = [7u8; 32];
    let identity_key = [6u8; 32];
    let msg = PreKeyMessage {
        version: 3,
        registration_id: 1,
        one_time_key_id: 2,
        base_key: &base_key,
        identity_key: &identity_key,
        message: b"tail",
    };
    let mut wire = msg.encode_to_vec();
    // `registration_id` is written last and is a 2-byte varint field
    // here; `message`'s 4-byte payload is written just before it.
    // Dropping the trailing 4 bytes removes `registration_id` whole
    // and leaves `message`'s declared length overrunning the
    // remaining buffer, so both end up absent without faulting.
    wire.truncate(wire.len() - 4);

    let decoded = decode_prekey(&wire, DEFAULT_MAX_RECORD_LEN).unwrap();
    assert_eq!(decoded.version, Some(3));
    assert_eq!(decoded.one_time_key_id, Some(2));
    assert_eq!(decoded.base_key.as_deref(), Some(&base_key[..]));
    assert_eq!(decoded.identity_key.as_deref(), Some(&identity_key[..]));
    assert_eq!(decoded.message, None);
    assert_eq!(decoded.registration_id, None);
}

#[test]
fn oversized_record_is_rejected_before_any_byte_is_interpreted() {
    let huge = vec![0u8; 100];
    let err = decode_prekey(&huge, 10).unwrap_err();
    assert_eq!(err, DecodeError::RecordTooLarge);

    let err = decode_ratchet(&huge, 0, 10).unwrap_err();
    assert_eq!(err, DecodeError::RecordTooLarge);
}
