//! Literal end-to-end test vectors (S1-S6) against the public API.

use cryptography::codec::ratchet::RatchetMessage;
use cryptography::{aes_cbc_encrypt, aes_cbc_encrypt_length, hkdf_sha256, hmac_sha256, sha256};

fn from_hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[test]
fn s1_sha256_abc() {
    let digest = sha256(b"abc");
    assert_eq!(
        to_hex(&digest),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn s2_hmac_sha256_rfc4231_case1() {
    let key = [0x0bu8; 20];
    let tag = hmac_sha256(&key, b"Hi There");
    assert_eq!(
        to_hex(&tag),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
}

#[test]
fn s3_hkdf_sha256_rfc5869_case1() {
    let ikm = [0x0bu8; 22];
    let salt = from_hex("000102030405060708090a0b0c");
    let info = from_hex("f0f1f2f3f4f5f6f7f8f9");

    let okm = hkdf_sha256(&ikm, Some(&salt), &info, 42);
    assert_eq!(
        to_hex(&okm),
        "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf34007208d5b887185865"
    );
}

#[test]
fn s5_aes256_cbc_empty_plaintext() {
    let key = [0u8; 32];
    let iv = [0u8; 16];
    assert_eq!(aes_cbc_encrypt_length(0), 16);

    let ct = aes_cbc_encrypt(&key, &iv, &[]);
    assert_eq!(ct.len(), 16);
    assert_eq!(to_hex(&ct), "014730f80ac625fe84f026c60bfd547d");
}

#[test]
fn s6_ratchet_codec_round_trip() {
    let ratchet_key = [0xAAu8; 32];
    let msg = RatchetMessage {
        version: 3,
        ratchet_key: &ratchet_key,
        counter: 0,
        ciphertext: b"hello",
    };
    assert_eq!(msg.encoded_len(), 44);

    let wire = msg.encode_to_vec(&[0u8; 8]);
    assert_eq!(wire.len(), 52);

    let decoded =
        cryptography::codec::ratchet::decode(&wire, 8, cryptography::codec::DEFAULT_MAX_RECORD_LEN)
            .expect("decode must not fault");
    assert_eq!(decoded.version, Some(3));
    assert_eq!(decoded.ratchet_key.as_deref(), Some(&ratchet_key[..]));
    assert_eq!(decoded.counter, Some(0));
    assert_eq!(decoded.ciphertext.as_deref(), Some(&b"hello"[..]));
}

#[test]
fn hkdf_out_len_32_equals_mac_prk_info_one() {
    // Testable property 9: HKDF with out_len=32 equals mac(prk, info || 0x01).
    let ikm = b"input key material";
    let salt = b"salt-value";
    let info = b"context";

    let full = hkdf_sha256(ikm, Some(salt), info, 32);

    let prk = hmac_sha256(salt, ikm);
    let mut block_input = info.to_vec();
    block_input.push(1);
    let expected = hmac_sha256(&prk, &block_input);

    assert_eq!(full, expected.to_vec());
}
