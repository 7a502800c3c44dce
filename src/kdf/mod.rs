//! HKDF-SHA256 (RFC 5869).

use crate::mac::hmac_sha256;
use zeroize::Zeroize;

const HASH_LEN: usize = 32;

/// Extract-and-expand HKDF-SHA256: derives `out_len` bytes from `ikm`,
/// `salt` (absent treated as 32 zero bytes per RFC 5869 §2.2) and `info`.
///
/// The iteration counter is a single byte, so `out_len` must not exceed
/// `255 * 32 = 8160`; behavior beyond that is unspecified (the counter
/// wraps). All intermediate `T(i)` blocks and the PRK are zeroized before
/// returning.
pub fn hkdf_sha256(ikm: &[u8], salt: Option<&[u8]>, info: &[u8], out_len: usize) -> Vec<u8> {
    let zero_salt = [0u8; HASH_LEN];
    let salt = salt.unwrap_or(&zero_salt);

    let mut prk = hmac_sha256(salt, ikm);

    let mut output = Vec::with_capacity(out_len);
    let mut t_prev: Vec<u8> = Vec::new();
    let mut counter: u8 = 1;

    while output.len() < out_len {
        let mut block_input = Vec::with_capacity(t_prev.len() + info.len() + 1);
        block_input.extend_from_slice(&t_prev);
        block_input.extend_from_slice(info);
        block_input.push(counter);

        let t_i = hmac_sha256(&prk, &block_input);
        block_input.zeroize();

        let take = (out_len - output.len()).min(HASH_LEN);
        output.extend_from_slice(&t_i[..take]);

        t_prev = t_i.to_vec();
        counter = counter.wrapping_add(1);
    }

    prk.zeroize();
    t_prev.zeroize();
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_length_matches_request() {
        let out = hkdf_sha256(b"input key material", None, b"info", 96);
        assert_eq!(out.len(), 96);
    }

    #[test]
    fn deterministic() {
        let a = hkdf_sha256(b"ikm", Some(b"salt"), b"ctx", 64);
        let b = hkdf_sha256(b"ikm", Some(b"salt"), b"ctx", 64);
        assert_eq!(a, b);
    }

    #[test]
    fn salt_changes_output() {
        let a = hkdf_sha256(b"ikm", Some(b"salt-one"), b"ctx", 32);
        let b = hkdf_sha256(b"ikm", Some(b"salt-two"), b"ctx", 32);
        assert_ne!(a, b);
    }
}
