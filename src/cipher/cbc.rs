//! C5: AES-256-CBC with PKCS#7-style padding.
//!
//! Padding is always present, even for plaintexts whose length is
//! already a multiple of the block size (a full pad block is appended).
//! Decryption trusts the trailing pad-length byte and does not verify
//! that every padding byte equals it; callers MUST authenticate
//! ciphertexts with an external MAC (see [`crate::mac`]) — this module
//! never does so itself.

use super::aes256::KeySchedule;
use std::fmt;
use zeroize::Zeroize;

const BLOCK_LEN: usize = 16;

/// The trailing pad-length byte exceeded the ciphertext length, or the
/// ciphertext was not a whole number of blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingError {
    /// Ciphertext length was not a positive multiple of the block size.
    InvalidLength,
    /// The decrypted pad-length byte was larger than the ciphertext.
    BadPadding,
}

impl fmt::Display for PaddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaddingError::InvalidLength => write!(f, "ciphertext is not a whole number of AES blocks"),
            PaddingError::BadPadding => write!(f, "padding length exceeds ciphertext length"),
        }
    }
}

impl std::error::Error for PaddingError {}

/// Exact ciphertext length for a plaintext of `plaintext_len` bytes:
/// always at least one full block longer, per PKCS#7's "always pad"
/// rule.
pub fn encrypt_len(plaintext_len: usize) -> usize {
    plaintext_len + (BLOCK_LEN - plaintext_len % BLOCK_LEN)
}

/// Encrypts `plaintext` under `key`/`iv`, returning a newly allocated
/// ciphertext of [`encrypt_len`] bytes.
///
/// The AES key schedule and the single-block working buffer are
/// zeroized before returning.
pub fn encrypt(key: &[u8; 32], iv: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    let schedule = KeySchedule::expand(key);
    let out_len = encrypt_len(plaintext.len());
    let mut out = vec![0u8; out_len];

    let mut feedback = *iv;
    let full_blocks = plaintext.len() / BLOCK_LEN;

    for i in 0..full_blocks {
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(&plaintext[i * BLOCK_LEN..(i + 1) * BLOCK_LEN]);
        xor_block(&mut block, &feedback);
        schedule.encrypt_block(&mut block);
        out[i * BLOCK_LEN..(i + 1) * BLOCK_LEN].copy_from_slice(&block);
        feedback = block;
        block.zeroize();
    }

    let rem = plaintext.len() - full_blocks * BLOCK_LEN;
    let pad = (BLOCK_LEN - rem) as u8;
    let mut last = [pad; BLOCK_LEN];
    last[..rem].copy_from_slice(&plaintext[full_blocks * BLOCK_LEN..]);
    xor_block(&mut last, &feedback);
    schedule.encrypt_block(&mut last);
    out[full_blocks * BLOCK_LEN..].copy_from_slice(&last);
    last.zeroize();
    feedback.zeroize();

    out
}

/// Decrypts `ciphertext` under `key`/`iv`, returning the plaintext with
/// its PKCS#7-style padding stripped.
///
/// Per §4.5/§7: the trailing pad-length byte is trusted; only its
/// magnitude relative to the ciphertext length is checked. This does
/// NOT authenticate the ciphertext — callers must verify a MAC
/// separately.
pub fn decrypt(key: &[u8; 32], iv: &[u8; 16], ciphertext: &[u8]) -> Result<Vec<u8>, PaddingError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(PaddingError::InvalidLength);
    }

    let schedule = KeySchedule::expand(key);
    let mut out = vec![0u8; ciphertext.len()];
    let mut feedback = *iv;

    let blocks = ciphertext.len() / BLOCK_LEN;
    for i in 0..blocks {
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(&ciphertext[i * BLOCK_LEN..(i + 1) * BLOCK_LEN]);
        let next_feedback = block;
        schedule.decrypt_block(&mut block);
        xor_block(&mut block, &feedback);
        out[i * BLOCK_LEN..(i + 1) * BLOCK_LEN].copy_from_slice(&block);
        feedback = next_feedback;
        block.zeroize();
    }
    feedback.zeroize();

    let pad = *out.last().unwrap() as usize;
    if pad > out.len() {
        out.zeroize();
        return Err(PaddingError::BadPadding);
    }

    let plaintext_len = out.len() - pad;
    out.truncate(plaintext_len);
    Ok(out)
}

fn xor_block(block: &mut [u8; BLOCK_LEN], other: &[u8; BLOCK_LEN]) {
    for i in 0..BLOCK_LEN {
        block[i] ^= other[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    #[test]
    fn s5_empty_plaintext_vector() {
        let key = [0u8; 32];
        let iv = [0u8; 16];
        assert_eq!(encrypt_len(0), 16);
        let ct = encrypt(&key, &iv, b"");
        assert_eq!(ct, from_hex("014730f80ac625fe84f026c60bfd547d"));
    }

    #[test]
    fn roundtrip_various_lengths() {
        let key = [0x11u8; 32];
        let iv = [0x22u8; 16];
        for len in [0usize, 1, 15, 16, 17, 31, 32, 33, 100] {
            let plaintext: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let ct = encrypt(&key, &iv, &plaintext);
            assert_eq!(ct.len() % 16, 0);
            assert_eq!(ct.len(), encrypt_len(plaintext.len()));
            let pt = decrypt(&key, &iv, &ct).unwrap();
            assert_eq!(pt, plaintext);
        }
    }

    #[test]
    fn decrypt_rejects_a_ciphertext_length_not_a_block_multiple() {
        let key = [0x33u8; 32];
        let iv = [0x44u8; 16];
        let bogus = vec![0u8; 15];
        assert_eq!(decrypt(&key, &iv, &bogus), Err(PaddingError::InvalidLength));
    }

    #[test]
    fn decrypt_rejects_a_pad_length_byte_past_the_ciphertext() {
        let key = [0u8; 32];
        // Encrypting empty plaintext always yields a whole block of
        // pad byte 0x10. Decrypting that same ciphertext block under a
        // different IV XORs every byte of the recovered block with the
        // IV delta, so flipping just the IV's last byte turns the pad
        // byte into something larger than the block size without
        // touching the cipher itself.
        let mut encrypt_iv = [0u8; 16];
        encrypt_iv[15] = 0xf0;
        let ct = encrypt(&key, &encrypt_iv, b"");

        let decrypt_iv = [0u8; 16];
        assert_eq!(decrypt(&key, &decrypt_iv, &ct), Err(PaddingError::BadPadding));
    }

    #[test]
    fn decrypt_rejects_empty_ciphertext() {
        let key = [0x55u8; 32];
        let iv = [0x66u8; 16];
        assert_eq!(decrypt(&key, &iv, &[]), Err(PaddingError::InvalidLength));
    }
}
