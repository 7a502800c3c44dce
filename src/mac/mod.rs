//! HMAC-SHA256 (RFC 2104).

use crate::hash::sha256;
use zeroize::Zeroize;

const BLOCK_LEN: usize = 64;
const HASH_LEN: usize = 32;

/// Preprocesses `key` into a 64-byte HMAC key: hashed down if longer than
/// the block size, zero-padded otherwise.
fn hmac_key(key: &[u8]) -> [u8; BLOCK_LEN] {
    let mut out = [0u8; BLOCK_LEN];
    if key.len() > BLOCK_LEN {
        let digest = sha256(key);
        out[..HASH_LEN].copy_from_slice(&digest);
    } else {
        out[..key.len()].copy_from_slice(key);
    }
    out
}

/// Computes `HMAC-SHA256(key, msg)`.
///
/// Key preprocessing, inner/outer pad buffers, and the intermediate hash
/// state are zeroized before returning.
pub fn hmac_sha256(key: &[u8], msg: &[u8]) -> [u8; 32] {
    let mut k = hmac_key(key);

    let mut i_pad = [0u8; BLOCK_LEN];
    let mut o_pad = [0u8; BLOCK_LEN];
    for i in 0..BLOCK_LEN {
        i_pad[i] = k[i] ^ 0x36;
        o_pad[i] = k[i] ^ 0x5c;
    }

    let mut inner_input = Vec::with_capacity(BLOCK_LEN + msg.len());
    inner_input.extend_from_slice(&i_pad);
    inner_input.extend_from_slice(msg);
    let inner_digest = sha256(&inner_input);
    inner_input.zeroize();

    let mut outer_input = [0u8; BLOCK_LEN + HASH_LEN];
    outer_input[..BLOCK_LEN].copy_from_slice(&o_pad);
    outer_input[BLOCK_LEN..].copy_from_slice(&inner_digest);
    let tag = sha256(&outer_input);

    k.zeroize();
    i_pad.zeroize();
    o_pad.zeroize();
    outer_input.zeroize();

    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc4231_case_1() {
        let key = [0x0bu8; 20];
        let data = b"Hi There";
        let tag = hmac_sha256(&key, data);
        assert_eq!(
            hex(&tag),
            "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
        );
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
