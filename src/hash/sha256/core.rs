//! SHA-256 block compression and the public one-shot hashing function.

use super::computations::all_rounds;
use super::H256_INIT;
use zeroize::Zeroize;

/// Compresses a single 512-bit block, updating `state` in place.
fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];
    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }
    all_rounds(state, w);
    w.zeroize();
}

/// Computes the SHA-256 digest of `input`.
///
/// Standard Merkle-Damgard construction: the message is padded with a
/// single `0x80` bit, zeros, and a 64-bit big-endian bit length, then
/// processed in 64-byte blocks. The working state is zeroized before
/// returning.
pub fn sha256(input: &[u8]) -> [u8; 32] {
    let mut state = H256_INIT;

    let mut i = 0;
    let len = input.len();

    while i + 64 <= len {
        let block: &[u8; 64] = input[i..i + 64].try_into().unwrap();
        compress(block, &mut state);
        i += 64;
    }

    let mut block = [0u8; 64];
    let rem = len - i;
    block[..rem].copy_from_slice(&input[i..]);
    block[rem] = 0x80;

    if rem > 55 {
        compress(&block, &mut state);
        block = [0u8; 64];
    }

    let bit_len = (len as u64) << 3;
    block[56..64].copy_from_slice(&bit_len.to_be_bytes());
    compress(&block, &mut state);

    let mut out = [0u8; 32];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    state.zeroize();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let digest = sha256(b"");
        assert_eq!(
            hex(&digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b85"
        );
    }

    #[test]
    fn abc() {
        let digest = sha256(b"abc");
        assert_eq!(
            hex(&digest),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn two_block_message() {
        let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        let digest = sha256(msg);
        assert_eq!(
            hex(&digest),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
