//! SHA-512 block compression and the one-shot hashing function.

use super::computations::all_rounds;
use super::H512_INIT;
use zeroize::Zeroize;

fn compress(block: &[u8; 128], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];
    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *slot = u64::from_be_bytes(chunk.try_into().unwrap());
    }
    all_rounds(state, w);
    w.zeroize();
}

/// Computes the SHA-512 digest of `input`.
pub(crate) fn sha512(input: &[u8]) -> [u8; 64] {
    let mut state = H512_INIT;

    let mut i = 0;
    let len = input.len();

    while i + 128 <= len {
        let block: &[u8; 128] = input[i..i + 128].try_into().unwrap();
        compress(block, &mut state);
        i += 128;
    }

    let mut block = [0u8; 128];
    let rem = len - i;
    block[..rem].copy_from_slice(&input[i..]);
    block[rem] = 0x80;

    if rem > 111 {
        compress(&block, &mut state);
        block = [0u8; 128];
    }

    let bit_len = (len as u128) << 3;
    block[112..128].copy_from_slice(&bit_len.to_be_bytes());
    compress(&block, &mut state);

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    state.zeroize();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abc() {
        let digest = sha512(b"abc");
        assert_eq!(
            hex(&digest),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39\
             a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49"
        );
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
