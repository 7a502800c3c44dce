use cryptography::cipher::{aes_cbc_decrypt, aes_cbc_encrypt};

use aes::Aes256;
use cbc::cipher::{BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const KEY: [u8; 32] = [0x11u8; 32];
const IV: [u8; 16] = [0x22u8; 16];
const PLAINTEXT: [u8; 256] = [0x5au8; 256];

pub fn bench_this_crate(c: &mut Criterion) {
    c.bench_function("aes_cbc_encrypt 256 bytes", |b| {
        b.iter(|| aes_cbc_encrypt(black_box(&KEY), black_box(&IV), black_box(&PLAINTEXT)))
    });

    let ct = aes_cbc_encrypt(&KEY, &IV, &PLAINTEXT);
    c.bench_function("aes_cbc_decrypt 256 bytes", |b| {
        b.iter(|| aes_cbc_decrypt(black_box(&KEY), black_box(&IV), black_box(&ct)))
    });
}

pub fn bench_rustcrypto_ref(c: &mut Criterion) {
    type Enc = cbc::Encryptor<Aes256>;

    c.bench_function("RustCrypto cbc::Encryptor 256 bytes", |b| {
        b.iter(|| {
            let enc = Enc::new(black_box(&KEY.into()), black_box(&IV.into()));
            let mut buf = [0u8; 272];
            buf[..256].copy_from_slice(&PLAINTEXT);
            let _ = enc
                .encrypt_padded_mut::<Pkcs7>(&mut buf, 256)
                .unwrap();
        })
    });
}

criterion_group!(benches, bench_this_crate, bench_rustcrypto_ref);
criterion_main!(benches);
