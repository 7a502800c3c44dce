//! C5: AES-256 in CBC mode with PKCS#7-style padding.

mod aes256;
mod cbc;

pub use cbc::{decrypt as aes_cbc_decrypt, encrypt as aes_cbc_encrypt, encrypt_len as aes_cbc_encrypt_length, PaddingError};
