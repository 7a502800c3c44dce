//! ECDH and XEdDSA behavior driven entirely through the crate root's
//! public re-exports, independent of the unit tests colocated with the
//! implementation.

use cryptography::{sign, shared_secret, verify, Curve25519KeyPair};

#[test]
fn distinct_parties_derive_the_same_shared_secret() {
    let alice = Curve25519KeyPair::generate([11u8; 32]);
    let bob = Curve25519KeyPair::generate([22u8; 32]);

    let ab = shared_secret(&alice, bob.public());
    let ba = shared_secret(&bob, alice.public());
    assert_eq!(ab, ba);
}

#[test]
fn distinct_seeds_yield_distinct_key_pairs() {
    let a = Curve25519KeyPair::generate([1u8; 32]);
    let b = Curve25519KeyPair::generate([2u8; 32]);
    assert_ne!(a.public(), b.public());
}

#[test]
fn from_private_is_deterministic() {
    let a = Curve25519KeyPair::from_private([77u8; 32]);
    let b = Curve25519KeyPair::from_private([77u8; 32]);
    assert_eq!(a.public(), b.public());
}

#[test]
fn signature_verifies_under_the_signer_public_key() {
    let signer = Curve25519KeyPair::generate([5u8; 32]);
    let message = b"pre-key bundle signature payload";
    let sig = sign(&signer, message, [6u8; 64]);
    assert!(verify(signer.public(), message, &sig));
}

#[test]
fn signature_does_not_verify_under_a_different_public_key() {
    let signer = Curve25519KeyPair::generate([7u8; 32]);
    let impostor = Curve25519KeyPair::generate([8u8; 32]);
    let message = b"identity key";
    let sig = sign(&signer, message, [0u8; 64]);
    assert!(!verify(impostor.public(), message, &sig));
}

#[test]
fn two_signatures_over_the_same_message_both_verify() {
    // XEdDSA's nonce mixes in caller randomness, so signatures over
    // identical input need not be byte-identical, but both must verify.
    let signer = Curve25519KeyPair::generate([9u8; 32]);
    let message = b"same message, twice";
    let sig1 = sign(&signer, message, [1u8; 64]);
    let sig2 = sign(&signer, message, [2u8; 64]);
    assert!(verify(signer.public(), message, &sig1));
    assert!(verify(signer.public(), message, &sig2));
}
