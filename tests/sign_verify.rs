//! End-to-end tests across all three security modes.

use dilithium_crypto::sign::{keypair_from_seed, open, sign, signature, verify};
use dilithium_crypto::{KeyPair, SecurityLevel, SignError};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const LEVELS: [SecurityLevel; 3] = [
    SecurityLevel::Dilithium2,
    SecurityLevel::Dilithium3,
    SecurityLevel::Dilithium5,
];

#[test]
fn roundtrip_every_mode() {
    let seed: [u8; 32] = core::array::from_fn(|i| i as u8);
    let message = b"Test message for Dilithium";
    for level in LEVELS {
        let (pk, sk) = keypair_from_seed(level, &seed);
        let sig = signature(level, message, &sk).unwrap();
        assert_eq!(sig.len(), level.params().signature_bytes);
        verify(level, &sig, message, &pk).unwrap();
    }
}

#[test]
fn rng_generated_keys_verify() {
    let mut rng = ChaCha20Rng::from_seed([0xABu8; 32]);
    for level in LEVELS {
        let keypair = KeyPair::generate(level, &mut rng);
        assert_eq!(
            keypair.public_key().len(),
            level.params().public_key_bytes
        );
        assert_eq!(
            keypair.secret_key().len(),
            level.params().secret_key_bytes
        );
        let sig = keypair.sign(b"rng keys").unwrap();
        keypair.to_public_key().verify(b"rng keys", &sig).unwrap();
    }
}

#[test]
fn tampered_signatures_fail() {
    let seed = [0x31u8; 32];
    let message = b"bit flips must not survive";
    for level in LEVELS {
        let p = level.params();
        let (pk, sk) = keypair_from_seed(level, &seed);
        let sig = signature(level, message, &sk).unwrap();

        // a flipped bit anywhere in the signature must be rejected: probe
        // the challenge, the z encoding and the hint encoding
        let probes = [
            0,
            17,
            p.signature_bytes / 2,
            p.signature_bytes - p.polyvech_packedbytes(),
            p.signature_bytes - 1,
        ];
        for &pos in probes.iter() {
            for bit in [0u8, 3, 7] {
                let mut bad = sig.clone();
                bad[pos] ^= 1 << bit;
                assert!(
                    verify(level, &bad, message, &pk).is_err(),
                    "mode {} accepted a flip at byte {pos} bit {bit}",
                    level.mode()
                );
            }
        }
    }
}

#[test]
fn tampered_public_key_fails() {
    let seed = [0x32u8; 32];
    let level = SecurityLevel::Dilithium3;
    let (pk, sk) = keypair_from_seed(level, &seed);
    let sig = signature(level, b"msg", &sk).unwrap();

    let mut bad_pk = pk.clone();
    bad_pk[40] ^= 0x10;
    assert!(verify(level, &sig, b"msg", &bad_pk).is_err());
}

#[test]
fn oversized_hint_count_is_malformed() {
    let seed = [0x33u8; 32];
    for level in LEVELS {
        let p = level.params();
        let (pk, sk) = keypair_from_seed(level, &seed);
        let sig = signature(level, b"hints", &sk).unwrap();

        // first cumulative-count byte pushed past omega
        let hint_off = p.signature_bytes - p.polyvech_packedbytes();
        let mut bad = sig.clone();
        bad[hint_off + p.omega] = p.omega as u8 + 1;
        assert_eq!(
            verify(level, &bad, b"hints", &pk),
            Err(SignError::MalformedSignature)
        );
    }
}

#[test]
fn signed_message_forms() {
    let seed = [0x34u8; 32];
    let level = SecurityLevel::Dilithium2;
    let p = level.params();
    let message = b"combined form payload";
    let (pk, sk) = keypair_from_seed(level, &seed);

    let sm = sign(level, message, &sk).unwrap();
    assert_eq!(sm.len(), p.signature_bytes + message.len());
    assert_eq!(&sm[p.signature_bytes..], message);
    assert_eq!(open(level, &sm, &pk).unwrap(), message);

    // corrupting the embedded message breaks the signature binding
    let mut bad = sm.clone();
    let last = bad.len() - 1;
    bad[last] ^= 0xFF;
    assert!(open(level, &bad, &pk).is_err());
}

#[test]
fn empty_and_large_messages() {
    let seed = [0x35u8; 32];
    let level = SecurityLevel::Dilithium2;
    let (pk, sk) = keypair_from_seed(level, &seed);

    let sig = signature(level, b"", &sk).unwrap();
    verify(level, &sig, b"", &pk).unwrap();

    let large = vec![0x42u8; 1 << 16];
    let sig = signature(level, &large, &sk).unwrap();
    verify(level, &sig, &large, &pk).unwrap();
}

#[test]
fn modes_are_not_interchangeable() {
    let seed = [0x36u8; 32];
    let (pk2, _) = keypair_from_seed(SecurityLevel::Dilithium2, &seed);
    let (_, sk3) = keypair_from_seed(SecurityLevel::Dilithium3, &seed);
    let sig3 = signature(SecurityLevel::Dilithium3, b"m", &sk3).unwrap();
    // a mode-3 signature has the wrong length for mode 2
    assert!(matches!(
        verify(SecurityLevel::Dilithium2, &sig3, b"m", &pk2),
        Err(SignError::InvalidSignatureLength { .. })
    ));
}
