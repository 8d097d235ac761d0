#![cfg(feature = "test-vectors")]

// known-answer tests from FIPS-197 (https://doi.org/10.6028/NIST.FIPS.197-upd1) and the
// AESAVS KAT files (https://csrc.nist.gov/projects/cryptographic-algorithm-validation-program/block-ciphers#AES)

use aes128::{Cipher, ExpandedKey, Key, Result, decrypt_block, encrypt_block, expand_key};
use hex_literal::hex;

struct BlockVector {
    key: [u8; 16],
    plaintext: [u8; 16],
    ciphertext: [u8; 16],
}

const BLOCK_VECTORS: &[BlockVector] = &[
    // FIPS-197 Appendix C.1
    BlockVector {
        key: hex!("000102030405060708090a0b0c0d0e0f"),
        plaintext: hex!("00112233445566778899aabbccddeeff"),
        ciphertext: hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
    },
    // FIPS-197 Appendix B
    BlockVector {
        key: hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        plaintext: hex!("3243f6a8885a308d313198a2e0370734"),
        ciphertext: hex!("3925841d02dc09fbdc118597196a0b32"),
    },
    // ECBGFSbox128
    BlockVector {
        key: [0u8; 16],
        plaintext: hex!("f34481ec3cc627bacd5dc3fb08f273e6"),
        ciphertext: hex!("0336763e966d92595a567cc9ce537f5e"),
    },
    BlockVector {
        key: [0u8; 16],
        plaintext: hex!("9798c4640bad75c7c3227db910174e72"),
        ciphertext: hex!("a9a1631bf4996954ebc093957b234589"),
    },
    // ECBKeySbox128
    BlockVector {
        key: hex!("10a58869d74be5a374cf867cfb473859"),
        plaintext: [0u8; 16],
        ciphertext: hex!("6d251e6944b051e04eaa6fb4dbf78465"),
    },
    // ECBVarTxt128, COUNT = 0
    BlockVector {
        key: [0u8; 16],
        plaintext: hex!("80000000000000000000000000000000"),
        ciphertext: hex!("3ad78e726c1ec02b7ebfe92b23d9ec34"),
    },
    // all-zero key and block
    BlockVector {
        key: [0u8; 16],
        plaintext: [0u8; 16],
        ciphertext: hex!("66e94bd4ef8a2c3b884cfa59ca342b2e"),
    },
];

#[test]
fn block_vectors_encrypt() -> Result<()> {
    for (i, v) in BLOCK_VECTORS.iter().enumerate() {
        let expanded = expand_key(&v.key)?;
        let actual = encrypt_block(&v.plaintext, expanded.as_bytes())?;
        assert_eq!(actual, v.ciphertext, "vector {i}: encryption mismatch");
    }
    Ok(())
}

#[test]
fn block_vectors_decrypt() -> Result<()> {
    for (i, v) in BLOCK_VECTORS.iter().enumerate() {
        let cipher = Cipher::new(&Key::from(v.key));
        let actual = cipher.decrypt_block(&v.ciphertext);
        assert_eq!(actual, v.plaintext, "vector {i}: decryption mismatch");
    }
    Ok(())
}

#[test]
fn key_expansion_fips_a1() -> Result<()> {
    // FIPS-197 Appendix A.1, w[0..44] concatenated
    const EXPANDED: [u8; 176] = hex!(
        "2b7e151628aed2a6abf7158809cf4f3c"
        "a0fafe1788542cb123a339392a6c7605"
        "f2c295f27a96b9435935807a7359f67f"
        "3d80477d4716fe3e1e237e446d7a883b"
        "ef44a541a8525b7fb671253bdb0bad00"
        "d4d1c6f87c839d87caf2b8bc11f915bc"
        "6d88a37a110b3efddbf98641ca0093fd"
        "4e54f70e5f5fc9f384a64fb24ea6dc4f"
        "ead27321b58dbad2312bf5607f8d292f"
        "ac7766f319fadc2128d12941575c006e"
        "d014f9a8c9ee2589e13f0cc8b6630ca6"
    );

    let expanded = expand_key(&hex!("2b7e151628aed2a6abf7158809cf4f3c"))?;
    assert_eq!(expanded.to_bytes(), EXPANDED);

    // loading the flat buffer back gives the same schedule
    assert_eq!(ExpandedKey::try_from_slice(&EXPANDED)?, expanded);
    Ok(())
}

#[test]
fn decrypt_with_flat_expanded_key() -> Result<()> {
    let v = &BLOCK_VECTORS[1];
    let flat = expand_key(&v.key)?.to_bytes();

    assert_eq!(decrypt_block(&v.ciphertext, &flat)?, v.plaintext);
    Ok(())
}
