//! Integration tests for the decryption call surface.
//!
//! Reference vectors use the real NEP-2 scrypt parameters.

use neo_nep2::*;
use zeroize::Zeroizing;

const LEGACY_NEP2: &str = "6PYVPVe1fQznphjbUxXP9KZJqPMVnVwCx5s5pr5axRJ8uHkMtZg97eT5kL";
const LEGACY_KEY: &str = "cbf4b9f70470856bb4f40f80b87edb90865997ffee6df315ab166d713af433a5";
const LEGACY_PASSPHRASE: &str = "TestingOneTwoThree";

const N3_NEP2: &str = "6PYUUUFei9PBBfVkSn8q7hFCnewWFRBKPxcn6Kz6Bmk3FqWyLyuTQE2XFH";
const N3_KEY: &str = "7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344";
const N3_PASSPHRASE: &str = "city of zion";

#[test]
fn test_decrypt_legacy_reference_vector() {
    let key = decrypt_legacy(LEGACY_NEP2, LEGACY_PASSPHRASE).unwrap();
    assert_eq!(key.as_str(), LEGACY_KEY);
}

#[test]
fn test_decrypt_standard_reference_vector() {
    let key = decrypt_standard(N3_NEP2, N3_PASSPHRASE).unwrap();
    assert_eq!(key.as_str(), N3_KEY);
    assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_decrypt_errors() {
    assert_eq!(
        decrypt_standard(N3_NEP2, "city of zion!").unwrap_err(),
        DecryptError::WrongPassphraseOrCorruptInput
    );
    assert_eq!(
        decrypt_standard("6PRVWUbkNgzkjK3jq3qYbsqU7A5RGvvfNyqJvF5gXcHGmT8GKwvuyJJaTW", "TestingOneTwoThree")
            .unwrap_err(),
        DecryptError::MalformedInput
    );
    assert_eq!(
        decrypt_legacy("", "").unwrap_err(),
        DecryptError::MalformedInput
    );
}

#[test]
fn test_error_messages_do_not_leak_passphrase() {
    let passphrase = "super secret passphrase";
    let err = decrypt_standard(N3_NEP2, passphrase).unwrap_err();
    assert!(!err.to_string().contains(passphrase));
    assert!(!format!("{err:?}").contains(passphrase));
}

#[test]
fn test_decrypt_account() {
    let account = decrypt_account(Nep2Variant::Standard, N3_NEP2, N3_PASSPHRASE).unwrap();
    assert_eq!(account.address, "NPTmAHDxo6Pkyic8Nvu3kwyXoYJCvcCB6i");
    assert_eq!(account.key, N3_KEY);
    assert!(!format!("{account:?}").contains(N3_KEY));

    let legacy = decrypt_account(Nep2Variant::Legacy, LEGACY_NEP2, LEGACY_PASSPHRASE).unwrap();
    assert_eq!(legacy.address, "AStZHy8E6StCqYQbzMqi4poH7YNDHQKxvt");
}

#[test]
fn test_encrypt_matches_reference_vectors() {
    assert_eq!(encrypt(Nep2Variant::Legacy, LEGACY_KEY, LEGACY_PASSPHRASE).unwrap(), LEGACY_NEP2);
    assert_eq!(encrypt(Nep2Variant::Standard, N3_KEY, N3_PASSPHRASE).unwrap(), N3_NEP2);
    assert_eq!(
        encrypt(
            Nep2Variant::Standard,
            "L1QqQJnpBwbsPGAuutuzPTac8piqvbR1HRjrY5qHup48TBCBFe4g",
            N3_PASSPHRASE
        )
        .unwrap(),
        N3_NEP2
    );
    assert_eq!(
        encrypt(Nep2Variant::Standard, "not a key", "pwd").unwrap_err(),
        DecryptError::InvalidKeyInput
    );
}

#[test]
fn test_validate_encrypted() {
    assert!(validate_encrypted(N3_NEP2));
    assert!(validate_encrypted(LEGACY_NEP2));
    assert!(!validate_encrypted(N3_KEY));
    assert!(!validate_encrypted("6PYUUUFei9PBBfVkSn8q7hFCnewWFRBKPxcn6Kz6Bmk3FqWyLyuTQE2XFh"));
}

#[test]
fn test_custom_scrypt_parameters() {
    let params = ScryptParameters::fast();
    let nep2 = wallets::KeyPair::from_hex(N3_KEY)
        .unwrap()
        .to_nep2("pwd", Nep2Variant::Standard, &params)
        .unwrap();

    let key = decrypt_with_params(Nep2Variant::Standard, &nep2, "pwd", &params).unwrap();
    assert_eq!(key.as_str(), N3_KEY);

    // the default parameters derive a different key
    assert_eq!(
        decrypt_standard(&nep2, "pwd").unwrap_err(),
        DecryptError::WrongPassphraseOrCorruptInput
    );
}

#[tokio::test]
async fn test_decrypt_async() {
    let key = decrypt_async(
        Nep2Variant::Standard,
        N3_NEP2.to_string(),
        Zeroizing::new(N3_PASSPHRASE.to_string()),
    )
    .await
    .unwrap();
    assert_eq!(key.as_str(), N3_KEY);
}

#[tokio::test]
async fn test_concurrent_decryptions() {
    let standard = tokio::spawn(decrypt_async(
        Nep2Variant::Standard,
        N3_NEP2.to_string(),
        Zeroizing::new(N3_PASSPHRASE.to_string()),
    ));
    let legacy = tokio::spawn(decrypt_async(
        Nep2Variant::Legacy,
        LEGACY_NEP2.to_string(),
        Zeroizing::new(LEGACY_PASSPHRASE.to_string()),
    ));

    assert_eq!(standard.await.unwrap().unwrap().as_str(), N3_KEY);
    assert_eq!(legacy.await.unwrap().unwrap().as_str(), LEGACY_KEY);
}
