//! Account lifecycle tests
//!
//! Covers the construction paths, credential recovery, mnemonic
//! determinism, and the storage record round trip.

use arca_account::{Account, ScryptProfile};
use arca_crypto::{KeyType, PrivateKey};

const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
const TEST_PASSWORD: &str = "Pass123";

fn test_profile() -> ScryptProfile {
    ScryptProfile {
        cost: 256,
        block_size: 8,
        parallelism: 1,
        key_length: 32,
    }
}

#[test]
fn create_and_decrypt_round_trip() {
    let key = PrivateKey::random(KeyType::Ecdsa);
    let account = Account::create("main", &key, TEST_PASSWORD, test_profile()).unwrap();

    assert_eq!(account.label(), "main");
    assert!(!account.lock());
    assert!(!account.is_default());

    let recovered = account.decrypt_key(TEST_PASSWORD).unwrap();
    assert_eq!(recovered.as_bytes(), key.as_bytes());
    assert_eq!(recovered.key_type(), KeyType::Ecdsa);
}

#[test]
fn create_and_decrypt_ed25519() {
    let key = PrivateKey::random(KeyType::Ed25519);
    let account = Account::create("ed", &key, TEST_PASSWORD, test_profile()).unwrap();
    let recovered = account.decrypt_key(TEST_PASSWORD).unwrap();
    assert_eq!(recovered.as_bytes(), key.as_bytes());
    assert_eq!(recovered.key_type(), KeyType::Ed25519);
}

#[test]
fn mnemonic_account_fixed_address() {
    let account =
        Account::from_mnemonic("main", TEST_MNEMONIC, TEST_PASSWORD, test_profile()).unwrap();
    assert_eq!(
        account.address().to_base58(),
        "Adpmztx2YbStG7nCGapX61PtzKx9u9UMpN"
    );
}

#[test]
fn mnemonic_address_independent_of_password_and_profile() {
    let a = Account::from_mnemonic("x", TEST_MNEMONIC, "first password", test_profile()).unwrap();
    let b =
        Account::from_mnemonic("y", TEST_MNEMONIC, "other password", ScryptProfile::default())
            .unwrap();
    assert_eq!(a.address(), b.address());
    assert_eq!(a.public_key(), b.public_key());
}

#[test]
fn empty_label_is_randomized() {
    let key = PrivateKey::random(KeyType::Ecdsa);
    let account = Account::create("", &key, TEST_PASSWORD, test_profile()).unwrap();
    assert_eq!(account.label().len(), 8);
    assert!(account.label().chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn management_flags_mutate() {
    let key = PrivateKey::random(KeyType::Ecdsa);
    let mut account = Account::create("flags", &key, TEST_PASSWORD, test_profile()).unwrap();

    account.set_lock(true);
    account.set_default(true);
    account.set_label("renamed");

    assert!(account.lock());
    assert!(account.is_default());
    assert_eq!(account.label(), "renamed");

    // Flag churn must not touch the sealed credential.
    let recovered = account.decrypt_key(TEST_PASSWORD).unwrap();
    assert_eq!(recovered.as_bytes(), key.as_bytes());
}

#[test]
fn record_round_trip_preserves_everything() {
    let key = PrivateKey::random(KeyType::Ecdsa);
    let mut account = Account::create("cold storage", &key, TEST_PASSWORD, test_profile()).unwrap();
    account.set_lock(true);
    account.set_default(true);
    account.set_extra(Some(serde_json::json!({ "origin": "ledger-import" })));

    let record = account.to_record();
    let restored = Account::from_record(record, test_profile()).unwrap();
    assert_eq!(restored, account);

    let recovered = restored.decrypt_key(TEST_PASSWORD).unwrap();
    assert_eq!(recovered.as_bytes(), key.as_bytes());
}

#[test]
fn record_survives_json_transport() {
    let account =
        Account::from_mnemonic("json", TEST_MNEMONIC, TEST_PASSWORD, test_profile()).unwrap();
    let json = serde_json::to_string(&account.to_record()).unwrap();
    let parsed: arca_account::AccountRecord = serde_json::from_str(&json).unwrap();
    let restored = Account::from_record(parsed, test_profile()).unwrap();
    assert_eq!(restored, account);
}

#[test]
fn import_round_trip() {
    let original =
        Account::from_mnemonic("imported", TEST_MNEMONIC, TEST_PASSWORD, test_profile()).unwrap();
    let record = original.to_record();

    let imported = Account::import_encrypted(
        "imported",
        &record.key,
        original.public_key().key_type(),
        original.public_key().parameters(),
        TEST_PASSWORD,
        &record.address,
        &record.salt,
        test_profile(),
    )
    .unwrap();

    assert_eq!(imported.address(), original.address());
    assert_eq!(imported.public_key(), original.public_key());
    let recovered = imported.decrypt_key(TEST_PASSWORD).unwrap();
    assert_eq!(
        recovered.as_bytes(),
        original.decrypt_key(TEST_PASSWORD).unwrap().as_bytes()
    );
}

#[test]
fn import_defaults_empty_label() {
    let original =
        Account::from_mnemonic("x", TEST_MNEMONIC, TEST_PASSWORD, test_profile()).unwrap();
    let record = original.to_record();

    let imported = Account::import_encrypted(
        "",
        &record.key,
        original.public_key().key_type(),
        original.public_key().parameters(),
        TEST_PASSWORD,
        &record.address,
        &record.salt,
        test_profile(),
    )
    .unwrap();
    assert_eq!(imported.label().len(), 8);
}

#[test]
fn salts_are_unique_per_account() {
    let key = PrivateKey::random(KeyType::Ecdsa);
    let a = Account::create("a", &key, TEST_PASSWORD, test_profile()).unwrap();
    let b = Account::create("b", &key, TEST_PASSWORD, test_profile()).unwrap();
    assert_ne!(a.salt(), b.salt());
    assert_ne!(a.encrypted_key(), b.encrypted_key());
}
