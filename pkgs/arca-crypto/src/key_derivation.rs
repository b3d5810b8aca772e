//! Mnemonic validation and hierarchical key derivation
//!
//! Derivation always happens at [`BIP44_DERIVATION_PATH`]. The path is a
//! protocol constant: wallets on other stacks derive the same account from
//! the same phrase, so it must never change.

use bip32::{DerivationPath, XPrv};
use bip39::{Language, Mnemonic};

use crate::error::CryptoError;
use crate::key_type::{Curve, KeyParameters, KeyType};
use crate::private_key::PrivateKey;

/// First external account under the wallet's purpose/coin-type pair
pub const BIP44_DERIVATION_PATH: &str = "m/44'/1024'/0'/0/0";

/// Whether a phrase passes BIP-39 wordlist and checksum validation
pub fn validate_mnemonic(phrase: &str) -> bool {
    Mnemonic::parse_in_normalized(Language::English, phrase.trim()).is_ok()
}

/// Derive the account private key for a mnemonic phrase
///
/// The phrase is trimmed and parsed as English BIP-39, expanded to a 64-byte
/// seed with an empty passphrase, then walked down the fixed derivation
/// path. The same phrase always yields the same key.
pub fn mnemonic_to_private_key(phrase: &str) -> Result<PrivateKey, CryptoError> {
    let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase.trim())
        .map_err(|_| CryptoError::InvalidMnemonic)?;
    let seed = mnemonic.to_seed("");
    let seed_bytes: &[u8] = seed.as_ref();

    let path: DerivationPath = BIP44_DERIVATION_PATH
        .parse()
        .map_err(|_| CryptoError::Derivation)?;
    let child = XPrv::derive_from_path(seed_bytes, &path).map_err(|_| CryptoError::Derivation)?;

    let key_bytes: [u8; 32] = child.private_key().to_bytes().into();
    PrivateKey::from_bytes(
        &key_bytes,
        KeyType::Ecdsa,
        KeyParameters::new(Curve::Secp256k1),
    )
}
