//! Key arithmetic collaborators for Arca wallet accounts
//!
//! This crate provides the fixed-contract building blocks the account layer
//! composes:
//! - Key algorithm and curve parameter labels
//! - Private and public keys (secp256k1 ECDSA, Ed25519)
//! - Canonical 20-byte addresses with a Base58Check string form
//! - BIP-39 mnemonic validation and BIP-44 child key derivation

pub mod address;
pub mod error;
pub mod key_derivation;
pub mod key_type;
pub mod private_key;
pub mod public_key;

pub use address::{Address, ADDRESS_VERSION};
pub use error::CryptoError;
pub use key_derivation::{mnemonic_to_private_key, validate_mnemonic, BIP44_DERIVATION_PATH};
pub use key_type::{Curve, KeyParameters, KeyType};
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
