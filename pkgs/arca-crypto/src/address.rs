//! Canonical account addresses
//!
//! An address is the 20-byte keccak-256 tail of the serialized public key,
//! displayed as Base58Check with a fixed version byte. The 20-byte core is
//! the canonical identity; the string form is what records and user
//! interfaces carry.

use keccak_hash::keccak;

use crate::error::CryptoError;
use crate::public_key::PublicKey;

/// Version byte prepended to the 20-byte core before Base58Check encoding.
/// Gives every address an `A` prefix.
pub const ADDRESS_VERSION: u8 = 0x17;

/// 20-byte account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Derive the address of a public key
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let digest = keccak(public_key.as_bytes());
        let mut core = [0u8; 20];
        core.copy_from_slice(&digest.0[12..32]);
        Address(core)
    }

    /// Parse a Base58Check address string, validating version and checksum
    pub fn from_base58(encoded: &str) -> Result<Self, CryptoError> {
        let decoded = bs58::decode(encoded)
            .with_check(Some(ADDRESS_VERSION))
            .into_vec()
            .map_err(|_| CryptoError::InvalidAddress)?;
        // with_check keeps the version byte at the front
        if decoded.len() != 21 {
            return Err(CryptoError::InvalidAddress);
        }
        let mut core = [0u8; 20];
        core.copy_from_slice(&decoded[1..]);
        Ok(Address(core))
    }

    /// Base58Check string form
    pub fn to_base58(&self) -> String {
        bs58::encode(&self.0)
            .with_check_version(ADDRESS_VERSION)
            .into_string()
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl std::str::FromStr for Address {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_base58(s)
    }
}
