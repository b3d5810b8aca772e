//! Public verification keys

use k256::ecdsa::VerifyingKey;

use crate::error::CryptoError;
use crate::key_type::{KeyParameters, KeyType};

/// Serialized public key bound to its algorithm
///
/// Stored form is the canonical encoding for the curve: 33-byte SEC1
/// compressed points for secp256k1, 32 raw bytes for ed25519.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    key_type: KeyType,
    parameters: KeyParameters,
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Build a public key from its canonical encoding, validating the point
    pub fn from_bytes(
        bytes: &[u8],
        key_type: KeyType,
        parameters: KeyParameters,
    ) -> Result<Self, CryptoError> {
        if !parameters.compatible_with(key_type) {
            return Err(CryptoError::IncompatibleParameters);
        }
        match key_type {
            KeyType::Ecdsa => {
                if bytes.len() != 33 {
                    return Err(CryptoError::InvalidPublicKey);
                }
                VerifyingKey::from_sec1_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
            }
            KeyType::Ed25519 => {
                ed25519_compact::PublicKey::from_slice(bytes)
                    .map_err(|_| CryptoError::InvalidPublicKey)?;
            }
        }
        Ok(PublicKey {
            key_type,
            parameters,
            bytes: bytes.to_vec(),
        })
    }

    /// Build a public key from its hex encoding
    pub fn from_hex(
        hex_str: &str,
        key_type: KeyType,
        parameters: KeyParameters,
    ) -> Result<Self, CryptoError> {
        let bytes = hex::decode(hex_str).map_err(|_| CryptoError::InvalidPublicKey)?;
        PublicKey::from_bytes(&bytes, key_type, parameters)
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn parameters(&self) -> KeyParameters {
        self.parameters
    }

    /// Canonical serialized form
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hex encoding of the canonical form, as persisted in records
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}
