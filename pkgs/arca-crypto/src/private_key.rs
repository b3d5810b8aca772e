//! Private signing keys
//!
//! A private key is 32 raw bytes plus the algorithm and curve parameters it
//! belongs to. The bytes are zeroized when the key is dropped.

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::key_type::{KeyParameters, KeyType};
use crate::public_key::PublicKey;

/// Raw private key bound to its algorithm
pub struct PrivateKey {
    key_type: KeyType,
    parameters: KeyParameters,
    bytes: Zeroizing<Vec<u8>>,
}

impl PrivateKey {
    /// Generate a fresh key from the OS entropy source
    pub fn random(key_type: KeyType) -> Self {
        let bytes = match key_type {
            KeyType::Ecdsa => SigningKey::random(&mut OsRng).to_bytes().to_vec(),
            KeyType::Ed25519 => {
                let mut seed = [0u8; 32];
                OsRng.fill_bytes(&mut seed);
                seed.to_vec()
            }
        };
        PrivateKey {
            key_type,
            parameters: KeyParameters::default_for(key_type),
            bytes: Zeroizing::new(bytes),
        }
    }

    /// Build a key from raw scalar/seed bytes, validating them for the curve
    pub fn from_bytes(
        bytes: &[u8],
        key_type: KeyType,
        parameters: KeyParameters,
    ) -> Result<Self, CryptoError> {
        if !parameters.compatible_with(key_type) {
            return Err(CryptoError::IncompatibleParameters);
        }
        if bytes.len() != 32 {
            return Err(CryptoError::InvalidPrivateKey);
        }
        match key_type {
            KeyType::Ecdsa => {
                SigningKey::from_slice(bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;
            }
            KeyType::Ed25519 => {
                ed25519_compact::Seed::from_slice(bytes)
                    .map_err(|_| CryptoError::InvalidPrivateKey)?;
            }
        }
        Ok(PrivateKey {
            key_type,
            parameters,
            bytes: Zeroizing::new(bytes.to_vec()),
        })
    }

    /// Build a key from a hex string
    pub fn from_hex(
        hex_str: &str,
        key_type: KeyType,
        parameters: KeyParameters,
    ) -> Result<Self, CryptoError> {
        let bytes = hex::decode(hex_str).map_err(|_| CryptoError::InvalidPrivateKey)?;
        PrivateKey::from_bytes(&bytes, key_type, parameters)
    }

    /// Compute the verification key
    pub fn public_key(&self) -> Result<PublicKey, CryptoError> {
        let bytes = match self.key_type {
            KeyType::Ecdsa => {
                let signing = SigningKey::from_slice(&self.bytes)
                    .map_err(|_| CryptoError::InvalidPrivateKey)?;
                signing
                    .verifying_key()
                    .to_encoded_point(true)
                    .as_bytes()
                    .to_vec()
            }
            KeyType::Ed25519 => {
                let seed = ed25519_compact::Seed::from_slice(&self.bytes)
                    .map_err(|_| CryptoError::InvalidPrivateKey)?;
                ed25519_compact::KeyPair::from_seed(seed).pk.to_vec()
            }
        };
        PublicKey::from_bytes(&bytes, self.key_type, self.parameters)
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn parameters(&self) -> KeyParameters {
        self.parameters
    }

    /// Raw key bytes. Handle with care and drop as soon as possible.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

// Redacted: key bytes must never end up in logs.
impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("key_type", &self.key_type)
            .field("parameters", &self.parameters)
            .field("bytes", &"<redacted>")
            .finish()
    }
}
