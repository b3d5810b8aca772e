//! Key algorithm and curve parameter labels
//!
//! The labels are the exact strings persisted in account records, so they
//! must stay stable across releases.

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

/// Signature algorithm of a keypair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    /// ECDSA over a short Weierstrass curve
    Ecdsa,
    /// Ed25519 signatures
    Ed25519,
}

impl KeyType {
    /// Record label for this algorithm
    pub fn label(&self) -> &'static str {
        match self {
            KeyType::Ecdsa => "ECDSA",
            KeyType::Ed25519 => "EdDSA",
        }
    }

    /// Resolve a record label back to an algorithm
    pub fn from_label(label: &str) -> Result<Self, CryptoError> {
        match label {
            "ECDSA" => Ok(KeyType::Ecdsa),
            "EdDSA" => Ok(KeyType::Ed25519),
            other => Err(CryptoError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Elliptic curve a key lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Curve {
    Secp256k1,
    Ed25519,
}

impl Curve {
    /// Record label for this curve
    pub fn label(&self) -> &'static str {
        match self {
            Curve::Secp256k1 => "secp256k1",
            Curve::Ed25519 => "ed25519",
        }
    }

    /// Resolve a record label back to a curve
    pub fn from_label(label: &str) -> Result<Self, CryptoError> {
        match label {
            "secp256k1" => Ok(Curve::Secp256k1),
            "ed25519" => Ok(Curve::Ed25519),
            other => Err(CryptoError::UnknownCurve(other.to_string())),
        }
    }
}

/// Curve parameters attached to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyParameters {
    pub curve: Curve,
}

impl KeyParameters {
    pub fn new(curve: Curve) -> Self {
        KeyParameters { curve }
    }

    /// Default curve parameters for an algorithm
    pub fn default_for(key_type: KeyType) -> Self {
        match key_type {
            KeyType::Ecdsa => KeyParameters::new(Curve::Secp256k1),
            KeyType::Ed25519 => KeyParameters::new(Curve::Ed25519),
        }
    }

    /// Whether this algorithm/curve combination is implemented
    pub fn compatible_with(&self, key_type: KeyType) -> bool {
        matches!(
            (key_type, self.curve),
            (KeyType::Ecdsa, Curve::Secp256k1) | (KeyType::Ed25519, Curve::Ed25519)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for kt in [KeyType::Ecdsa, KeyType::Ed25519] {
            assert_eq!(KeyType::from_label(kt.label()).unwrap(), kt);
        }
        for curve in [Curve::Secp256k1, Curve::Ed25519] {
            assert_eq!(Curve::from_label(curve.label()).unwrap(), curve);
        }
    }

    #[test]
    fn unknown_labels_rejected() {
        assert!(matches!(
            KeyType::from_label("SM2"),
            Err(CryptoError::UnknownAlgorithm(_))
        ));
        assert!(matches!(
            Curve::from_label("p256"),
            Err(CryptoError::UnknownCurve(_))
        ));
    }

    #[test]
    fn incompatible_parameters_detected() {
        let params = KeyParameters::new(Curve::Ed25519);
        assert!(!params.compatible_with(KeyType::Ecdsa));
        assert!(params.compatible_with(KeyType::Ed25519));
    }
}
