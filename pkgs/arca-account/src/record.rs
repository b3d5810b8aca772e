//! Storage record codec
//!
//! Maps an [`Account`] to the flat record wallets persist and exchange. The
//! field names and encodings are a wire format: `address` is Base58Check,
//! `publicKey` is hex, `salt` is base64, and the cipher identifiers are
//! fixed constants. Decoding never decrypts; recovering the key is a
//! separate, password-requiring step.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use arca_crypto::{Address, Curve, KeyType, PublicKey};

use crate::account::Account;
use crate::encryption::ScryptProfile;
use crate::error::AccountError;

/// Cipher identifier persisted in every record
pub const ENC_ALG: &str = "aes-256-gcm";
/// Key-stretching hash identifier persisted in every record
pub const HASH_ALG: &str = "sha256";

/// Curve parameters as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyParametersRecord {
    pub curve: String,
}

/// Flat persisted form of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub address: String,
    pub label: String,
    pub lock: bool,
    pub key: String,
    #[serde(rename = "enc-alg")]
    pub enc_alg: String,
    pub hash: String,
    pub salt: String,
    #[serde(rename = "isDefault")]
    pub is_default: bool,
    #[serde(rename = "publicKey")]
    pub public_key: String,
    pub algorithm: String,
    pub parameters: KeyParametersRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl Account {
    /// Serialize to the persisted record form
    pub fn to_record(&self) -> AccountRecord {
        AccountRecord {
            address: self.address().to_base58(),
            label: self.label().to_string(),
            lock: self.lock(),
            key: self.encrypted_key().to_string(),
            enc_alg: ENC_ALG.to_string(),
            hash: HASH_ALG.to_string(),
            salt: BASE64.encode(self.salt()),
            is_default: self.is_default(),
            public_key: self.public_key().to_hex(),
            algorithm: self.public_key().key_type().label().to_string(),
            parameters: KeyParametersRecord {
                curve: self.public_key().parameters().curve.label().to_string(),
            },
            extra: self.extra().cloned(),
        }
    }

    /// Rebuild an account from its persisted record
    ///
    /// Trusts the record as already-validated local state: the address is
    /// parsed but not re-derived from the public key. Records from untrusted
    /// sources go through [`Account::import_encrypted`] instead, which does
    /// re-derive and compare.
    pub fn from_record(record: AccountRecord, scrypt: ScryptProfile) -> Result<Self, AccountError> {
        if record.enc_alg != ENC_ALG {
            return Err(AccountError::MalformedRecord(format!(
                "unsupported cipher: {}",
                record.enc_alg
            )));
        }
        if record.hash != HASH_ALG {
            return Err(AccountError::MalformedRecord(format!(
                "unsupported hash: {}",
                record.hash
            )));
        }

        let address = Address::from_base58(&record.address)
            .map_err(|_| AccountError::MalformedRecord("address is not valid base58".into()))?;
        let salt = BASE64
            .decode(&record.salt)
            .map_err(|_| AccountError::MalformedRecord("salt is not valid base64".into()))?;

        let key_type = KeyType::from_label(&record.algorithm)
            .map_err(|e| AccountError::MalformedRecord(e.to_string()))?;
        let curve = Curve::from_label(&record.parameters.curve)
            .map_err(|e| AccountError::MalformedRecord(e.to_string()))?;
        let public_key = PublicKey::from_hex(
            &record.public_key,
            key_type,
            arca_crypto::KeyParameters::new(curve),
        )
        .map_err(|_| AccountError::MalformedRecord("public key is not a valid point".into()))?;

        Ok(Account::from_parts(
            address,
            record.label,
            record.lock,
            record.is_default,
            record.key,
            salt,
            public_key,
            scrypt,
            record.extra,
        ))
    }
}
