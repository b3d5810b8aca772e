//! Wallet accounts
//!
//! An account binds a keypair to a display label and a password-sealed copy
//! of the private key. Identity fields (address, public key, credential,
//! salt) are fixed at construction; only the label and the wallet-management
//! flags may change afterwards.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, info};

use arca_crypto::{
    key_derivation, Address, CryptoError, KeyParameters, KeyType, PrivateKey, PublicKey,
};

use crate::encryption::{decrypt_with_gcm, encrypt_with_gcm, random_salt, ScryptProfile};
use crate::error::AccountError;

/// A single wallet identity with a password-protected private key
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    address: Address,
    label: String,
    lock: bool,
    is_default: bool,
    encrypted_key: String,
    salt: Vec<u8>,
    public_key: PublicKey,
    scrypt: ScryptProfile,
    extra: Option<serde_json::Value>,
}

impl Account {
    /// Create an account around an existing private key
    ///
    /// Generates a fresh salt, derives the address, and seals the key under
    /// `password` with the address as associated data. An empty label is
    /// replaced by a random one.
    pub fn create(
        label: &str,
        private_key: &PrivateKey,
        password: &str,
        scrypt: ScryptProfile,
    ) -> Result<Self, AccountError> {
        let salt = random_salt();
        let public_key = private_key.public_key()?;
        let address = Address::from_public_key(&public_key);

        let encrypted_key = encrypt_with_gcm(
            private_key.as_bytes(),
            &address.to_base58(),
            &salt,
            password,
            &scrypt,
        )?;

        let account = Account {
            address,
            label: normalize_label(label),
            lock: false,
            is_default: false,
            encrypted_key,
            salt: salt.to_vec(),
            public_key,
            scrypt,
            extra: None,
        };
        info!(address = %account.address, "created account");
        Ok(account)
    }

    /// Create an account from a BIP-39 recovery phrase
    ///
    /// The address depends only on the phrase; the password merely seals the
    /// derived key.
    pub fn from_mnemonic(
        label: &str,
        mnemonic: &str,
        password: &str,
        scrypt: ScryptProfile,
    ) -> Result<Self, AccountError> {
        let private_key = key_derivation::mnemonic_to_private_key(mnemonic).map_err(|e| match e {
            CryptoError::InvalidMnemonic => AccountError::InvalidMnemonic,
            other => AccountError::Crypto(other),
        })?;
        Account::create(label, &private_key, password, scrypt)
    }

    /// Import a previously sealed credential
    ///
    /// Opens the credential with `address` as the claimed binding, rebuilds
    /// the public key from the recovered bytes, and re-derives the address.
    /// A disagreement with the claimed address fails with
    /// [`AccountError::AddressMismatch`] even though the cipher's associated
    /// data already checked it: the claimed address may come from a record
    /// that was never validated against the key, and the recomputation does
    /// not trust the cipher layer to have done it.
    #[allow(clippy::too_many_arguments)]
    pub fn import_encrypted(
        label: &str,
        encrypted_key: &str,
        key_type: KeyType,
        parameters: KeyParameters,
        password: &str,
        address: &str,
        salt_base64: &str,
        scrypt: ScryptProfile,
    ) -> Result<Self, AccountError> {
        use base64::engine::general_purpose::STANDARD as BASE64;
        use base64::Engine as _;

        let salt = BASE64
            .decode(salt_base64)
            .map_err(|_| AccountError::MalformedRecord("salt is not valid base64".into()))?;

        let sk_bytes = decrypt_with_gcm(encrypted_key, address, &salt, password, &scrypt)?;
        let private_key = PrivateKey::from_bytes(&sk_bytes, key_type, parameters)?;
        let public_key = private_key.public_key()?;

        let derived = Address::from_public_key(&public_key);
        let claimed = Address::from_base58(address)?;
        if derived != claimed {
            return Err(AccountError::AddressMismatch {
                claimed: claimed.to_base58(),
                derived: derived.to_base58(),
            });
        }

        let account = Account {
            address: derived,
            label: normalize_label(label),
            lock: false,
            is_default: false,
            encrypted_key: encrypted_key.to_string(),
            salt,
            public_key,
            scrypt,
            extra: None,
        };
        info!(address = %account.address, "imported account");
        Ok(account)
    }

    /// Recover the private key by password
    ///
    /// Never mutates the account. Wrong passwords, a credential sealed for a
    /// different address, and corruption are all reported as
    /// [`AccountError::AuthenticationFailure`].
    pub fn decrypt_key(&self, password: &str) -> Result<PrivateKey, AccountError> {
        debug!(address = %self.address, "decrypting account credential");
        let sk_bytes = decrypt_with_gcm(
            &self.encrypted_key,
            &self.address.to_base58(),
            &self.salt,
            password,
            &self.scrypt,
        )?;
        let private_key = PrivateKey::from_bytes(
            &sk_bytes,
            self.public_key.key_type(),
            self.public_key.parameters(),
        )?;
        Ok(private_key)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn lock(&self) -> bool {
        self.lock
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn encrypted_key(&self) -> &str {
        &self.encrypted_key
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn scrypt(&self) -> &ScryptProfile {
        &self.scrypt
    }

    pub fn extra(&self) -> Option<&serde_json::Value> {
        self.extra.as_ref()
    }

    // Wallet-management mutators. A wallet manager flips these; they have no
    // effect on the sealed credential.

    pub fn set_label(&mut self, label: &str) {
        self.label = normalize_label(label);
    }

    pub fn set_lock(&mut self, lock: bool) {
        self.lock = lock;
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    /// Attach opaque data carried through (de)serialization untouched
    pub fn set_extra(&mut self, extra: Option<serde_json::Value>) {
        self.extra = extra;
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        address: Address,
        label: String,
        lock: bool,
        is_default: bool,
        encrypted_key: String,
        salt: Vec<u8>,
        public_key: PublicKey,
        scrypt: ScryptProfile,
        extra: Option<serde_json::Value>,
    ) -> Self {
        Account {
            address,
            label,
            lock,
            is_default,
            encrypted_key,
            salt,
            public_key,
            scrypt,
            extra,
        }
    }
}

/// Replace an empty label with a random 8-hex-char one
fn normalize_label(label: &str) -> String {
    if label.is_empty() {
        let mut bytes = [0u8; 4];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    } else {
        label.to_string()
    }
}
