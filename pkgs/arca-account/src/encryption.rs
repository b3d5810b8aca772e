//! Credential sealing with scrypt key stretching and AES-256-GCM
//!
//! The account's address string is fed to the cipher as associated data, so
//! a credential sealed for one address cannot be opened as another account's
//! key: the tag check fails instead of handing back wrong bytes.
//!
//! Sealed layout, base64 encoded: `nonce (12) || ciphertext || tag (16)`.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::AccountError;

/// AES-GCM nonce size in bytes
const NONCE_LEN: usize = 12;
/// AES-GCM authentication tag size in bytes
const TAG_LEN: usize = 16;
/// Key-stretching salt size in bytes
pub const SALT_LEN: usize = 16;

/// scrypt cost parameters used to stretch a password into a symmetric key
///
/// The profile in force at sealing time must be supplied again at opening
/// time; it is carried on the account rather than hidden in a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScryptProfile {
    /// CPU/memory cost, a power of two
    pub cost: u32,
    /// Block size factor
    pub block_size: u32,
    /// Parallelism factor
    pub parallelism: u32,
    /// Derived key length in bytes, at least 32
    pub key_length: u32,
}

impl Default for ScryptProfile {
    fn default() -> Self {
        ScryptProfile {
            cost: 4096,
            block_size: 8,
            parallelism: 8,
            key_length: 32,
        }
    }
}

impl ScryptProfile {
    fn params(&self) -> Result<scrypt::Params, AccountError> {
        if !self.cost.is_power_of_two() || self.cost < 2 || self.key_length < 32 {
            return Err(AccountError::InvalidCostProfile);
        }
        let log_n = self.cost.trailing_zeros() as u8;
        scrypt::Params::new(
            log_n,
            self.block_size,
            self.parallelism,
            self.key_length as usize,
        )
        .map_err(|_| AccountError::InvalidCostProfile)
    }
}

/// Stretch `password` into an AES-256 key under the given profile
fn derive_key(
    password: &str,
    salt: &[u8],
    profile: &ScryptProfile,
) -> Result<Zeroizing<Vec<u8>>, AccountError> {
    let params = profile.params()?;
    let mut output = Zeroizing::new(vec![0u8; profile.key_length as usize]);
    scrypt::scrypt(password.as_bytes(), salt, &params, &mut output)
        .map_err(|_| AccountError::InvalidCostProfile)?;
    Ok(output)
}

/// Generate a fresh key-stretching salt
pub fn random_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Seal raw private-key bytes under a password, bound to `address`
///
/// With a valid cost profile this never fails: stretching is deterministic
/// and the cipher inputs are well formed by construction.
pub fn encrypt_with_gcm(
    private_key: &[u8],
    address: &str,
    salt: &[u8],
    password: &str,
    profile: &ScryptProfile,
) -> Result<String, AccountError> {
    let derived = derive_key(password, salt, profile)?;
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&derived[..32]));

    // Fresh nonce per seal; reusing one under the same derived key would
    // break GCM entirely.
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(
            nonce,
            Payload {
                msg: private_key,
                aad: address.as_bytes(),
            },
        )
        .map_err(|_| AccountError::AuthenticationFailure)?;

    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(blob))
}

/// Open a sealed credential, verifying the tag against `address`
///
/// Wrong password, wrong address and tampered ciphertext all surface as
/// [`AccountError::AuthenticationFailure`]; only structural problems with
/// the encoding itself are reported as [`AccountError::MalformedCredential`].
pub fn decrypt_with_gcm(
    encrypted: &str,
    address: &str,
    salt: &[u8],
    password: &str,
    profile: &ScryptProfile,
) -> Result<Zeroizing<Vec<u8>>, AccountError> {
    let blob = BASE64
        .decode(encrypted)
        .map_err(|_| AccountError::MalformedCredential)?;
    if blob.len() < NONCE_LEN + TAG_LEN {
        return Err(AccountError::MalformedCredential);
    }
    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);

    let derived = derive_key(password, salt, profile)?;
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&derived[..32]));

    let plaintext = cipher
        .decrypt(
            Nonce::from_slice(nonce_bytes),
            Payload {
                msg: ciphertext,
                aad: address.as_bytes(),
            },
        )
        .map_err(|_| AccountError::AuthenticationFailure)?;

    Ok(Zeroizing::new(plaintext))
}
