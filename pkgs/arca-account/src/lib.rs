//! Password-protected wallet accounts
//!
//! This crate provides functionality for managing wallet accounts, including:
//! - Account creation from fresh keys and recovery phrases
//! - Password-based credential sealing (scrypt + AES-256-GCM, address-bound)
//! - Import of previously sealed credentials with address re-verification
//! - The flat storage record wallets persist and exchange

pub mod account;
pub mod encryption;
pub mod error;
pub mod record;
pub mod task;

pub use account::Account;
pub use encryption::{decrypt_with_gcm, encrypt_with_gcm, random_salt, ScryptProfile, SALT_LEN};
pub use error::AccountError;
pub use record::{AccountRecord, KeyParametersRecord, ENC_ALG, HASH_ALG};
