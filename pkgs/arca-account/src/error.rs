//! Account error taxonomy
//!
//! `AuthenticationFailure` deliberately covers wrong passwords, wrong
//! address bindings and corrupted ciphertext without distinguishing them:
//! telling a caller which input was wrong is an oracle.

use arca_crypto::CryptoError;

/// Errors raised by account construction and credential recovery
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("invalid mnemonic phrase")]
    InvalidMnemonic,

    #[error("credential authentication failed")]
    AuthenticationFailure,

    #[error("decrypted key derives address {derived}, record claims {claimed}")]
    AddressMismatch { claimed: String, derived: String },

    #[error("malformed encrypted credential")]
    MalformedCredential,

    #[error("malformed account record: {0}")]
    MalformedRecord(String),

    #[error("invalid key-stretching cost profile")]
    InvalidCostProfile,

    #[error("operation exceeded its deadline")]
    OperationTimedOut,

    #[error("background task failed")]
    TaskFailure,

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
