//! Error types for key handling and derivation

/// Errors raised by key construction, address decoding and HD derivation
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("invalid private key bytes")]
    InvalidPrivateKey,

    #[error("invalid public key bytes")]
    InvalidPublicKey,

    #[error("invalid address encoding")]
    InvalidAddress,

    #[error("unknown key algorithm label: {0}")]
    UnknownAlgorithm(String),

    #[error("unknown curve label: {0}")]
    UnknownCurve(String),

    #[error("key algorithm does not support the given curve parameters")]
    IncompatibleParameters,

    #[error("invalid mnemonic phrase")]
    InvalidMnemonic,

    #[error("child key derivation failed")]
    Derivation,
}
