//! Error types for the domain model.
//!
//! - [`CreatorError`] - Creator draft validation
//! - [`ConfigError`] - Deployment configuration parsing
//! - [`AbiError`] - Mint call encoding and receipt decoding

use thiserror::Error;

/// Why a creator draft cannot be turned into a mint request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreatorError {
    #[error("choose an image to mint")]
    MissingFile,
    #[error("transcript must not be empty")]
    EmptyTranscript,
    #[error("acknowledge the minting options before continuing")]
    OptionsNotAcknowledged,
    #[error("file is {size} bytes, the limit is {limit} bytes")]
    FileTooLarge { size: usize, limit: usize },
    #[error("unsupported file type '{0}' (images only)")]
    UnsupportedType(String),
}

/// Deployment configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid deploy config: {0}")]
    Parse(String),
    #[error("network '{network}' has an invalid contract address '{value}'")]
    InvalidContract { network: String, value: String },
    #[error("private key must be 32 bytes of hex")]
    InvalidPrivateKey,
}

/// Contract call encoding and receipt decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    #[error("invalid hex in {field}")]
    InvalidHex { field: &'static str },
    #[error("receipt has no Transfer event from {0}")]
    MissingTransfer(String),
    #[error("token id does not fit in 64 bits")]
    TokenIdOverflow,
    #[error("transaction reverted")]
    Reverted,
}
