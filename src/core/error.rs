//! Custom error types for the front end.
//!
//! - [`WalletError`] - EIP-1193 wallet connection and request errors
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`StorageError`] - localStorage and file reading errors
//! - [`MintError`] - Minting flow failures

use oke_core::AbiError;
use thiserror::Error;

/// Wallet-related errors for MetaMask/EIP-1193 integration.
#[derive(Debug, Clone, Error)]
pub enum WalletError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("MetaMask not installed. Please install MetaMask extension.")]
    NotInstalled,
    #[error("Failed to create wallet request")]
    RequestCreationFailed,
    #[error("Wallet request rejected: {0}")]
    RequestRejected(String),
    #[error("No account returned from wallet")]
    NoAccount,
    #[error("Unexpected wallet response for {0}")]
    InvalidResponse(&'static str),
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (timeout, CORS, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

/// localStorage and file access errors.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    Unavailable,
    #[error("failed to serialize: {0}")]
    Serialize(String),
    #[error("failed to write to localStorage (quota exceeded?)")]
    WriteFailed,
    #[error("failed to read file: {0}")]
    ReadFile(String),
}

/// Minting flow failures, shown in the overlay and the error banner.
#[derive(Debug, Clone, Error)]
pub enum MintError {
    #[error("Connect a wallet before minting")]
    NoSession,
    #[error("No minting contract is deployed on chain {chain_id}")]
    NoContract { chain_id: u64 },
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error("Bad contract response: {0}")]
    Abi(#[from] AbiError),
    #[error("No receipt after {attempts} checks, the transaction may still confirm")]
    Timeout { attempts: u32 },
}
