//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Deployment settings come from `oke-core`'s embedded `deploy.toml`, with
//! overrides captured from the build environment.

use std::sync::OnceLock;

use oke_core::DeployConfig;
use tracing::error;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "OkeStudio";

/// Tagline on the home screen.
pub const APP_TAGLINE: &str = "Turn a voice and an image into a token you keep.";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Collection index, relative to the page unless set at build time.
pub const COLLECTION_URL: &str = match option_env!("OKE_COLLECTION_URL") {
    Some(url) => url,
    None => "collection.json",
};

/// Allowed domains for item external links.
/// Links to other domains are not rendered.
pub const ALLOWED_REDIRECT_DOMAINS: &[&str] = &[
    "github.com",
    "twitter.com",
    "x.com",
    "opensea.io",
    "etherscan.io",
    "polygonscan.com",
    "ipfs.io",
    "mirror.xyz",
    "youtube.com",
    "youtu.be",
];

// =============================================================================
// Wallet Configuration
// =============================================================================

/// localStorage key for wallet session persistence.
pub const WALLET_SESSION_KEY: &str = "wallet_session";

/// Timeout for the silent account lookup on startup, in milliseconds.
pub const WALLET_TIMEOUT_MS: i32 = 2000;

// =============================================================================
// Minting Configuration
// =============================================================================

/// Minting receipt polling.
pub mod receipt {
    /// Delay between `eth_getTransactionReceipt` calls.
    pub const POLL_INTERVAL_MS: u32 = 3000;
    /// Polls before the mint is reported as failed (about three minutes).
    pub const MAX_ATTEMPTS: u32 = 60;
}

// =============================================================================
// Storage Configuration
// =============================================================================

/// localStorage key for the creator draft.
pub const CREATOR_STORAGE_KEY: &str = "oke.creator";

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the collection index.
    pub const COLLECTION_KEY: &str = "collection_cache";
}

// =============================================================================
// Deployment Configuration
// =============================================================================

/// Deployment settings for the networks the app can mint on.
///
/// Only RPC URLs and contract addresses are read from the build
/// environment; keys stay out of the bundle.
pub fn deploy_config() -> &'static DeployConfig {
    static CONFIG: OnceLock<DeployConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        DeployConfig::load(build_env).unwrap_or_else(|e| {
            error!(%e, "invalid deploy overrides, using defaults");
            DeployConfig::embedded().expect("embedded deploy config must parse")
        })
    })
}

/// Build-time values for the deploy overrides the browser may see.
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "SEPOLIA_RPC_URL" => option_env!("SEPOLIA_RPC_URL"),
        "MUMBAI_RPC_URL" => option_env!("MUMBAI_RPC_URL"),
        "SEPOLIA_CONTRACT_ADDRESS" => option_env!("SEPOLIA_CONTRACT_ADDRESS"),
        "MUMBAI_CONTRACT_ADDRESS" => option_env!("MUMBAI_CONTRACT_ADDRESS"),
        "HARDHAT_CONTRACT_ADDRESS" => option_env!("HARDHAT_CONTRACT_ADDRESS"),
        _ => None,
    };
    value.map(str::to_string)
}
