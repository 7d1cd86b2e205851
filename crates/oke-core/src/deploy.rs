//! Contract deployment configuration.
//!
//! Defaults are embedded from `assets/deploy.toml`. Environment values are
//! layered on top through a lookup function so callers decide where they come
//! from (process environment for tooling, compile-time values in the browser).
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `<NETWORK>_RPC_URL` | RPC endpoint of that network |
//! | `<NETWORK>_CONTRACT_ADDRESS` | Deployed minting contract |
//! | `PRIVATE_KEY` | Deployer account for remote networks |
//! | `ETHERSCAN_API_KEY` | Verification key for Etherscan networks |
//! | `POLYGONSCAN_API_KEY` | Verification key for Polygonscan networks |

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use alloy_primitives::{Address, B256};
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

const EMBEDDED: &str = include_str!("../assets/deploy.toml");

/// Solidity compiler settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CompilerSettings {
    pub version: String,
    #[serde(default)]
    pub optimizer: Optimizer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Optimizer {
    pub enabled: bool,
    pub runs: u32,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: 200,
        }
    }
}

/// One deploy target.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NetworkConfig {
    /// Filled from the table key.
    #[serde(skip)]
    pub name: String,
    /// RPC endpoint. Absent for the in-process hardhat network.
    #[serde(default)]
    pub url: Option<String>,
    pub chain_id: u64,
    /// Deployed minting contract.
    #[serde(default)]
    pub contract: Option<Address>,
    /// Block explorer key used for source verification.
    #[serde(default)]
    pub explorer: Option<String>,
}

impl NetworkConfig {
    /// Prefix for this network's environment variables (`SEPOLIA`).
    fn env_prefix(&self) -> String {
        self.name.to_ascii_uppercase().replace('-', "_")
    }

    pub fn is_local(&self) -> bool {
        self.url.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProjectPaths {
    pub sources: String,
    pub tests: String,
    pub cache: String,
    pub artifacts: String,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            sources: "./contracts".to_string(),
            tests: "./test".to_string(),
            cache: "./cache".to_string(),
            artifacts: "./artifacts".to_string(),
        }
    }
}

/// A deployer private key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(B256);

impl PrivateKey {
    pub fn as_bytes(&self) -> &B256 {
        &self.0
    }
}

impl FromStr for PrivateKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        B256::from_str(s.trim())
            .map(PrivateKey)
            .map_err(|_| ConfigError::InvalidPrivateKey)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// Complete deployment configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DeployConfig {
    pub solidity: CompilerSettings,
    pub networks: BTreeMap<String, NetworkConfig>,
    #[serde(default)]
    pub paths: ProjectPaths,
    /// Deployer accounts for remote networks.
    #[serde(skip)]
    pub accounts: Vec<PrivateKey>,
    /// Explorer API keys by explorer name.
    #[serde(skip)]
    pub etherscan: BTreeMap<String, String>,
}

impl DeployConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let mut config: DeployConfig =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        for (name, network) in config.networks.iter_mut() {
            network.name = name.clone();
        }
        Ok(config)
    }

    /// The defaults shipped with the crate.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED)
    }

    /// Embedded defaults with environment overrides applied.
    pub fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Self::embedded()?.with_env(lookup)
    }

    /// Apply environment overrides. Empty values count as unset.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        for network in self.networks.values_mut() {
            let prefix = network.env_prefix();
            if let Some(url) = get(&format!("{}_RPC_URL", prefix)) {
                network.url = Some(url);
            }
            if let Some(value) = get(&format!("{}_CONTRACT_ADDRESS", prefix)) {
                let address = Address::from_str(value.trim()).map_err(|_| {
                    ConfigError::InvalidContract {
                        network: network.name.clone(),
                        value: value.clone(),
                    }
                })?;
                network.contract = Some(address);
            }
        }

        self.accounts = match get("PRIVATE_KEY") {
            Some(key) => vec![key.parse()?],
            None => Vec::new(),
        };

        for network in self.networks.values() {
            let Some(explorer) = &network.explorer else {
                continue;
            };
            let var = api_key_var(explorer);
            match get(var) {
                Some(key) => {
                    self.etherscan.insert(explorer.clone(), key);
                }
                None => debug!(network = %network.name, var, "no explorer API key set"),
            }
        }

        Ok(self)
    }

    pub fn network(&self, name: &str) -> Option<&NetworkConfig> {
        self.networks.get(name)
    }

    pub fn network_by_chain_id(&self, chain_id: u64) -> Option<&NetworkConfig> {
        self.networks.values().find(|n| n.chain_id == chain_id)
    }

    pub fn is_supported_chain(&self, chain_id: u64) -> bool {
        self.network_by_chain_id(chain_id).is_some()
    }

    /// Accounts used for `network`. The local network uses its own.
    pub fn accounts_for(&self, network: &NetworkConfig) -> &[PrivateKey] {
        if network.is_local() {
            &[]
        } else {
            &self.accounts
        }
    }

    /// Minting contract deployed on `chain_id`.
    pub fn contract_for_chain(&self, chain_id: u64) -> Option<Address> {
        self.network_by_chain_id(chain_id)?.contract
    }
}

/// Environment variable holding the API key for an explorer.
fn api_key_var(explorer: &str) -> &'static str {
    if explorer.to_ascii_lowercase().starts_with("polygon") {
        "POLYGONSCAN_API_KEY"
    } else {
        "ETHERSCAN_API_KEY"
    }
}
