//! Wallet connection state.
//!
//! The browser side opens the session; this module only models it.

use alloy_primitives::Address;

/// Length of a `0x`-prefixed hex address.
const ADDRESS_LEN: usize = 42;
/// Characters kept at the front of a shortened address (`0x1234`).
const PREFIX_LEN: usize = 6;
/// Characters kept at the back of a shortened address.
const SUFFIX_LEN: usize = 4;

/// The injected EIP-1193 provider a session was opened through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderHandle {
    /// Provider name as reported by the wallet (e.g. "MetaMask").
    pub name: String,
}

impl ProviderHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Signer bound to the connected account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignerHandle {
    address: Address,
}

impl SignerHandle {
    pub fn address(&self) -> Address {
        self.address
    }
}

/// A live wallet session.
///
/// The signer is always derived from `address`, so the two cannot disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletSession {
    address: Address,
    chain_id: u64,
    provider: ProviderHandle,
    signer: SignerHandle,
}

impl WalletSession {
    pub fn new(address: Address, chain_id: u64, provider: ProviderHandle) -> Self {
        Self {
            address,
            chain_id,
            provider,
            signer: SignerHandle { address },
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn provider(&self) -> &ProviderHandle {
        &self.provider
    }

    pub fn signer(&self) -> SignerHandle {
        self.signer
    }

    /// Same provider and chain, different account.
    pub fn with_account(&self, address: Address) -> Self {
        Self::new(address, self.chain_id, self.provider.clone())
    }

    pub fn with_chain(&self, chain_id: u64) -> Self {
        Self {
            chain_id,
            ..self.clone()
        }
    }
}

/// Wallet connection state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Web3State {
    #[default]
    Disconnected,
    /// Waiting on the wallet's connection prompt.
    Connecting,
    Connected(WalletSession),
}

impl Web3State {
    pub fn is_connected(&self) -> bool {
        matches!(self, Web3State::Connected(_))
    }

    pub fn session(&self) -> Option<&WalletSession> {
        match self {
            Web3State::Connected(session) => Some(session),
            _ => None,
        }
    }

    pub fn address(&self) -> Option<Address> {
        self.session().map(WalletSession::address)
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.session().map(WalletSession::chain_id)
    }

    pub fn provider(&self) -> Option<&ProviderHandle> {
        self.session().map(WalletSession::provider)
    }

    pub fn signer(&self) -> Option<SignerHandle> {
        self.session().map(WalletSession::signer)
    }

    /// Shortened address (0x1234...5678) or a placeholder.
    pub fn display_name(&self) -> String {
        match self {
            Web3State::Connected(session) => short_address(&session.address.to_string()),
            Web3State::Connecting => "connecting...".to_string(),
            Web3State::Disconnected => "guest".to_string(),
        }
    }
}

/// Format an address for display (0x1234...5678).
///
/// Strings shorter than a full address are returned unchanged.
pub fn short_address(address: &str) -> String {
    if address.len() >= ADDRESS_LEN && address.is_ascii() {
        format!(
            "{}...{}",
            &address[..PREFIX_LEN],
            &address[address.len() - SUFFIX_LEN..]
        )
    } else {
        address.to_string()
    }
}

/// Leading text of the error raised for a chain without a deployment.
pub const UNSUPPORTED_NETWORK: &str = "Unsupported network";

/// Error shown when the wallet sits on a chain the app cannot mint on.
pub fn unsupported_network_message(chain_id: u64, supported: &[&str]) -> String {
    format!(
        "{}: {} (chain_id={}). Switch to {}.",
        UNSUPPORTED_NETWORK,
        chain_name(chain_id),
        chain_id,
        supported.join(" or ")
    )
}

/// Convert chain ID to network name
pub fn chain_name(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "Ethereum",
        11155111 => "Sepolia",
        17000 => "Holesky",
        137 => "Polygon",
        80001 => "Mumbai",
        80002 => "Amoy",
        31337 => "Hardhat",
        42161 => "Arbitrum",
        10 => "Optimism",
        8453 => "Base",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const ALICE: Address = address!("0x1234567890123456789012345678901234567890");
    const BOB: Address = address!("0xabcdefabcdefabcdefabcdefabcdefabcdefabcd");

    fn session() -> WalletSession {
        WalletSession::new(ALICE, 11155111, ProviderHandle::new("MetaMask"))
    }

    #[test]
    fn test_disconnected_state() {
        let state = Web3State::Disconnected;
        assert!(!state.is_connected());
        assert_eq!(state.address(), None);
        assert_eq!(state.chain_id(), None);
        assert!(state.provider().is_none());
        assert!(state.signer().is_none());
        assert_eq!(state.display_name(), "guest");
    }

    #[test]
    fn test_connecting_state_has_no_session_fields() {
        let state = Web3State::Connecting;
        assert!(!state.is_connected());
        assert_eq!(state.address(), None);
        assert!(state.signer().is_none());
        assert_eq!(state.display_name(), "connecting...");
    }

    #[test]
    fn test_connected_fields_present_together() {
        let state = Web3State::Connected(session());
        assert_eq!(state.address(), Some(ALICE));
        assert_eq!(state.chain_id(), Some(11155111));
        assert_eq!(state.provider().map(|p| p.name.as_str()), Some("MetaMask"));
        assert_eq!(state.signer().map(|s| s.address()), Some(ALICE));
        assert_eq!(state.display_name(), "0x1234...7890");
    }

    #[test]
    fn test_account_change_rebinds_signer() {
        let switched = session().with_account(BOB);
        assert_eq!(switched.address(), BOB);
        assert_eq!(switched.signer().address(), BOB);
        assert_eq!(switched.chain_id(), 11155111);
    }

    #[test]
    fn test_chain_change_keeps_account() {
        let switched = session().with_chain(80001);
        assert_eq!(switched.chain_id(), 80001);
        assert_eq!(switched.address(), ALICE);
        assert_eq!(switched.signer().address(), ALICE);
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x1234567890123456789012345678901234567890"),
            "0x1234...7890"
        );
        assert_eq!(short_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_chain_name() {
        assert_eq!(chain_name(11155111), "Sepolia");
        assert_eq!(chain_name(80001), "Mumbai");
        assert_eq!(chain_name(999_999), "Unknown");
    }

    #[test]
    fn test_unsupported_network_message() {
        let message = unsupported_network_message(1, &["Sepolia", "Mumbai"]);
        assert_eq!(
            message,
            "Unsupported network: Ethereum (chain_id=1). Switch to Sepolia or Mumbai."
        );
        assert!(message.starts_with(UNSUPPORTED_NETWORK));
    }

    #[test]
    fn test_default() {
        assert_eq!(Web3State::default(), Web3State::Disconnected);
    }
}
