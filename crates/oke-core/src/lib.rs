//! Domain model for the OkeStudio front end.
//!
//! Everything in this crate is browser-free so it can be tested natively:
//! - [`Item`] - A token entry shown in the collection and detail screens
//! - [`Web3State`], [`WalletSession`] - Wallet connection session
//! - [`CreatorState`], [`MintDraft`] - In-progress creator input
//! - [`MintingData`], [`MintStage`] - Minting overlay state
//! - [`AppState`], [`Action`] - The state container and its transitions
//! - [`View`], [`Screen`], [`resolve_screen`] - View routing and gates
//! - [`DeployConfig`] - Deployment network configuration
//! - [`abi`] - Mint call encoding and receipt decoding

pub mod abi;
mod creator;
pub mod deploy;
pub mod error;
mod item;
mod minting;
mod state;
mod view;
mod wallet;

pub use creator::{CreatorState, FileRef, MintDraft, MAX_FILE_BYTES};
pub use deploy::{DeployConfig, NetworkConfig};
pub use error::{AbiError, ConfigError, CreatorError};
pub use item::Item;
pub use minting::{MintStage, MintingData, MintingDetails};
pub use state::{Action, AppState};
pub use view::{network_banner, resolve_screen, show_minting_modal, Screen, View};
pub use wallet::{
    chain_name, short_address, unsupported_network_message, ProviderHandle, SignerHandle,
    WalletSession, Web3State, UNSUPPORTED_NETWORK,
};

pub use alloy_primitives::{Address, TxHash, B256, U256};
