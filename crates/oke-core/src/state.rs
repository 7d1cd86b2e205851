//! The application state container.
//!
//! [`AppState`] is replaced whole on every transition: [`AppState::reduce`]
//! takes the current value by reference and returns the next one, so readers
//! never observe a half-applied update.

use alloy_primitives::{Address, TxHash};
use tracing::debug;

use crate::creator::{CreatorState, MintDraft};
use crate::item::Item;
use crate::minting::{MintStage, MintingData};
use crate::view::View;
use crate::wallet::{UNSUPPORTED_NETWORK, WalletSession, Web3State};

/// Process-wide UI state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub view: View,
    pub web3: Web3State,
    pub selected_item: Option<Item>,
    pub network_error: Option<String>,
    pub minting: MintingData,
    /// Items shown by the collection browser.
    pub collection: Vec<Item>,
    /// Creator flow draft.
    pub creator: CreatorState,
    /// Items minted in this session, kept across index reloads until the
    /// index lists them.
    pub local_mints: Vec<Item>,
}

/// A state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(View),
    /// Select an item and open its detail view.
    SelectItem(Item),
    ClearSelection,
    WalletConnecting,
    WalletConnected(WalletSession),
    WalletDisconnected,
    /// The wallet switched accounts; `None` means every account was disconnected.
    AccountChanged(Option<Address>),
    ChainChanged(u64),
    NetworkError(String),
    ClearNetworkError,
    /// The wallet is on a supported chain; clears only an unsupported-network error.
    NetworkSupported,
    CollectionLoaded(Vec<Item>),
    CreatorUpdated(CreatorState),
    CreatorReset,
    MintStarted(MintDraft),
    MintSubmitted(TxHash),
    MintConfirmed(Item),
    MintFailed(String),
    CloseMinting,
}

impl AppState {
    /// Apply `action` and return the resulting state.
    pub fn reduce(&self, action: Action) -> AppState {
        debug!(?action, view = %self.view, "reduce");
        let mut next = self.clone();

        match action {
            Action::Navigate(view) => next.view = view,
            Action::SelectItem(item) => {
                next.selected_item = Some(item);
                next.view = View::Detail;
            }
            Action::ClearSelection => next.selected_item = None,
            Action::WalletConnecting => {
                if !next.web3.is_connected() {
                    next.web3 = Web3State::Connecting;
                }
            }
            Action::WalletConnected(session) => next.web3 = Web3State::Connected(session),
            Action::WalletDisconnected | Action::AccountChanged(None) => {
                next.web3 = Web3State::Disconnected;
                // A cancelled connect or a locked wallet never had a session to tear down.
                if self.web3.is_connected() {
                    next.selected_item = None;
                    next.network_error = None;
                    next.view = View::Home;
                }
            }
            Action::AccountChanged(Some(address)) => {
                if let Web3State::Connected(session) = &self.web3
                    && session.address() != address
                {
                    next.web3 = Web3State::Connected(session.with_account(address));
                    next.selected_item = None;
                }
            }
            Action::ChainChanged(chain_id) => {
                if let Web3State::Connected(session) = &self.web3 {
                    next.web3 = Web3State::Connected(session.with_chain(chain_id));
                }
            }
            Action::NetworkError(message) => next.network_error = Some(message),
            Action::ClearNetworkError => next.network_error = None,
            Action::NetworkSupported => {
                if self
                    .network_error
                    .as_deref()
                    .is_some_and(|m| m.starts_with(UNSUPPORTED_NETWORK))
                {
                    next.network_error = None;
                }
            }
            Action::CollectionLoaded(items) => {
                // Local mints stay until the index lists them.
                next.local_mints
                    .retain(|mint| !items.iter().any(|i| i.id == mint.id));
                next.collection = items;
                next.collection.extend(next.local_mints.iter().cloned());
            }
            Action::CreatorUpdated(creator) => next.creator = creator,
            Action::CreatorReset => next.creator = CreatorState::default(),
            Action::MintStarted(draft) => {
                if !self.minting.in_flight() {
                    next.minting = MintingData::start(draft);
                }
            }
            Action::MintSubmitted(tx_hash) => {
                next.minting = self.minting.advance(MintStage::Pending { tx_hash });
            }
            Action::MintConfirmed(item) => {
                if self.minting.in_flight() {
                    next.minting = self.minting.advance(MintStage::Confirmed { item: item.clone() });
                    next.collection.retain(|i| i.id != item.id);
                    next.collection.push(item.clone());
                    next.local_mints.retain(|i| i.id != item.id);
                    next.local_mints.push(item.clone());
                    next.selected_item = Some(item);
                    next.creator = CreatorState::default();
                }
            }
            Action::MintFailed(message) => {
                if self.minting.in_flight() {
                    next.minting = self.minting.advance(MintStage::Failed {
                        message: message.clone(),
                    });
                    next.network_error = Some(message);
                }
            }
            Action::CloseMinting => {
                if !self.minting.in_flight() {
                    next.minting = MintingData::default();
                }
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::{ProviderHandle, unsupported_network_message};
    use alloy_primitives::address;

    const ALICE: Address = address!("0x1111111111111111111111111111111111111111");
    const BOB: Address = address!("0x2222222222222222222222222222222222222222");
    const CONTRACT: Address = address!("0x5fbdb2315678afecb367f032d93f642f64180aa3");

    fn connected() -> AppState {
        AppState::default().reduce(Action::WalletConnected(WalletSession::new(
            ALICE,
            11155111,
            ProviderHandle::new("MetaMask"),
        )))
    }

    fn draft() -> MintDraft {
        MintDraft {
            name: "oke".to_string(),
            description: "Minted from oke.png".to_string(),
            image: "data:image/png;base64,AAAA".to_string(),
            transcript: "oke".to_string(),
            is_sbt: true,
            external_url: String::new(),
        }
    }

    fn item(token_id: u64) -> Item {
        Item::from_mint(&draft(), token_id, CONTRACT)
    }

    #[test]
    fn test_select_item_opens_detail() {
        let state = connected().reduce(Action::SelectItem(item(1)));
        assert_eq!(state.view, View::Detail);
        assert_eq!(state.selected_item, Some(item(1)));
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let before = connected();
        let snapshot = before.clone();
        let _ = before.reduce(Action::Navigate(View::Creator));
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_connecting_does_not_drop_live_session() {
        let state = connected().reduce(Action::WalletConnecting);
        assert!(state.web3.is_connected());

        let fresh = AppState::default().reduce(Action::WalletConnecting);
        assert_eq!(fresh.web3, Web3State::Connecting);
    }

    #[test]
    fn test_disconnect_resets_session_view() {
        let state = connected()
            .reduce(Action::SelectItem(item(1)))
            .reduce(Action::NetworkError("RPC failed".to_string()))
            .reduce(Action::WalletDisconnected);
        assert_eq!(state.web3, Web3State::Disconnected);
        assert_eq!(state.view, View::Home);
        assert!(state.selected_item.is_none());
        assert!(state.network_error.is_none());
    }

    #[test]
    fn test_failed_connect_keeps_browsing_state() {
        let before = AppState::default()
            .reduce(Action::SelectItem(item(1)))
            .reduce(Action::NetworkError("Could not load the collection".to_string()))
            .reduce(Action::WalletConnecting);
        let after = before.reduce(Action::WalletDisconnected);

        assert_eq!(after.web3, Web3State::Disconnected);
        assert_eq!(after.view, View::Detail);
        assert_eq!(after.selected_item, Some(item(1)));
        assert_eq!(
            after.network_error.as_deref(),
            Some("Could not load the collection")
        );
    }

    #[test]
    fn test_accounts_cleared_while_disconnected_keeps_view() {
        let state = AppState::default()
            .reduce(Action::SelectItem(item(1)))
            .reduce(Action::AccountChanged(None));
        assert_eq!(state.view, View::Detail);
        assert_eq!(state.selected_item, Some(item(1)));
    }

    #[test]
    fn test_all_accounts_removed_is_disconnect() {
        let state = connected().reduce(Action::AccountChanged(None));
        assert_eq!(state.web3, Web3State::Disconnected);
    }

    #[test]
    fn test_account_change_rebinds_signer() {
        let state = connected()
            .reduce(Action::SelectItem(item(1)))
            .reduce(Action::AccountChanged(Some(BOB)));
        assert_eq!(state.web3.address(), Some(BOB));
        assert_eq!(state.web3.signer().map(|s| s.address()), Some(BOB));
        assert_eq!(state.web3.chain_id(), Some(11155111));
        assert!(state.selected_item.is_none());
    }

    #[test]
    fn test_same_account_reported_again_keeps_selection() {
        let before = connected().reduce(Action::SelectItem(item(1)));
        let after = before.reduce(Action::AccountChanged(Some(ALICE)));
        assert_eq!(after, before);
    }

    #[test]
    fn test_account_change_ignored_while_disconnected() {
        let state = AppState::default().reduce(Action::AccountChanged(Some(BOB)));
        assert_eq!(state.web3, Web3State::Disconnected);
    }

    #[test]
    fn test_chain_change() {
        let state = connected().reduce(Action::ChainChanged(80001));
        assert_eq!(state.web3.chain_id(), Some(80001));
        assert_eq!(state.web3.address(), Some(ALICE));

        let offline = AppState::default().reduce(Action::ChainChanged(80001));
        assert_eq!(offline.web3.chain_id(), None);
    }

    #[test]
    fn test_mint_lifecycle_success() {
        let state = connected()
            .reduce(Action::CreatorUpdated(CreatorState {
                transcript: "oke".to_string(),
                ..CreatorState::default()
            }))
            .reduce(Action::MintStarted(draft()));
        assert!(state.minting.in_flight());

        let state = state.reduce(Action::MintSubmitted(TxHash::repeat_byte(0xab)));
        assert!(matches!(
            state.minting.stage(),
            Some(MintStage::Pending { .. })
        ));

        let state = state.reduce(Action::MintConfirmed(item(9)));
        assert!(state.minting.is_open);
        assert!(matches!(
            state.minting.stage(),
            Some(MintStage::Confirmed { .. })
        ));
        assert_eq!(state.collection, vec![item(9)]);
        assert_eq!(state.selected_item, Some(item(9)));
        assert!(state.creator.is_empty());

        let state = state.reduce(Action::CloseMinting);
        assert!(!state.minting.is_open);
        assert!(state.minting.details.is_none());
    }

    #[test]
    fn test_mint_failure_sets_network_error() {
        let state = connected()
            .reduce(Action::MintStarted(draft()))
            .reduce(Action::MintFailed("user rejected".to_string()));
        assert_eq!(
            state.minting.stage(),
            Some(&MintStage::Failed {
                message: "user rejected".to_string()
            })
        );
        assert_eq!(state.network_error.as_deref(), Some("user rejected"));
    }

    #[test]
    fn test_close_ignored_while_in_flight() {
        let state = connected()
            .reduce(Action::MintStarted(draft()))
            .reduce(Action::CloseMinting);
        assert!(state.minting.is_open);
    }

    #[test]
    fn test_second_mint_ignored_while_in_flight() {
        let mut other = draft();
        other.name = "other".to_string();
        let state = connected()
            .reduce(Action::MintStarted(draft()))
            .reduce(Action::MintStarted(other));
        assert_eq!(
            state.minting.details.as_ref().map(|d| d.draft.name.as_str()),
            Some("oke")
        );
    }

    #[test]
    fn test_mint_results_without_open_mint_are_noops() {
        let state = connected();
        assert_eq!(state.reduce(Action::MintConfirmed(item(1))), state);
        assert_eq!(state.reduce(Action::MintFailed("x".to_string())), state);
        assert_eq!(
            state.reduce(Action::MintSubmitted(TxHash::ZERO)),
            state
        );
    }

    #[test]
    fn test_collection_load_keeps_local_mints() {
        let state = connected()
            .reduce(Action::MintStarted(draft()))
            .reduce(Action::MintConfirmed(item(9)))
            .reduce(Action::CollectionLoaded(vec![item(1), item(2)]));
        let ids: Vec<u64> = state.collection.iter().map(|i| i.token_id).collect();
        assert_eq!(ids, vec![1, 2, 9]);
    }

    #[test]
    fn test_reload_drops_entries_missing_from_index() {
        let state = connected()
            .reduce(Action::CollectionLoaded(vec![item(1), item(2)]))
            .reduce(Action::CollectionLoaded(vec![item(1)]));
        let ids: Vec<u64> = state.collection.iter().map(|i| i.token_id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_indexed_mint_is_not_duplicated() {
        let state = connected()
            .reduce(Action::MintStarted(draft()))
            .reduce(Action::MintConfirmed(item(9)))
            .reduce(Action::CollectionLoaded(vec![item(1), item(9)]));
        let ids: Vec<u64> = state.collection.iter().map(|i| i.token_id).collect();
        assert_eq!(ids, vec![1, 9]);
        assert!(state.local_mints.is_empty());

        // Once indexed, the index decides.
        let state = state.reduce(Action::CollectionLoaded(vec![item(1)]));
        assert_eq!(state.collection, vec![item(1)]);
    }

    #[test]
    fn test_supported_network_clears_only_its_own_error() {
        let unsupported = connected()
            .reduce(Action::NetworkError(unsupported_network_message(1, &["Sepolia"])))
            .reduce(Action::NetworkSupported);
        assert!(unsupported.network_error.is_none());

        let mint_error = connected()
            .reduce(Action::MintStarted(draft()))
            .reduce(Action::MintFailed("user rejected".to_string()))
            .reduce(Action::NetworkSupported);
        assert_eq!(mint_error.network_error.as_deref(), Some("user rejected"));
    }

    #[test]
    fn test_creator_reset() {
        let state = connected()
            .reduce(Action::CreatorUpdated(CreatorState {
                options_checked: true,
                ..CreatorState::default()
            }))
            .reduce(Action::CreatorReset);
        assert_eq!(state.creator, CreatorState::default());
    }
}
