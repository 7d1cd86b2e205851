//! Routing and gate behavior over whole application states.

use oke_core::{
    network_banner, resolve_screen, show_minting_modal, Action, Address, AppState, Item,
    MintDraft, ProviderHandle, Screen, View, WalletSession,
};

fn item(id: &str) -> Item {
    Item {
        id: id.to_string(),
        image: "ipfs://bafy/1.png".to_string(),
        name: "First Oke".to_string(),
        description: "hello".to_string(),
        transcript: "spoken words".to_string(),
        token_id: 1,
        contract_address: Address::repeat_byte(0x5f),
        is_sbt: false,
        external_url: String::new(),
    }
}

fn draft() -> MintDraft {
    MintDraft {
        name: "oke".to_string(),
        description: String::new(),
        image: String::new(),
        transcript: "oke".to_string(),
        is_sbt: false,
        external_url: String::new(),
    }
}

fn session() -> WalletSession {
    WalletSession::new(
        "0x00000000000000000000000000000000000abc00".parse().unwrap(),
        11155111,
        ProviderHandle::new("MetaMask"),
    )
}

fn state(view: View, selected: Option<Item>) -> AppState {
    AppState {
        view,
        selected_item: selected,
        ..AppState::default()
    }
}

fn all_views() -> Vec<View> {
    vec![
        View::Home,
        View::Collection,
        View::Creator,
        View::Detail,
        View::Unknown("settings".to_string()),
    ]
}

#[test]
fn home_renders_home() {
    assert_eq!(resolve_screen(&state(View::Home, None)), Screen::Home);
}

#[test]
fn collection_renders_collection() {
    assert_eq!(
        resolve_screen(&state(View::Collection, None)),
        Screen::Collection
    );
}

#[test]
fn creator_renders_creator() {
    assert_eq!(resolve_screen(&state(View::Creator, None)), Screen::Creator);
}

#[test]
fn detail_with_item_renders_that_item() {
    let s = state(View::Detail, Some(item("1")));
    match resolve_screen(&s) {
        Screen::Detail(shown) => assert_eq!(shown.id, "1"),
        other => panic!("expected detail, got {:?}", other),
    }
}

#[test]
fn detail_without_item_falls_back_to_collection() {
    for selected_was_cleared in [false, true] {
        let mut s = state(View::Detail, Some(item("1")));
        if selected_was_cleared {
            s = s.reduce(Action::ClearSelection);
        } else {
            s.selected_item = None;
        }
        assert_eq!(resolve_screen(&s), Screen::Collection);
    }
}

#[test]
fn navigating_to_detail_without_selection_is_normalized() {
    let s = AppState::default().reduce(Action::Navigate(View::Detail));
    assert_eq!(s.view, View::Detail);
    assert_eq!(resolve_screen(&s), Screen::Collection);
}

#[test]
fn unknown_tags_render_home() {
    for tag in ["settings", "DETAILS", "Collection", " creator ", "42", "home/extra", "🦀"] {
        let view = View::from_tag(tag);
        assert!(matches!(view, View::Unknown(_)), "{tag} should be unknown");
        assert_eq!(resolve_screen(&state(view, Some(item("1")))), Screen::Home);
    }
}

#[test]
fn router_is_total_over_views_and_selection() {
    for view in all_views() {
        for selected in [None, Some(item("1"))] {
            let s = state(view.clone(), selected);
            // Must not panic; Detail only with an item.
            if let Screen::Detail(shown) = resolve_screen(&s) {
                assert_eq!(Some(shown), s.selected_item.as_ref());
            }
        }
    }
}

#[test]
fn minting_modal_follows_open_flag_on_every_view() {
    for view in all_views() {
        let closed = state(view.clone(), None);
        assert!(!show_minting_modal(&closed));

        let open = closed.reduce(Action::MintStarted(draft()));
        assert!(show_minting_modal(&open), "modal hidden on {view}");
        assert_eq!(open.view, view);
    }
}

#[test]
fn banner_hidden_before_connection() {
    // Errors reported before a wallet session exists stay hidden.
    let s = AppState::default().reduce(Action::NetworkError("RPC failed".to_string()));
    assert_eq!(s.network_error.as_deref(), Some("RPC failed"));
    assert_eq!(network_banner(&s), None);
}

#[test]
fn banner_shown_with_address() {
    let s = AppState::default()
        .reduce(Action::WalletConnected(session()))
        .reduce(Action::NetworkError("RPC failed".to_string()));
    assert_eq!(network_banner(&s), Some("RPC failed"));
}

#[test]
fn suppressed_error_surfaces_after_connecting() {
    let s = AppState::default()
        .reduce(Action::NetworkError("RPC failed".to_string()))
        .reduce(Action::WalletConnected(session()));
    assert_eq!(network_banner(&s), Some("RPC failed"));
}

#[test]
fn empty_error_never_shows_banner() {
    let s = AppState::default()
        .reduce(Action::WalletConnected(session()))
        .reduce(Action::NetworkError(String::new()));
    assert_eq!(network_banner(&s), None);
}

#[test]
fn banner_hidden_while_connecting() {
    let s = AppState::default()
        .reduce(Action::WalletConnecting)
        .reduce(Action::NetworkError("RPC failed".to_string()));
    assert_eq!(network_banner(&s), None);
}
