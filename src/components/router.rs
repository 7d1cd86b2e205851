//! Application router component.
//!
//! Renders exactly one screen for the current [`AppState`] plus the two
//! overlays that sit above it.
//!
//! # Architecture
//!
//! - **State is the source of truth**: the active screen is derived with
//!   [`resolve_screen`]; the URL hash only mirrors the `view` tag
//! - **hashchange events**: browser back/forward dispatch `Navigate`
//! - **Overlays are independent of the view**: the error banner and the
//!   minting modal are gated on their own state slices
//!
//! [`AppState`]: oke_core::AppState

use leptos::prelude::*;
use oke_core::{Action, Item, Screen, View, resolve_screen};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::banner::NetworkBanner;
use crate::components::collection::CollectionScreen;
use crate::components::creator::CreatorScreen;
use crate::components::detail::DetailScreen;
use crate::components::header::Header;
use crate::components::home::HomeScreen;
use crate::components::minting_modal::MintingOverlay;
use crate::core::wallet;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Owned form of [`Screen`] so the memo only fires when the screen changes.
#[derive(Clone, Debug, PartialEq)]
enum ActiveScreen {
    Home,
    Collection,
    Creator,
    Detail(Item),
}

impl From<Screen<'_>> for ActiveScreen {
    fn from(screen: Screen<'_>) -> Self {
        match screen {
            Screen::Home => ActiveScreen::Home,
            Screen::Collection => ActiveScreen::Collection,
            Screen::Creator => ActiveScreen::Creator,
            Screen::Detail(item) => ActiveScreen::Detail(item.clone()),
        }
    }
}

// ============================================================================
// Setup Functions
// ============================================================================

/// Mirror the view tag into the URL hash and follow hash navigation.
fn setup_hash_sync(ctx: AppContext) {
    let view = Memo::new(move |_| ctx.state.with(|s| s.view.clone()));

    Effect::new(move |_| {
        let hash = view.get().to_hash();
        if View::from_hash(&dom::get_hash()) != view.get_untracked() {
            dom::set_hash(&hash);
        }
        dom::scroll_to_top();
    });

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.navigate(View::from_hash(&dom::get_hash()));
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }
}

/// Set up wallet event listeners for account and chain changes.
fn setup_wallet_events(ctx: AppContext) {
    let _ = wallet::on_accounts_changed(move |account| {
        if account.is_none() {
            wallet::clear_session();
        }
        ctx.dispatch(Action::AccountChanged(account));
    });

    let _ = wallet::on_chain_changed(move |chain_id| {
        if ctx.state.with_untracked(|s| s.web3.is_connected()) {
            ctx.dispatch(Action::ChainChanged(chain_id));
            ctx.check_network(chain_id);
        }
    });

    let _ = wallet::on_disconnect(move |message| {
        ctx.dispatch(Action::NetworkError(format!("Wallet disconnected: {}", message)));
    });
}

/// Reconnect silently when the user connected on a previous visit.
fn restore_session(ctx: AppContext) {
    if !wallet::has_session() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        match wallet::restore().await {
            Some(session) => {
                let chain_id = session.chain_id();
                ctx.dispatch(Action::WalletConnected(session));
                ctx.check_network(chain_id);
            }
            None => wallet::clear_session(),
        }
    });
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// | State | Screen |
/// |-------|--------|
/// | `home` | [`HomeScreen`] |
/// | `collection` | [`CollectionScreen`] |
/// | `creator` | [`CreatorScreen`] |
/// | `detail` with a selected item | [`DetailScreen`] |
/// | `detail` without a selection | [`CollectionScreen`] |
/// | anything else | [`HomeScreen`] |
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Runs once on mount
    let started = StoredValue::new(false);
    Effect::new(move || {
        if !started.get_value() {
            started.set_value(true);
            setup_wallet_events(ctx);
            restore_session(ctx);
        }
    });
    setup_hash_sync(ctx);

    let screen = Memo::new(move |_| ctx.state.with(|s| ActiveScreen::from(resolve_screen(s))));

    view! {
        <div class=css::page>
            <Header />
            <NetworkBanner />

            <main class=css::content>
                {move || match screen.get() {
                    ActiveScreen::Home => view! { <HomeScreen /> }.into_any(),
                    ActiveScreen::Collection => view! { <CollectionScreen /> }.into_any(),
                    ActiveScreen::Creator => view! { <CreatorScreen /> }.into_any(),
                    ActiveScreen::Detail(item) => view! { <DetailScreen item=item /> }.into_any(),
                }}
            </main>

            <MintingOverlay />
        </div>
    }
}
