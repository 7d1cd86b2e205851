//! Top navigation bar with the wallet connector.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use oke_core::{Action, View, Web3State, chain_name};
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::wallet;

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Ask the wallet for an account and open a session.
///
/// Failures are reported through `on_error` rather than the network banner,
/// which stays hidden until an address exists.
pub fn handle_connect(ctx: AppContext, on_error: impl Fn(String) + 'static) {
    if ctx.state.with_untracked(|s| !matches!(s.web3, Web3State::Disconnected)) {
        return;
    }
    ctx.dispatch(Action::WalletConnecting);

    spawn_local(async move {
        match wallet::connect().await {
            Ok(session) => {
                let chain_id = session.chain_id();
                wallet::save_session();
                ctx.dispatch(Action::WalletConnected(session));
                ctx.check_network(chain_id);
            }
            Err(e) => {
                warn!(%e, "wallet connection failed");
                ctx.dispatch(Action::WalletDisconnected);
                on_error(e.to_string());
            }
        }
    });
}

pub fn handle_disconnect(ctx: AppContext) {
    wallet::clear_session();
    ctx.dispatch(Action::WalletDisconnected);
}

#[component]
fn NavLink(target: View, label: &'static str, icon: icondata::Icon) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let current = target.clone();
    let active = Memo::new(move |_| ctx.state.with(|s| s.view == current));

    view! {
        <button
            class=move || if active.get() { format!("{} {}", css::navLink, css::active) } else { css::navLink.to_string() }
            on:click=move |_| ctx.navigate(target.clone())
        >
            <Icon icon=icon />
            <span>{label}</span>
        </button>
    }
}

/// Wallet status and connect/disconnect control.
#[component]
pub fn WalletButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let web3 = Memo::new(move |_| ctx.state.with(|s| s.web3.clone()));
    let (error, set_error) = signal::<Option<String>>(None);

    let on_click = move |_: ev::MouseEvent| match web3.get_untracked() {
        Web3State::Connected(_) => handle_disconnect(ctx),
        Web3State::Connecting => {}
        Web3State::Disconnected => {
            set_error.set(None);
            handle_connect(ctx, move |message| set_error.set(Some(message)));
        }
    };

    view! {
        <div class=css::wallet>
            {move || {
                web3.with(|w| w.chain_id())
                    .map(|id| view! { <span class=css::chain>{chain_name(id)}</span> })
            }}
            <button
                class=css::walletButton
                disabled=move || matches!(web3.get(), Web3State::Connecting)
                title=move || if web3.with(Web3State::is_connected) { "Disconnect" } else { "Connect wallet" }
                on:click=on_click
            >
                {move || {
                    let icon = if web3.with(Web3State::is_connected) { ic::DISCONNECT } else { ic::WALLET };
                    view! { <Icon icon=icon /> }
                }}
                <span>
                    {move || match web3.get() {
                        Web3State::Disconnected => "Connect wallet".to_string(),
                        other => other.display_name(),
                    }}
                </span>
            </button>
            <Show when=move || error.with(Option::is_some)>
                <span class=css::error>{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <header class=css::header>
            <button class=css::brand on:click=move |_| ctx.navigate(View::Home)>
                {APP_NAME}
            </button>
            <nav class=css::nav>
                <NavLink target=View::Home label="Home" icon=ic::HOME />
                <NavLink target=View::Collection label="Collection" icon=ic::COLLECTION />
                <NavLink target=View::Creator label="Create" icon=ic::CREATE />
            </nav>
            <WalletButton />
        </header>
    }
}
