//! Landing screen.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use oke_core::{View, Web3State};

use crate::app::AppContext;
use crate::components::header::handle_connect;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::core::wallet;

stylance::import_crate_style!(css, "src/components/home.module.css");

#[component]
pub fn HomeScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let web3 = Memo::new(move |_| ctx.state.with(|s| s.web3.clone()));
    let owned = Memo::new(move |_| ctx.state.with(|s| s.collection.len()));
    let (error, set_error) = signal::<Option<String>>(None);

    let on_connect = move |_: ev::MouseEvent| {
        set_error.set(None);
        handle_connect(ctx, move |message| set_error.set(Some(message)));
    };

    view! {
        <section class=css::hero>
            <h1 class=css::title>{APP_NAME}</h1>
            <p class=css::tagline>{APP_TAGLINE}</p>

            {move || match web3.get() {
                Web3State::Connected(session) => view! {
                    <div class=css::session>
                        <p class=css::greeting>
                            "Connected as "
                            <code>{session.address().to_string()}</code>
                        </p>
                        <div class=css::actions>
                            <button class=css::primary on:click=move |_| ctx.navigate(View::Creator)>
                                <Icon icon=ic::CREATE />
                                <span>"Create a token"</span>
                            </button>
                            <button class=css::secondary on:click=move |_| ctx.navigate(View::Collection)>
                                <Icon icon=ic::COLLECTION />
                                <span>
                                    {move || match owned.get() {
                                        0 => "Browse the collection".to_string(),
                                        n => format!("Browse the collection ({})", n),
                                    }}
                                </span>
                            </button>
                        </div>
                    </div>
                }.into_any(),
                Web3State::Connecting => view! {
                    <p class=css::hint>
                        <Icon icon=ic::PENDING />
                        " Waiting for the wallet..."
                    </p>
                }.into_any(),
                Web3State::Disconnected => view! {
                    <div class=css::session>
                        <button class=css::primary on:click=on_connect>
                            <Icon icon=ic::WALLET />
                            <span>"Connect wallet"</span>
                        </button>
                        {(!wallet::is_available()).then(|| view! {
                            <p class=css::hint>
                                "No wallet detected. Install MetaMask or another EIP-1193 wallet to mint."
                            </p>
                        })}
                        <button class=css::link on:click=move |_| ctx.navigate(View::Collection)>
                            "Browse without connecting"
                        </button>
                    </div>
                }.into_any(),
            }}

            <Show when=move || error.with(Option::is_some)>
                <p class=css::error>{move || error.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
