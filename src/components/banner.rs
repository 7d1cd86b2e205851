//! Network error banner.

use leptos::prelude::*;
use leptos_icons::Icon;
use oke_core::{Action, network_banner};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/banner.module.css");

/// Banner shown above every screen while a network error is pending for a
/// connected account.
#[component]
pub fn NetworkBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let message = Memo::new(move |_| ctx.state.with(|s| network_banner(s).map(str::to_string)));

    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class=css::banner role="alert">
                <span class=css::icon>
                    <Icon icon=ic::WARNING />
                </span>
                <span class=css::message>{move || message.get().unwrap_or_default()}</span>
                <button
                    class=css::dismiss
                    title="Dismiss"
                    on:click=move |_| ctx.dispatch(Action::ClearNetworkError)
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </Show>
    }
}
