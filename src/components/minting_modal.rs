//! Minting progress overlay.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use oke_core::{Action, MintStage, View, show_minting_modal};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/minting_modal.module.css");

/// Modal shown over any screen while `minting.is_open`.
///
/// It can only be closed once the mint has settled; the confirmed state
/// offers a shortcut to the new item.
#[component]
pub fn MintingOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let open = Memo::new(move |_| ctx.state.with(show_minting_modal));
    let stage = Memo::new(move |_| ctx.state.with(|s| s.minting.stage().cloned()));
    let title = Memo::new(move |_| {
        ctx.state.with(|s| {
            s.minting
                .details
                .as_ref()
                .map(|d| d.draft.name.clone())
                .unwrap_or_default()
        })
    });
    let settled = Memo::new(move |_| stage.with(|s| s.as_ref().is_none_or(MintStage::is_settled)));

    let close = move || ctx.dispatch(Action::CloseMinting);
    let view_item = move |_: ev::MouseEvent| {
        ctx.dispatch(Action::CloseMinting);
        ctx.navigate(View::Detail);
    };

    view! {
        <Show when=move || open.get()>
            <div class=css::backdrop on:click=move |_| if settled.get_untracked() { close() }>
                <div class=css::modal role="dialog" aria-modal="true" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                    <div class=css::header>
                        <h3>"Minting"</h3>
                        <Show when=move || settled.get()>
                            <button class=css::close title="Close" on:click=move |_| close()>
                                <Icon icon=ic::CLOSE />
                            </button>
                        </Show>
                    </div>

                    <p class=css::title>{move || title.get()}</p>

                    {move || stage.get().map(|stage| {
                        let (icon, class) = match &stage {
                            MintStage::AwaitingSignature | MintStage::Pending { .. } => (ic::PENDING, css::pending),
                            MintStage::Confirmed { .. } => (ic::SUCCESS, css::success),
                            MintStage::Failed { .. } => (ic::WARNING, css::failure),
                        };
                        let detail = match &stage {
                            MintStage::Pending { tx_hash } => Some(format!("Transaction {}", tx_hash)),
                            MintStage::Confirmed { item } => Some(format!("Token #{}", item.token_id)),
                            MintStage::Failed { message } => Some(message.clone()),
                            MintStage::AwaitingSignature => None,
                        };
                        let confirmed = matches!(stage, MintStage::Confirmed { .. });

                        view! {
                            <div class=format!("{} {}", css::stage, class)>
                                <Icon icon=icon />
                                <span>{stage.label()}</span>
                            </div>
                            {detail.map(|text| view! { <p class=css::detail>{text}</p> })}
                            {confirmed.then(|| view! {
                                <button class=css::primary on:click=view_item>
                                    "View item"
                                </button>
                            })}
                        }
                    })}
                </div>
            </div>
        </Show>
    }
}
