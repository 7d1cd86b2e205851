//! Creator flow: pick an image, write a transcript, mint.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use oke_core::{Action, CreatorState, Item, MAX_FILE_BYTES, MintDraft};
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::deploy_config;
use crate::core::error::MintError;
use crate::core::{creator_store, minting};

stylance::import_crate_style!(css, "src/components/creator.module.css");

/// Apply `edit` to the current draft and dispatch the result.
fn update_creator(ctx: AppContext, edit: impl FnOnce(&mut CreatorState)) {
    let mut creator = ctx.state.with_untracked(|s| s.creator.clone());
    edit(&mut creator);
    ctx.dispatch(Action::CreatorUpdated(creator));
}

/// Run the mint for `draft` against the connected session.
async fn mint(ctx: AppContext, draft: &MintDraft) -> Result<Item, MintError> {
    let session = ctx
        .state
        .with_untracked(|s| s.web3.session().cloned())
        .ok_or(MintError::NoSession)?;
    let chain_id = session.chain_id();
    let contract = deploy_config()
        .contract_for_chain(chain_id)
        .ok_or(MintError::NoContract { chain_id })?;

    minting::submit(draft, &session, contract, |tx_hash| {
        ctx.dispatch(Action::MintSubmitted(tx_hash))
    })
    .await
}

fn handle_mint(ctx: AppContext) {
    let (draft, in_flight) = ctx
        .state
        .with_untracked(|s| (s.creator.validate(), s.minting.in_flight()));
    if in_flight {
        return;
    }
    let Ok(draft) = draft else {
        return;
    };

    ctx.dispatch(Action::MintStarted(draft.clone()));
    spawn_local(async move {
        match mint(ctx, &draft).await {
            Ok(item) => ctx.dispatch(Action::MintConfirmed(item)),
            Err(e) => {
                warn!(%e, "mint failed");
                ctx.dispatch(Action::MintFailed(e.to_string()));
            }
        }
    });
}

#[component]
pub fn CreatorScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let creator = Memo::new(move |_| ctx.state.with(|s| s.creator.clone()));
    let connected = Memo::new(move |_| ctx.state.with(|s| s.web3.is_connected()));
    let busy = Memo::new(move |_| ctx.state.with(|s| s.minting.in_flight()));
    let problem = Memo::new(move |_| creator.with(|c| c.validate().err().map(|e| e.to_string())));
    let (file_error, set_file_error) = signal::<Option<String>>(None);

    let on_file = move |ev: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_file_error.set(None);
        spawn_local(async move {
            match creator_store::read_file(file).await {
                Ok(file) => update_creator(ctx, |c| c.file = Some(file)),
                Err(e) => set_file_error.set(Some(e.to_string())),
            }
        });
    };

    let on_transcript = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        update_creator(ctx, |c| c.transcript = value);
    };

    let on_sbt = move |ev: ev::Event| {
        let checked = event_target_checked(&ev);
        update_creator(ctx, |c| c.is_sbt = checked);
    };

    let on_ack = move |ev: ev::Event| {
        let checked = event_target_checked(&ev);
        update_creator(ctx, |c| c.options_checked = checked);
    };

    let preview = move || {
        creator.with(|c| {
            c.file.as_ref().map(|f| {
                let image = if f.data_url.is_empty() {
                    view! { <div class=css::noPreview>"Too large to preview"</div> }.into_any()
                } else {
                    view! { <img src=f.data_url.clone() alt=f.name.clone() /> }.into_any()
                };
                view! {
                    <figure class=css::preview>
                        {image}
                        <figcaption>{f.name.clone()}</figcaption>
                    </figure>
                }
            })
        })
    };

    view! {
        <section class=css::creator>
            <h2>"Create a token"</h2>

            <label class=css::field>
                <span class=css::label>"Image"</span>
                <input type="file" accept="image/*" on:change=on_file />
                <span class=css::help>
                    {format!("PNG, JPEG, GIF or WebP, up to {} KiB.", MAX_FILE_BYTES / 1024)}
                </span>
            </label>
            <Show when=move || file_error.with(Option::is_some)>
                <p class=css::error>{move || file_error.get().unwrap_or_default()}</p>
            </Show>
            {preview}

            <label class=css::field>
                <span class=css::label>"Transcript"</span>
                <textarea
                    rows="8"
                    placeholder="What was said. The first line becomes the token name."
                    prop:value=move || creator.with(|c| c.transcript.clone())
                    on:input=on_transcript
                />
            </label>

            <label class=css::check>
                <input
                    type="checkbox"
                    prop:checked=move || creator.with(|c| c.is_sbt)
                    on:change=on_sbt
                />
                <span>
                    <Icon icon=ic::SOULBOUND />
                    " Soulbound (cannot be transferred after minting)"
                </span>
            </label>

            <label class=css::check>
                <input
                    type="checkbox"
                    prop:checked=move || creator.with(|c| c.options_checked)
                    on:change=on_ack
                />
                <span>"I understand the image and transcript are stored on-chain and public."</span>
            </label>

            <div class=css::actions>
                <button
                    class=css::mint
                    disabled=move || !connected.get() || busy.get() || problem.with(Option::is_some)
                    on:click=move |_| handle_mint(ctx)
                >
                    "Mint"
                </button>
                <button
                    class=css::reset
                    disabled=move || busy.get()
                    on:click=move |_| ctx.dispatch(Action::CreatorReset)
                >
                    "Reset"
                </button>
            </div>
            <p class=css::help>
                {move || {
                    if !connected.get() {
                        "Connect a wallet to mint.".to_string()
                    } else {
                        problem.get().unwrap_or_default()
                    }
                }}
            </p>
        </section>
    }
}
