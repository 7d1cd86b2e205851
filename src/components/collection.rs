//! Collection browser.

use leptos::prelude::*;
use leptos_icons::Icon;
use oke_core::{Action, Item, View};
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::deploy_config;
use crate::core::collection;

stylance::import_crate_style!(css, "src/components/collection.module.css");

#[component]
pub fn CollectionScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (loading, set_loading) = signal(true);

    let fetch = move |force: bool| {
        set_loading.set(true);
        spawn_local(async move {
            let result = if force {
                collection::reload().await
            } else {
                collection::load().await
            };
            match result {
                Ok(items) => ctx.dispatch(Action::CollectionLoaded(items)),
                Err(e) => {
                    warn!(%e, "collection load failed");
                    ctx.dispatch(Action::NetworkError(format!("Could not load the collection: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };
    // The index is cached for the session, so loading on every mount is cheap.
    fetch(false);

    let items = Memo::new(move |_| {
        ctx.state.with(|s| {
            let contract = s
                .web3
                .chain_id()
                .and_then(|id| deploy_config().contract_for_chain(id));
            collection::visible_items(&s.collection, contract)
        })
    });

    view! {
        <section class=css::collection>
            <div class=css::heading>
                <h2>"Collection"</h2>
                <div class=css::tools>
                    <button
                        class=css::tool
                        title="Reload the collection"
                        disabled=move || loading.get()
                        on:click=move |_| fetch(true)
                    >
                        <Icon icon=ic::RELOAD />
                    </button>
                    <button class=css::tool on:click=move |_| ctx.navigate(View::Creator)>
                        <Icon icon=ic::CREATE />
                        <span>"Create"</span>
                    </button>
                </div>
            </div>

            <Show
                when=move || !items.with(Vec::is_empty)
                fallback=move || view! {
                    <p class=css::empty>
                        {move || if loading.get() { "Loading collection..." } else { "No tokens yet." }}
                    </p>
                }
            >
                <div class=css::grid>
                    <For
                        each=move || items.get()
                        key=|item| item.id.clone()
                        children=move |item| view! { <ItemCard item=item /> }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let soulbound = !item.is_transferable();
    let name = item.name.clone();
    let image = item.image.clone();
    let token_id = item.token_id;

    view! {
        <button class=css::card on:click=move |_| ctx.dispatch(Action::SelectItem(item.clone()))>
            <div class=css::thumb>
                <img src=image alt=name.clone() loading="lazy" />
                {soulbound.then(|| view! {
                    <span class=css::badge title="Soulbound">
                        <Icon icon=ic::SOULBOUND />
                    </span>
                })}
            </div>
            <div class=css::meta>
                <span class=css::name>{name}</span>
                <span class=css::tokenId>{format!("#{}", token_id)}</span>
            </div>
        </button>
    }
}
