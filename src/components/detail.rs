//! Item detail screen.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use oke_core::{Action, Item, View, short_address};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::{markdown_to_html, validate_external_url};

stylance::import_crate_style!(css, "src/components/detail.module.css");

/// Detail view of one item.
///
/// # Props
/// - `item`: the selected item (the router only renders this screen when one
///   is selected)
#[component]
pub fn DetailScreen(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let description = markdown_to_html(&item.description);
    let external = validate_external_url(&item.external_url).ok();
    let explorer = Memo::new({
        let item = item.clone();
        move |_| {
            ctx.state
                .with(|s| s.web3.chain_id())
                .and_then(|id| item.explorer_url(id))
        }
    });
    let contract = item.contract_address.to_string();
    let soulbound = !item.is_transferable();

    let on_back = move |_: ev::MouseEvent| {
        ctx.dispatch(Action::ClearSelection);
        ctx.navigate(View::Collection);
    };

    view! {
        <article class=css::detail>
            <button class=css::back on:click=on_back>
                <Icon icon=ic::BACK />
                <span>"Collection"</span>
            </button>

            <div class=css::layout>
                <img class=css::image src=item.image.clone() alt=item.name.clone() />

                <div class=css::info>
                    <h2 class=css::name>
                        {item.name.clone()}
                        {soulbound.then(|| view! {
                            <span class=css::sbt title="Non-transferable">
                                <Icon icon=ic::SOULBOUND />
                                " Soulbound"
                            </span>
                        })}
                    </h2>

                    <div class=css::description inner_html=description></div>

                    <dl class=css::facts>
                        <dt>"Token"</dt>
                        <dd>{format!("#{}", item.token_id)}</dd>
                        <dt>"Contract"</dt>
                        <dd title=contract.clone()>{short_address(&contract)}</dd>
                    </dl>

                    <div class=css::links>
                        {move || explorer.get().map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer">
                                <Icon icon=ic::NETWORK />
                                " View on explorer"
                            </a>
                        })}
                        {external.map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer">
                                <Icon icon=ic::EXTERNAL_LINK />
                                " Project page"
                            </a>
                        })}
                    </div>
                </div>
            </div>

            <section class=css::transcript>
                <h3>"Transcript"</h3>
                <pre>{item.transcript.clone()}</pre>
            </section>
        </article>
    }
}
