//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] that owns the
//! application state signal.

use leptos::prelude::*;
use oke_core::{Action, AppState, View, chain_name, unsupported_network_message};
use tracing::{info, warn};

use crate::components::AppRouter;
use crate::config::deploy_config;
use crate::core::creator_store;
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read from any child with
/// `use_context::<AppContext>()`.
///
/// All mutation goes through [`AppContext::dispatch`], which reduces the
/// current state and replaces the signal value whole, so readers never see a
/// partially applied update.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub state: RwSignal<AppState>,
}

impl AppContext {
    /// Creates the context from the URL hash and any saved creator draft.
    pub fn new() -> Self {
        let mut initial = AppState {
            view: View::from_hash(&dom::get_hash()),
            ..AppState::default()
        };
        if let Some(creator) = creator_store::load() {
            info!("restored creator draft");
            initial.creator = creator;
        }

        Self {
            state: RwSignal::new(initial),
        }
    }

    /// Apply an action to the state.
    pub fn dispatch(&self, action: Action) {
        let next = self.state.with_untracked(|state| state.reduce(action));
        self.state.set(next);
    }

    pub fn navigate(&self, view: View) {
        if self.state.with_untracked(|s| s.view != view) {
            self.dispatch(Action::Navigate(view));
        }
    }

    /// Flag chains without a configured deployment.
    pub fn check_network(&self, chain_id: u64) {
        let config = deploy_config();
        if config.is_supported_chain(chain_id) {
            self.dispatch(Action::NetworkSupported);
            return;
        }

        let supported: Vec<&str> = config
            .networks
            .values()
            .filter(|n| !n.is_local())
            .map(|n| chain_name(n.chain_id))
            .collect();
        warn!(chain_id, "unsupported network");
        self.dispatch(Action::NetworkError(unsupported_network_message(
            chain_id, &supported,
        )));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the saved creator draft in step with the state.
fn setup_creator_persistence(ctx: AppContext) {
    let creator = Memo::new(move |_| ctx.state.with(|s| s.creator.clone()));
    Effect::new(move |_| {
        creator.with(|draft| {
            if draft.is_empty() {
                creator_store::clear();
            } else if let Err(e) = creator_store::save(draft) {
                warn!(%e, "could not save creator draft");
            }
        });
    });
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    setup_creator_persistence(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: #000;
                    color: #e5e5e5;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #f87171; margin-bottom: 1rem;">"Something went wrong"</h1>
                    <ul style="color: #fca5a5; margin-bottom: 2rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #2563eb;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 6px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
