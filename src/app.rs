//! App Root Component
//!
//! Wires up global state, the store handle, and the page.

use std::rc::Rc;

use leptos::*;

use crate::api::{RestStore, SharedStore};
use crate::components::Toast;
use crate::pages::Home;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // The store handle is injected as context rather than imported as a
    // module-level singleton, so tests can mount the same tree against a
    // substitute store.
    let store: SharedStore = Rc::new(RestStore::from_config());
    provide_context(store);

    view! {
        <main class="min-h-screen bg-zinc-950 text-white p-6">
            <Home />
            <Toast />
        </main>
    }
}
