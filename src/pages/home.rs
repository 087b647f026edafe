//! Home Page
//!
//! The single record form & list view.

use leptos::*;

use crate::actions;
use crate::api::SharedStore;
use crate::components::{EntryForm, EntryList};
use crate::state::global::{GlobalState, MSG_LOAD_FAILED};

/// Record form & list view
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let store = use_context::<SharedStore>().expect("SharedStore not found");

    // Fetch all entries on mount. The epoch guards against a stale response
    // landing after a newer load or after the view is gone.
    create_effect(move |_| {
        let store = store.clone();
        let epoch = state.begin_load();
        spawn_local(async move {
            let result = actions::load_entries(store.as_ref()).await;
            if !state.is_current_load(epoch) {
                return;
            }
            match result {
                Ok(entries) => state.replace_entries(entries),
                Err(err) => {
                    web_sys::console::error_1(&format!("読み込みエラー: {}", err).into());
                    state.set_error(MSG_LOAD_FAILED);
                }
            }
            state.finish_load();
        });
    });

    view! {
        <div>
            <h1 class="text-2xl font-bold mb-4">"📘 記録アプリ"</h1>

            <div class="mb-4">
                <EntryForm />
            </div>

            <hr class="border-zinc-700 my-6" />

            <EntryList />
        </div>
    }
}
