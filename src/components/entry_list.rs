//! Entry List Component
//!
//! Reverse-chronological list of saved records.

use leptos::*;

use crate::model::Entry;
use crate::state::global::GlobalState;

/// Entry list, rendered in cached order (newest first)
#[component]
pub fn EntryList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="space-y-3">
            {move || {
                if state.loading.get() {
                    return view! {
                        <p class="text-zinc-400 text-sm">"読み込み中..."</p>
                    }
                    .into_view();
                }

                let entries = state.entries.get();
                if entries.is_empty() {
                    view! {
                        <p class="text-zinc-400 text-sm">"まだ記録がありません"</p>
                    }
                    .into_view()
                } else {
                    entries
                        .into_iter()
                        .map(|entry| view! { <EntryCard entry=entry /> })
                        .collect_view()
                }
            }}
        </div>
    }
}

/// A single record card
#[component]
fn EntryCard(entry: Entry) -> impl IntoView {
    // Localized timestamp, like the store's created_at shown in local time
    let timestamp = entry
        .created_at
        .with_timezone(&chrono::Local)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string();

    view! {
        <div class="p-3 bg-zinc-800 rounded border border-zinc-700">
            <div class="text-sm text-zinc-400">{timestamp}</div>
            <div class="text-lg font-semibold">
                {format!("{}: {}", entry.tag, entry.value)}
            </div>
            {(!entry.note.is_empty()).then(|| view! {
                <div class="text-zinc-300">{entry.note.clone()}</div>
            })}
        </div>
    }
}
