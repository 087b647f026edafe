//! Entry Form Component
//!
//! Tag, value, and note inputs with a submit control.

use leptos::*;

use crate::actions::{self, SubmitOutcome};
use crate::api::SharedStore;
use crate::state::form::EntryDraft;
use crate::state::global::{GlobalState, MSG_SAVE_FAILED};

/// Record entry form
#[component]
pub fn EntryForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let store = use_context::<SharedStore>().expect("SharedStore not found");

    let (tag, set_tag) = create_signal(String::new());
    let (value, set_value) = create_signal(String::new());
    let (note, set_note) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Drop re-entrant submits while an insert is outstanding.
        if state.submitting.get_untracked() {
            return;
        }

        state.clear_error();

        let draft = EntryDraft {
            tag: tag.get_untracked(),
            value: value.get_untracked(),
            note: note.get_untracked(),
        };

        state.submitting.set(true);

        let store = store.clone();
        spawn_local(async move {
            let outcome = actions::submit_entry(store.as_ref(), &draft).await;
            if let SubmitOutcome::Failed(err) = &outcome {
                web_sys::console::error_1(&format!("挿入エラー: {}", err).into());
            }
            apply_outcome(state, set_tag, set_value, set_note, outcome);
            let _ = state.submitting.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-2">
            <input
                type="text"
                placeholder="タグ（例: 酒）"
                prop:value=move || tag.get()
                on:input=move |ev| set_tag.set(event_target_value(&ev))
                class="w-full p-2 bg-zinc-800 text-white border border-zinc-700 rounded"
            />
            <input
                type="number"
                step="any"
                placeholder="数値（例: 16.8）"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full p-2 bg-zinc-800 text-white border border-zinc-700 rounded"
            />
            <textarea
                placeholder="メモ（例: ジムビーム350ml）"
                prop:value=move || note.get()
                on:input=move |ev| set_note.set(event_target_value(&ev))
                class="w-full p-2 bg-zinc-800 text-white border border-zinc-700 rounded"
            />
            <button
                type="submit"
                disabled=move || state.submitting.get()
                class="bg-blue-600 hover:bg-blue-500 disabled:bg-zinc-600 disabled:cursor-not-allowed
                       text-white font-semibold px-4 py-2 rounded transition-colors"
            >
                {move || if state.submitting.get() { "保存中..." } else { "記録する" }}
            </button>

            {move || {
                state.error.get().map(|msg| view! {
                    <p class="text-red-400 text-sm mt-2">{msg}</p>
                })
            }}
        </form>
    }
}

/// Fold a submit result into the form and global state. Only a successful
/// insert clears the three fields; a failure keeps them for retry.
fn apply_outcome(
    state: GlobalState,
    set_tag: WriteSignal<String>,
    set_value: WriteSignal<String>,
    set_note: WriteSignal<String>,
    outcome: SubmitOutcome,
) {
    match outcome {
        SubmitOutcome::Invalid(msg) => {
            state.set_error(msg);
        }
        SubmitOutcome::Saved(saved) => {
            let _ = set_tag.try_set(String::new());
            let _ = set_value.try_set(String::new());
            let _ = set_note.try_set(String::new());
            state.merge_inserted(saved);
            state.show_success("記録しました");
        }
        SubmitOutcome::Failed(_) => {
            state.set_error(MSG_SAVE_FAILED);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StoreError;
    use crate::model::Entry;
    use crate::state::form::MSG_REQUIRED;
    use chrono::{TimeZone, Utc};

    fn saved_entry() -> Entry {
        Entry {
            id: "srv-1".to_string(),
            tag: "酒".to_string(),
            value: 16.8,
            note: "ジムビーム350ml".to_string(),
            created_at: Utc.timestamp_opt(1_000, 0).unwrap(),
        }
    }

    fn filled_form() -> (
        GlobalState,
        (ReadSignal<String>, WriteSignal<String>),
        (ReadSignal<String>, WriteSignal<String>),
        (ReadSignal<String>, WriteSignal<String>),
    ) {
        let state = GlobalState::new();
        let tag = create_signal("酒".to_string());
        let value = create_signal("16.8".to_string());
        let note = create_signal("ジムビーム350ml".to_string());
        (state, tag, value, note)
    }

    #[test]
    fn successful_save_clears_all_three_fields() {
        let runtime = create_runtime();
        let (state, (tag, set_tag), (value, set_value), (note, set_note)) = filled_form();

        apply_outcome(
            state,
            set_tag,
            set_value,
            set_note,
            SubmitOutcome::Saved(vec![saved_entry()]),
        );

        assert_eq!(tag.get_untracked(), "");
        assert_eq!(value.get_untracked(), "");
        assert_eq!(note.get_untracked(), "");
        assert_eq!(state.entries.get_untracked().len(), 1);
        assert_eq!(state.entries.get_untracked()[0].tag, "酒");
        assert_eq!(state.error.get_untracked(), None);
        assert!(state.success.get_untracked().is_some());

        runtime.dispose();
    }

    #[test]
    fn failed_save_preserves_fields_and_sets_error() {
        let runtime = create_runtime();
        let (state, (tag, set_tag), (value, set_value), (note, set_note)) = filled_form();

        apply_outcome(
            state,
            set_tag,
            set_value,
            set_note,
            SubmitOutcome::Failed(StoreError::Rejected(
                "permission denied for table entries".to_string(),
            )),
        );

        assert_eq!(tag.get_untracked(), "酒");
        assert_eq!(value.get_untracked(), "16.8");
        assert_eq!(note.get_untracked(), "ジムビーム350ml");
        assert!(state.entries.get_untracked().is_empty());
        assert_eq!(state.error.get_untracked(), Some(MSG_SAVE_FAILED.to_string()));

        runtime.dispose();
    }

    #[test]
    fn invalid_draft_keeps_fields_and_sets_validation_message() {
        let runtime = create_runtime();
        let (state, (tag, set_tag), (value, set_value), (note, set_note)) = filled_form();

        apply_outcome(
            state,
            set_tag,
            set_value,
            set_note,
            SubmitOutcome::Invalid(MSG_REQUIRED),
        );

        assert_eq!(tag.get_untracked(), "酒");
        assert_eq!(value.get_untracked(), "16.8");
        assert_eq!(note.get_untracked(), "ジムビーム350ml");
        assert_eq!(state.error.get_untracked(), Some(MSG_REQUIRED.to_string()));

        runtime.dispose();
    }
}
