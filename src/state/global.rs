//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::model::{self, Entry};

/// User-facing message for a failed initial load.
pub const MSG_LOAD_FAILED: &str = "読み込みに失敗しました";

/// User-facing message for a failed insert.
pub const MSG_SAVE_FAILED: &str = "保存に失敗しました";

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Cached entries, newest first
    pub entries: RwSignal<Vec<Entry>>,
    /// Initial load in flight
    pub loading: RwSignal<bool>,
    /// Insert in flight; gates the submit control
    pub submitting: RwSignal<bool>,
    /// Error message shown under the form
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Generation counter for load requests; stale results are dropped
    load_epoch: RwSignal<u64>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            submitting: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            load_epoch: create_rw_signal(0),
        }
    }

    /// Start a load request, superseding any earlier one. Returns the epoch
    /// the caller must present when applying the result.
    pub fn begin_load(&self) -> u64 {
        let epoch = self.load_epoch.get_untracked() + 1;
        self.load_epoch.set(epoch);
        self.loading.set(true);
        epoch
    }

    /// True while `epoch` is still the most recent load request. Returns
    /// false once superseded or after the view is disposed, so a late
    /// response is discarded instead of touching dead state.
    pub fn is_current_load(&self, epoch: u64) -> bool {
        self.load_epoch.try_get_untracked() == Some(epoch)
    }

    pub fn finish_load(&self) {
        let _ = self.loading.try_set(false);
    }

    /// Replace the cached list with the store's ordering.
    pub fn replace_entries(&self, entries: Vec<Entry>) {
        let _ = self.entries.try_set(entries);
    }

    /// Fold freshly inserted entries into the cached list, re-sorting
    /// newest-first rather than blindly prepending.
    pub fn merge_inserted(&self, saved: Vec<Entry>) {
        let _ = self.entries.try_update(|list| {
            *list = model::merge_newest_first(saved, list);
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        let _ = self.success.try_set(Some(message.to_string()));

        // Timers only exist in the browser; elsewhere the message just stays.
        #[cfg(target_arch = "wasm32")]
        {
            let success_signal = self.success;
            gloo_timers::callback::Timeout::new(3000, move || {
                let _ = success_signal.try_set(None);
            })
            .forget();
        }
    }

    /// Set the error message. Stays visible until the next submit clears it.
    pub fn set_error(&self, message: &str) {
        let _ = self.error.try_set(Some(message.to_string()));
    }

    /// Clear error message
    pub fn clear_error(&self) {
        let _ = self.error.try_set(None);
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, secs: i64) -> Entry {
        Entry {
            id: id.to_string(),
            tag: "tag".to_string(),
            value: 1.0,
            note: String::new(),
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn superseded_load_is_no_longer_current() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        let first = state.begin_load();
        assert!(state.is_current_load(first));

        let second = state.begin_load();
        assert!(!state.is_current_load(first));
        assert!(state.is_current_load(second));

        runtime.dispose();
    }

    #[test]
    fn merge_inserted_resorts_cached_list() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        state.replace_entries(vec![entry("b", 200), entry("a", 100)]);
        state.merge_inserted(vec![entry("c", 150)]);

        let ids: Vec<String> = state
            .entries
            .get_untracked()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, ["b", "c", "a"]);

        runtime.dispose();
    }
}
