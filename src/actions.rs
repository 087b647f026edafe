//! Load & Submit Flows
//!
//! The two operations of the page, decoupled from the view layer so they can
//! be driven against a substitute store in tests.

use crate::api::{EntryStore, StoreError};
use crate::model::Entry;
use crate::state::form::EntryDraft;

/// What a submit attempt produced.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Presence check failed; no request was issued.
    Invalid(&'static str),
    /// Insert accepted; the stored representation(s) to merge into the list.
    Saved(Vec<Entry>),
    /// Insert rejected or the store was unreachable.
    Failed(StoreError),
}

/// Fetch all entries, newest first, in exactly the store's order.
pub async fn load_entries(store: &dyn EntryStore) -> Result<Vec<Entry>, StoreError> {
    store.list().await
}

/// Validate the draft and, when it passes, insert it.
pub async fn submit_entry(store: &dyn EntryStore, draft: &EntryDraft) -> SubmitOutcome {
    let new = match draft.validate() {
        Ok(new) => new,
        Err(msg) => return SubmitOutcome::Invalid(msg),
    };

    match store.insert(&new).await {
        Ok(saved) => SubmitOutcome::Saved(saved),
        Err(err) => SubmitOutcome::Failed(err),
    }
}
