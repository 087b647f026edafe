//! Entry Data Model
//!
//! The record shapes exchanged with the remote store.

use chrono::{DateTime, Utc};

/// A persisted record as returned by the store.
///
/// `id` and `created_at` are assigned server-side and are authoritative only
/// once they come back from an insert or a load.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Entry {
    pub id: String,
    pub tag: String,
    pub value: f64,
    #[serde(default)]
    pub note: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload: everything the client is allowed to set.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NewEntry {
    pub tag: String,
    pub value: f64,
    pub note: String,
}

/// Merge freshly inserted entries into the cached list, newest first.
///
/// The store orders by `created_at` descending on load, but a locally
/// inserted entry is not guaranteed to carry the newest server timestamp
/// (clock skew, concurrent writers). Sorting the merged list keeps the
/// rendered order consistent with what a reload would show. The sort is
/// stable, so entries with equal timestamps keep their relative order.
pub fn merge_newest_first(inserted: Vec<Entry>, existing: &[Entry]) -> Vec<Entry> {
    let mut merged = inserted;
    merged.extend_from_slice(existing);
    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    merged
}
