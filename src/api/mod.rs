//! Remote Store Access
//!
//! The table-API seam and its REST implementation. Components receive the
//! store as an injected [`SharedStore`] context handle, never through a
//! module-level singleton, so the same views can be driven by a substitute
//! store in tests.

pub mod client;
pub mod error;

use std::rc::Rc;

use crate::model::{Entry, NewEntry};

pub use client::RestStore;
pub use error::StoreError;

/// Hosted table API for entries.
#[async_trait::async_trait(?Send)]
pub trait EntryStore {
    /// All entries, ordered by `created_at` descending.
    async fn list(&self) -> Result<Vec<Entry>, StoreError>;

    /// Insert one entry. Returns the stored representation(s) carrying the
    /// server-assigned `id` and `created_at`.
    async fn insert(&self, new: &NewEntry) -> Result<Vec<Entry>, StoreError>;
}

/// Store handle shared through Leptos context.
pub type SharedStore = Rc<dyn EntryStore>;
