//! State Management
//!
//! Global reactive state and form draft handling.

pub mod form;
pub mod global;

pub use form::EntryDraft;
pub use global::{provide_global_state, GlobalState};
