//! UI Components
//!
//! Leptos components for the record form & list view.

pub mod entry_form;
pub mod entry_list;
pub mod toast;

pub use entry_form::EntryForm;
pub use entry_list::EntryList;
pub use toast::Toast;
