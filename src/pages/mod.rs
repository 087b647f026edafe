//! Pages
//!
//! Top-level page components.

pub mod home;

pub use home::Home;
