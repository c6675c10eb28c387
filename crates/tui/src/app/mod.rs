//! Core application state and behavior for the interactive picker.
//!
//! The [`App`] type wraps the search view model with the terminal widgets.
//! Supporting modules partition the implementation into focused pieces:
//! actions (input handling), rendering, and state/lifecycle.

mod actions;
mod render;
mod state;

pub use state::App;
