//! Interactive terminal UI for the `sift` search-or-create picker.
//!
//! This crate contains the full TUI application including the builder,
//! event loop, rendering pipeline and the reusable widgets/style definitions
//! layered over the view model from `sift-core`.

mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod runtime;
mod style;

pub use app::App;
pub use builder::Picker;
pub use config::UiLabels;
pub use outcome::SessionOutcome;

pub use crate::input::QueryInput;
pub use crate::style::Theme;
