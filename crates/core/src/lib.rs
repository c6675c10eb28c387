//! Core state for the `sift` search-or-create picker.
//!
//! The crate is front-end agnostic: [`store`] holds the searchable entries,
//! [`view`] implements the state machine driven by focus, keystrokes and
//! keyboard dismissal, and [`keyboard`] models the on-screen keyboard whose
//! visibility changes are delivered to mounted views.

pub mod keyboard;
pub mod store;
pub mod view;

pub use keyboard::{KeyboardEvent, KeyboardSubscription, SoftKeyboard};
pub use store::{Entry, EntryId, EntryStore};
pub use view::{Panel, SearchView, ViewState};
