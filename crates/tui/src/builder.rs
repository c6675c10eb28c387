use anyhow::Result;
use sift_core::{EntryStore, SoftKeyboard};

use crate::App;
use crate::config::UiLabels;
use crate::outcome::SessionOutcome;

/// A small builder for configuring the interactive picker before running it.
pub struct Picker {
	store: EntryStore,
	labels: Option<UiLabels>,
	initial_query: String,
}

impl Picker {
	/// Create a picker over the provided entries.
	#[must_use]
	pub fn new(store: EntryStore) -> Self {
		Self {
			store,
			labels: None,
			initial_query: String::new(),
		}
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	/// Start with `query` typed into a focused input. An empty query leaves
	/// the picker idle.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Build the [`App`] without starting the terminal loop.
	pub fn build<'a>(self, keyboard: SoftKeyboard) -> App<'a> {
		let mut app = App::new(self.store, keyboard);
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if !self.initial_query.is_empty() {
			app.enter_query(&self.initial_query);
		}
		app
	}

	/// Run the interactive picker with the configured options.
	pub fn run(self) -> Result<SessionOutcome> {
		let mut app = self.build(SoftKeyboard::new());
		app.run()
	}
}

#[cfg(test)]
mod tests {
	use sift_core::ViewState;

	use super::*;

	#[test]
	fn initial_query_starts_focused() {
		let keyboard = SoftKeyboard::new();
		let app = Picker::new(EntryStore::default())
			.with_initial_query("No")
			.build(keyboard.clone());
		assert_eq!(app.state(), ViewState::HasMatches);
		assert_eq!(app.view().matches().len(), 2);
		assert!(keyboard.is_visible());
	}

	#[test]
	fn without_query_the_picker_is_idle() {
		let app = Picker::new(EntryStore::default()).build(SoftKeyboard::new());
		assert_eq!(app.state(), ViewState::Idle);
		assert!(!app.is_mounted());
	}

	#[test]
	fn labels_are_applied() {
		let labels = UiLabels {
			placeholder: "Type a tag".into(),
			..UiLabels::default()
		};
		let app = Picker::new(EntryStore::new())
			.with_labels(labels.clone())
			.build(SoftKeyboard::new());
		assert_eq!(app.ui, labels);
	}
}
