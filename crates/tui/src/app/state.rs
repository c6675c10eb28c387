//! Core state container for the terminal application's front-end.
//!
//! The `state` module exposes the [`App`] struct which bundles the search view
//! model, the query input widget and the keyboard subscription that ties the
//! view to the on-screen keyboard while it is mounted.

use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use sift_core::{
	Entry, EntryStore, KeyboardEvent, KeyboardSubscription, SearchView, SoftKeyboard, ViewState,
};

use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::outcome::SessionOutcome;
use crate::style::Theme;

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub(crate) view: SearchView,
	/// Text input widget for the query.
	pub search_input: QueryInput<'a>,
	pub(crate) ui: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) keyboard: SoftKeyboard,
	pub(crate) keyboard_events: Option<KeyboardSubscription>,
	pub(crate) table_state: TableState,
	pub(crate) input_area: Option<Rect>,
	pub(crate) results_area: Option<Rect>,
	pub(crate) created: Vec<Entry>,
}

impl<'a> App<'a> {
	/// Construct an unmounted [`App`] over `store`.
	pub fn new(store: EntryStore, keyboard: SoftKeyboard) -> Self {
		let mut app = Self {
			view: SearchView::new(store),
			search_input: QueryInput::new(""),
			ui: UiLabels::default(),
			theme: Theme::default(),
			keyboard,
			keyboard_events: None,
			table_state: TableState::default(),
			input_area: None,
			results_area: None,
			created: Vec::new(),
		};
		app.search_input.apply_theme(&app.theme);
		app.set_labels(UiLabels::default());
		app
	}

	/// Start listening for keyboard visibility changes.
	///
	/// Mounting twice keeps the existing registration.
	pub fn mount(&mut self) {
		if self.keyboard_events.is_some() {
			return;
		}
		self.keyboard_events = Some(self.keyboard.subscribe());
		log::debug!("picker mounted");
	}

	/// Stop listening for keyboard visibility changes.
	pub fn unmount(&mut self) {
		if self.keyboard_events.take().is_some() {
			log::debug!("picker unmounted");
		}
	}

	#[must_use]
	pub fn is_mounted(&self) -> bool {
		self.keyboard_events.is_some()
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.search_input
			.set_placeholder(labels.input_placeholder.clone());
		self.ui = labels;
	}

	#[must_use]
	pub fn state(&self) -> ViewState {
		self.view.state()
	}

	#[must_use]
	pub fn view(&self) -> &SearchView {
		&self.view
	}

	/// Entries created since the app was constructed, oldest first.
	#[must_use]
	pub fn created(&self) -> &[Entry] {
		&self.created
	}

	/// Focus the input and raise the keyboard.
	pub(crate) fn focus_input(&mut self) {
		self.view.focus();
		self.search_input.set_focused(true);
		self.keyboard.show();
	}

	/// Focus the input and type `query` into it.
	pub fn enter_query(&mut self, query: &str) {
		self.focus_input();
		self.search_input.set_text(query);
		self.sync_query();
	}

	/// Recompute matches from the input text.
	pub(crate) fn sync_query(&mut self) {
		self.view.set_query(self.search_input.text());
		self.ensure_selection();
	}

	/// Ask the keyboard to hide; the mounted view resets once the
	/// [`KeyboardEvent::WillHide`] notification is pumped.
	pub(crate) fn dismiss_keyboard(&mut self) {
		self.keyboard.dismiss();
		self.pump_keyboard_events();
	}

	/// Apply pending keyboard notifications to the view.
	pub(crate) fn pump_keyboard_events(&mut self) {
		let Some(subscription) = &self.keyboard_events else {
			return;
		};
		for event in subscription.drain() {
			self.view.handle_keyboard(event);
			if event == KeyboardEvent::WillHide {
				self.reset_input();
			}
		}
	}

	/// Append the unmatched query as a new entry and hide the keyboard.
	pub(crate) fn create_entry(&mut self) -> Option<Entry> {
		let entry = self.view.create()?;
		self.created.push(entry.clone());
		self.reset_input();
		self.dismiss_keyboard();
		Some(entry)
	}

	pub(crate) fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	pub(crate) fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.view.matches().len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}

	/// Keep the highlighted row within the current match set.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.view.matches().len();
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	/// Snapshot of the session for the caller.
	#[must_use]
	pub fn outcome(&self) -> SessionOutcome {
		SessionOutcome {
			created: self.created.clone(),
			entries: self.view.store().entries().to_vec(),
		}
	}

	fn reset_input(&mut self) {
		self.search_input.clear();
		self.search_input.set_focused(false);
		self.table_state.select(None);
	}
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.unmount();
	}
}
