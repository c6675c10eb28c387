//! Search view-state machine.
//!
//! A [`SearchView`] owns the [`EntryStore`] together with the transient query
//! state. Front-ends feed it focus changes, keystrokes and keyboard dismissal,
//! then ask [`SearchView::panel`] which of the mutually exclusive panels to
//! draw.

use crate::keyboard::KeyboardEvent;
use crate::store::{Entry, EntryStore};

/// Observable state of a [`SearchView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
	/// Input unfocused, results hidden.
	Idle,
	/// Focused without a query.
	Empty,
	/// Focused with a query that matches nothing.
	NoMatch,
	/// Focused with at least one match.
	HasMatches,
}

impl ViewState {
	#[must_use]
	pub fn is_focused(self) -> bool {
		!matches!(self, ViewState::Idle)
	}
}

/// Panel selected for rendering by [`SearchView::panel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel<'a> {
	/// Informational placeholder (idle or empty query).
	Placeholder,
	/// Offer to create an entry from the literal query text.
	Create(&'a str),
	/// Matching entries in store order.
	Matches(&'a [Entry]),
}

/// View model for the search-or-create screen.
#[derive(Debug, Clone, Default)]
pub struct SearchView {
	store: EntryStore,
	focused: bool,
	query: String,
	results_visible: bool,
	matches: Vec<Entry>,
}

impl SearchView {
	#[must_use]
	pub fn new(store: EntryStore) -> Self {
		Self {
			store,
			focused: false,
			query: String::new(),
			results_visible: false,
			matches: Vec::new(),
		}
	}

	/// Input gained focus.
	pub fn focus(&mut self) {
		if self.focused {
			return;
		}
		self.focused = true;
		self.results_visible = true;
		log::debug!("search input focused");
	}

	/// Replace the query text and recompute the match set.
	///
	/// Text only arrives through a focused input, so an idle view is focused
	/// first.
	pub fn set_query(&mut self, text: impl Into<String>) {
		self.focus();
		self.query = text.into();
		self.matches = self.store.filter(&self.query);
	}

	/// Keyboard dismissed: return to [`ViewState::Idle`].
	pub fn dismiss(&mut self) {
		if self.focused {
			log::debug!("search dismissed with query {:?}", self.query);
		}
		self.focused = false;
		self.results_visible = false;
		self.query.clear();
		self.matches.clear();
	}

	/// Append the current query as a new entry and return to idle.
	///
	/// Only available while the query matches nothing; returns `None`
	/// otherwise.
	pub fn create(&mut self) -> Option<Entry> {
		if self.state() != ViewState::NoMatch {
			return None;
		}
		let value = std::mem::take(&mut self.query);
		let entry = self.store.append(value);
		log::info!("created entry {} ({:?})", entry.id, entry.value);
		self.dismiss();
		Some(entry)
	}

	/// Apply a keyboard visibility change delivered by a subscription.
	pub fn handle_keyboard(&mut self, event: KeyboardEvent) {
		match event {
			KeyboardEvent::WillHide => self.dismiss(),
			KeyboardEvent::DidShow => {}
		}
	}

	#[must_use]
	pub fn state(&self) -> ViewState {
		if !self.focused {
			ViewState::Idle
		} else if !self.matches.is_empty() {
			ViewState::HasMatches
		} else if self.query.is_empty() {
			ViewState::Empty
		} else {
			ViewState::NoMatch
		}
	}

	/// Select the panel to draw for the current state.
	#[must_use]
	pub fn panel(&self) -> Panel<'_> {
		match self.state() {
			ViewState::Idle | ViewState::Empty => Panel::Placeholder,
			ViewState::NoMatch => Panel::Create(&self.query),
			ViewState::HasMatches => Panel::Matches(&self.matches),
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn results_visible(&self) -> bool {
		self.results_visible
	}

	#[must_use]
	pub fn matches(&self) -> &[Entry] {
		&self.matches
	}

	#[must_use]
	pub fn store(&self) -> &EntryStore {
		&self.store
	}

	/// Consume the view, returning the store with any created entries.
	#[must_use]
	pub fn into_store(self) -> EntryStore {
		self.store
	}
}
