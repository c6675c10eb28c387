use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use sift_core::ViewState;

use super::App;
use crate::components::point_in_rect;
use crate::outcome::SessionOutcome;

impl App<'_> {
	/// Process a keyboard event and return the outcome if the user quits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Some(self.outcome());
		}

		if self.state() == ViewState::Idle {
			return self.handle_idle_key(key);
		}

		match key.code {
			KeyCode::Esc => self.dismiss_keyboard(),
			KeyCode::Enter => {
				if self.state() == ViewState::NoMatch {
					self.create_entry();
				}
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.search_input.input(key) {
					self.sync_query();
				}
			}
		}
		None
	}

	fn handle_idle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome()),
			KeyCode::Char('/' | 'i') | KeyCode::Tab | KeyCode::Enter => self.focus_input(),
			KeyCode::Char(_)
				if !key
					.modifiers
					.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
			{
				self.focus_input();
				if self.search_input.input(key) {
					self.sync_query();
				}
			}
			_ => {}
		}
		None
	}

	/// A click inside the input focuses it, a click on the create affordance
	/// creates the entry, and a click anywhere else hides the keyboard.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return;
		}

		let inside = |area: Option<Rect>| {
			area.is_some_and(|area| point_in_rect(mouse.column, mouse.row, area))
		};

		if inside(self.input_area) {
			self.focus_input();
		} else if inside(self.results_area) {
			if self.state() == ViewState::NoMatch {
				self.create_entry();
			}
		} else {
			self.dismiss_keyboard();
		}
	}

	/// The terminal lost focus: treat it like the keyboard being hidden.
	pub(crate) fn handle_focus_lost(&mut self) {
		self.dismiss_keyboard();
	}
}

#[cfg(test)]
mod tests {
	use sift_core::{Entry, EntryStore, SoftKeyboard};

	use super::*;

	fn sample_app() -> App<'static> {
		let store = EntryStore::from_entries(vec![
			Entry::new(1, "Street"),
			Entry::new(2, "Men"),
			Entry::new(3, "Survive"),
		]);
		let mut app = App::new(store, SoftKeyboard::new());
		app.mount();
		app
	}

	fn press(app: &mut App<'_>, code: KeyCode) -> Option<SessionOutcome> {
		app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn type_text(app: &mut App<'_>, text: &str) {
		for ch in text.chars() {
			assert!(press(app, KeyCode::Char(ch)).is_none());
		}
	}

	fn click(app: &mut App<'_>, column: u16, row: u16) {
		app.handle_mouse(MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column,
			row,
			modifiers: KeyModifiers::NONE,
		});
	}

	#[test]
	fn slash_focuses_without_typing() {
		let mut app = sample_app();
		press(&mut app, KeyCode::Char('/'));
		assert_eq!(app.state(), ViewState::Empty);
		assert_eq!(app.search_input.text(), "");
	}

	#[test]
	fn typing_filters_in_store_order() {
		let mut app = sample_app();
		press(&mut app, KeyCode::Tab);
		type_text(&mut app, "re");
		assert_eq!(app.state(), ViewState::HasMatches);
		let values: Vec<_> = app.view().matches().iter().map(|e| e.value.as_str()).collect();
		assert_eq!(values, vec!["Street", "Survive"]);
	}

	#[test]
	fn printable_key_on_idle_view_starts_query() {
		let mut app = sample_app();
		type_text(&mut app, "M");
		assert_eq!(app.state(), ViewState::HasMatches);
		assert_eq!(app.search_input.text(), "M");
	}

	#[test]
	fn backspacing_to_empty_returns_to_empty_state() {
		let mut app = sample_app();
		type_text(&mut app, "x");
		assert_eq!(app.state(), ViewState::NoMatch);
		press(&mut app, KeyCode::Backspace);
		assert_eq!(app.state(), ViewState::Empty);
	}

	#[test]
	fn escape_dismisses_then_quits() {
		let mut app = sample_app();
		type_text(&mut app, "Str");
		assert!(press(&mut app, KeyCode::Esc).is_none());
		assert_eq!(app.state(), ViewState::Idle);
		assert_eq!(app.view().query(), "");

		let outcome = press(&mut app, KeyCode::Esc).expect("second escape quits");
		assert!(outcome.created.is_empty());
		assert_eq!(outcome.entries.len(), 3);
	}

	#[test]
	fn q_types_while_focused_but_quits_while_idle() {
		let mut app = sample_app();
		press(&mut app, KeyCode::Char('/'));
		assert!(press(&mut app, KeyCode::Char('q')).is_none());
		assert_eq!(app.search_input.text(), "q");

		press(&mut app, KeyCode::Esc);
		assert!(press(&mut app, KeyCode::Char('q')).is_some());
	}

	#[test]
	fn ctrl_c_always_quits() {
		let mut app = sample_app();
		type_text(&mut app, "Men");
		let outcome = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
		assert!(outcome.is_some());
	}

	#[test]
	fn enter_creates_only_when_nothing_matches() {
		let mut app = sample_app();
		type_text(&mut app, "Men");
		press(&mut app, KeyCode::Enter);
		assert_eq!(app.view().store().len(), 3);
		assert_eq!(app.state(), ViewState::HasMatches);

		press(&mut app, KeyCode::Esc);
		type_text(&mut app, "xyz");
		press(&mut app, KeyCode::Enter);
		assert_eq!(app.state(), ViewState::Idle);
		assert_eq!(app.created().len(), 1);
		assert_eq!(app.created()[0].value, "xyz");

		type_text(&mut app, "xyz");
		assert_eq!(app.state(), ViewState::HasMatches);
	}

	#[test]
	fn arrows_move_selection() {
		let mut app = sample_app();
		type_text(&mut app, "e");
		press(&mut app, KeyCode::Down);
		assert_eq!(app.table_state.selected(), Some(1));
		press(&mut app, KeyCode::Up);
		press(&mut app, KeyCode::Up);
		assert_eq!(app.table_state.selected(), Some(0));
	}

	#[test]
	fn clicks_focus_create_and_dismiss() {
		let mut app = sample_app();
		app.input_area = Some(Rect::new(10, 0, 20, 1));
		app.results_area = Some(Rect::new(0, 1, 40, 10));

		click(&mut app, 12, 0);
		assert_eq!(app.state(), ViewState::Empty);

		type_text(&mut app, "Str");
		click(&mut app, 50, 20);
		assert_eq!(app.state(), ViewState::Idle);

		type_text(&mut app, "new");
		click(&mut app, 5, 2);
		assert_eq!(app.state(), ViewState::Idle);
		assert_eq!(app.created().len(), 1);
	}

	#[test]
	fn losing_terminal_focus_dismisses() {
		let mut app = sample_app();
		type_text(&mut app, "Str");
		app.handle_focus_lost();
		assert_eq!(app.state(), ViewState::Idle);
	}
}
