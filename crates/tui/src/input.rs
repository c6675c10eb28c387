//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, Input, Key, TextArea};

use crate::style::Theme;

/// Text input that never grows past one line.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	focused: bool,
	text_style: Style,
}

impl<'a> QueryInput<'a> {
	/// Create an input pre-filled with `initial`, cursor at the end.
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.move_cursor(CursorMove::End);
		textarea.set_cursor_line_style(Style::default());

		let mut input = Self {
			textarea,
			focused: false,
			text_style: Style::default(),
		};
		input.refresh_cursor();
		input
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	/// Replace the text, leaving the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		self.clear();
		self.textarea.insert_str(text);
	}

	/// Remove all text.
	pub fn clear(&mut self) {
		self.textarea.select_all();
		self.textarea.cut();
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Show or hide the cursor.
	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		self.refresh_cursor();
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>) {
		self.textarea.set_placeholder_text(text);
	}

	pub fn apply_theme(&mut self, theme: &Theme) {
		self.text_style = theme.prompt;
		self.textarea.set_style(theme.prompt);
		self.textarea.set_placeholder_style(theme.placeholder);
		self.refresh_cursor();
	}

	/// Feed a key press to the editor. Returns `true` when the text changed.
	///
	/// Keys that would insert a line break are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let input: Input = key.into();
		if inserts_newline(&input) {
			return false;
		}
		self.textarea.input(input)
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}

	fn refresh_cursor(&mut self) {
		let cursor = if self.focused {
			self.text_style.add_modifier(Modifier::REVERSED)
		} else {
			self.text_style
		};
		self.textarea.set_cursor_style(cursor);
	}
}

fn inserts_newline(input: &Input) -> bool {
	match input.key {
		Key::Enter => true,
		Key::Char('m' | 'j') => input.ctrl,
		_ => false,
	}
}
