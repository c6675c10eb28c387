//! The picker's fixed colour scheme.

use ratatui::style::{Color, Modifier, Style};

/// Styles for the picker's visual elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Prompt label and pane titles.
	pub header: Style,
	/// Text typed into the search input.
	pub prompt: Style,
	/// Placeholder shown in the input and the results pane.
	pub placeholder: Style,
	/// The create affordance.
	pub create: Style,
	/// Matched substring inside a result row.
	pub highlight: Style,
	/// Selected result row.
	pub row_highlight: Style,
	/// Results pane border while results are shown.
	pub border: Style,
	/// Results pane border while the view is idle.
	pub border_hidden: Style,
}

impl Theme {
	pub const DEFAULT: Self = Self {
		header: Style::new()
			.fg(Color::Rgb(0x8f, 0xa1, 0xb3))
			.add_modifier(Modifier::BOLD),
		prompt: Style::new().fg(Color::Rgb(0xdf, 0xe1, 0xe8)),
		placeholder: Style::new()
			.fg(Color::Rgb(0x65, 0x73, 0x7e))
			.add_modifier(Modifier::ITALIC),
		create: Style::new()
			.fg(Color::Rgb(0xa3, 0xbe, 0x8c))
			.add_modifier(Modifier::BOLD),
		highlight: Style::new()
			.fg(Color::Rgb(0xeb, 0xcb, 0x8b))
			.add_modifier(Modifier::BOLD),
		row_highlight: Style::new()
			.fg(Color::Rgb(0xdf, 0xe1, 0xe8))
			.bg(Color::Rgb(0x34, 0x3d, 0x46)),
		border: Style::new().fg(Color::Rgb(0x4f, 0x5b, 0x66)),
		border_hidden: Style::new().fg(Color::DarkGray),
	};

	/// Border style for the results pane.
	#[must_use]
	pub fn border_style(&self, visible: bool) -> Style {
		if visible {
			self.border
		} else {
			self.border_hidden
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::DEFAULT
	}
}
