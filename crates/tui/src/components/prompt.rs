use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the input row.
pub struct InputContext<'a, 'i> {
	pub search_input: &'a QueryInput<'i>,
	pub prompt: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render `<prompt> > <input>` and return the area occupied by the input.
pub fn render_input(frame: &mut Frame, ctx: InputContext<'_, '_>) -> Rect {
	let InputContext {
		search_input,
		prompt,
		area,
		theme,
	} = ctx;

	let prompt_width = prompt_width(prompt);
	let [prompt_area, input_area] =
		Layout::horizontal([Constraint::Length(prompt_width), Constraint::Min(1)]).areas(area);

	if prompt_width > 0 {
		let line = Line::from(vec![
			Span::styled(prompt, theme.header),
			Span::styled(" > ", theme.placeholder),
		]);
		frame.render_widget(Paragraph::new(line), prompt_area);
	}

	search_input.render(frame, input_area);
	input_area
}

fn prompt_width(prompt: &str) -> u16 {
	if prompt.is_empty() {
		0
	} else {
		u16::try_from(prompt.width() + 3).unwrap_or(u16::MAX)
	}
}
