use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, HighlightSpacing, Paragraph, Row, Table, TableState};
use sift_core::Panel;

use super::rows::build_match_rows;
use crate::config::UiLabels;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;

/// Argument bundle for rendering the results pane.
pub struct ResultsContext<'a> {
	pub panel: Panel<'a>,
	pub query: &'a str,
	pub visible: bool,
	pub labels: &'a UiLabels,
	pub theme: &'a Theme,
}

/// Render the bordered results pane for the selected panel.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	ctx: ResultsContext<'_>,
) {
	let ResultsContext {
		panel,
		query,
		visible,
		labels,
		theme,
	} = ctx;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(theme.border_style(visible))
		.title(Span::styled(labels.results_title.as_str(), theme.header));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	match panel {
		Panel::Placeholder => {
			let text = Paragraph::new(labels.placeholder.as_str()).style(theme.placeholder);
			frame.render_widget(text, inner);
		}
		Panel::Create(query) => {
			let line = Line::from(vec![
				Span::styled("+ ", theme.create),
				Span::styled(labels.create_text(query), theme.create),
				Span::styled("  (Enter)", theme.placeholder),
			]);
			frame.render_widget(Paragraph::new(line), inner);
		}
		Panel::Matches(matches) => {
			let rows = build_match_rows(matches, query, theme.highlight);
			render_match_table(frame, inner, table_state, rows, theme);
		}
	}
}

fn render_match_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	rows: Vec<Row<'_>>,
	theme: &Theme,
) {
	let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(6)])
		.column_spacing(TABLE_COLUMN_SPACING)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always)
		.style(Style::default());
	frame.render_stateful_widget(table, area, table_state);
}
