use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};
use sift_core::Entry;

/// Split `text` into spans, styling every occurrence of `needle`.
#[must_use]
pub fn highlight_line<'a>(text: &'a str, needle: &str, highlight: Style) -> Line<'a> {
	if needle.is_empty() {
		return Line::from(text);
	}

	let mut spans = Vec::new();
	let mut cursor = 0;
	for (start, matched) in text.match_indices(needle) {
		if start > cursor {
			spans.push(Span::raw(&text[cursor..start]));
		}
		spans.push(Span::styled(matched, highlight));
		cursor = start + matched.len();
	}
	if cursor < text.len() {
		spans.push(Span::raw(&text[cursor..]));
	}
	Line::from(spans)
}

/// Build table rows for the current matches.
#[must_use]
pub fn build_match_rows<'a>(matches: &'a [Entry], query: &str, highlight: Style) -> Vec<Row<'a>> {
	matches
		.iter()
		.map(|entry| {
			Row::new([
				Cell::from(highlight_line(&entry.value, query, highlight)),
				Cell::from(entry.id.to_string()),
			])
		})
		.collect()
}
