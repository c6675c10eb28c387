//! UI building blocks shared across rendering and state modules.

/// Prompt row rendering.
pub mod prompt;
/// Results pane: placeholder, create affordance and match table.
pub mod results;
/// Match row construction and substring highlighting.
pub mod rows;

use ratatui::layout::Rect;

pub use prompt::{InputContext, render_input};
pub use results::{ResultsContext, render_results};

/// Whether the terminal cell at `column`/`row` falls inside `area`.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn point_in_rect_excludes_far_edges() {
		let area = Rect::new(2, 3, 4, 2);
		assert!(point_in_rect(2, 3, area));
		assert!(point_in_rect(5, 4, area));
		assert!(!point_in_rect(6, 4, area));
		assert!(!point_in_rect(5, 5, area));
		assert!(!point_in_rect(0, 0, Rect::new(0, 0, 0, 0)));
	}
}
