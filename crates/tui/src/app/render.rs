use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use super::App;
use crate::components::{InputContext, ResultsContext, render_input, render_results};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let [input_row, results_area] =
			Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);

		let input_ctx = InputContext {
			search_input: &self.search_input,
			prompt: &self.ui.prompt,
			area: input_row,
			theme: &self.theme,
		};
		self.input_area = Some(render_input(frame, input_ctx));
		self.results_area = Some(results_area);

		let results_ctx = ResultsContext {
			panel: self.view.panel(),
			query: self.view.query(),
			visible: self.view.results_visible(),
			labels: &self.ui,
			theme: &self.theme,
		};
		render_results(frame, results_area, &mut self.table_state, results_ctx);
	}
}
