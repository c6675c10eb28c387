/// Textual configuration used when rendering the prompt and results pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Label rendered in front of the search input.
	pub prompt: String,
	/// Placeholder text shown inside the empty input.
	pub input_placeholder: String,
	/// Informational text shown while there is nothing to list.
	pub placeholder: String,
	/// Verb rendered in front of the quoted query on the create affordance.
	pub create_label: String,
	/// Title of the results pane.
	pub results_title: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			prompt: "Search".to_string(),
			input_placeholder: "search here".to_string(),
			placeholder: "Start searching...".to_string(),
			create_label: "Create".to_string(),
			results_title: "Results".to_string(),
		}
	}
}

impl UiLabels {
	/// Text of the create affordance for `query`.
	#[must_use]
	pub fn create_text(&self, query: &str) -> String {
		format!("{} \"{query}\"", self.create_label)
	}
}
