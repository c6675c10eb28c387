use super::ResolvedConfig;

pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec!["Effective configuration:".to_string()];
	match &config.entries {
		Some(entries) if entries.is_empty() => lines.push("  Entries: (none)".to_string()),
		Some(entries) => lines.push(format!("  Entries: {}", entries.join(", "))),
		None => lines.push("  Entries: (built-in list)".to_string()),
	}
	lines.push(format!("  Prompt: {}", config.labels.prompt));
	lines.push(format!("  Input placeholder: {}", config.labels.input_placeholder));
	lines.push(format!("  Placeholder: {}", config.labels.placeholder));
	lines.push(format!("  Create label: {}", config.labels.create_label));
	lines.push(format!("  Results title: {}", config.labels.results_title));
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines
}
