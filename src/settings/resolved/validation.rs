use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.labels.prompt.trim().is_empty() {
		return Err(ConfigError::invalid(
			"ui.prompt",
			config.labels.prompt.clone(),
			sources.source_for_prompt(),
			"must not be blank",
		));
	}

	if config.labels.placeholder.trim().is_empty() {
		return Err(ConfigError::invalid(
			"ui.placeholder",
			config.labels.placeholder.clone(),
			sources.source_for_placeholder(),
			"must not be blank",
		));
	}

	if let Some(entries) = &config.entries
		&& let Some(blank) = entries.iter().find(|value| value.trim().is_empty())
	{
		return Err(ConfigError::invalid(
			"store.entries",
			blank.clone(),
			sources.source_for_entries(),
			"entries must not be blank",
		));
	}

	if config.initial_query.contains(['\n', '\r']) {
		return Err(ConfigError::invalid(
			"ui.initial_query",
			config.initial_query.clone(),
			sources.source_for_initial_query(),
			"must be a single line",
		));
	}

	Ok(())
}
