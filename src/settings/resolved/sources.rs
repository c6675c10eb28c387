use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) store_entries: Option<SettingSource>,
	pub(crate) ui_prompt: Option<SettingSource>,
	pub(crate) ui_placeholder: Option<SettingSource>,
	pub(crate) ui_initial_query: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_entries(&self) -> SettingSource {
		self.store_entries
			.clone()
			.unwrap_or(SettingSource::ConfigKey("store.entries"))
	}

	pub(crate) fn source_for_prompt(&self) -> SettingSource {
		self.ui_prompt
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.prompt"))
	}

	pub(crate) fn source_for_placeholder(&self) -> SettingSource {
		self.ui_placeholder
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.placeholder"))
	}

	pub(crate) fn source_for_initial_query(&self) -> SettingSource {
		self.ui_initial_query
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.initial_query"))
	}
}
