use anyhow::Result;
use sift_core::EntryStore;
use sift_tui::{Picker, SessionOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive picker.
pub(crate) struct PickerWorkflow {
	picker: Picker,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let ResolvedConfig {
			entries,
			initial_query,
			labels,
		} = config;

		let picker = Picker::new(seed_store(entries))
			.with_labels(labels)
			.with_initial_query(initial_query);
		Self { picker }
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.picker.run()
	}
}

/// Configured seed values, or the built-in list.
fn seed_store(entries: Option<Vec<String>>) -> EntryStore {
	match entries {
		Some(values) => EntryStore::with_values(values),
		None => EntryStore::default(),
	}
}
