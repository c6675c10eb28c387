use std::fmt::Write;

use anyhow::Result;
use sift_core::Entry;
use sift_tui::SessionOutcome;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	print!("{}", format_outcome_plain(outcome));
}

/// Created entries first, then the full store, one `id<TAB>value` per line.
pub(crate) fn format_outcome_plain(outcome: &SessionOutcome) -> String {
	let mut out = String::new();
	if outcome.created.is_empty() {
		let _ = writeln!(out, "No entries created");
	} else {
		let _ = writeln!(out, "Created ({}):", outcome.created.len());
		write_rows(&mut out, &outcome.created);
	}
	let _ = writeln!(out, "Entries ({}):", outcome.entries.len());
	write_rows(&mut out, &outcome.entries);
	out
}

fn write_rows(out: &mut String, entries: &[Entry]) {
	for entry in entries {
		let _ = writeln!(out, "  {}\t{}", entry.id, entry.value);
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	fn sample() -> SessionOutcome {
		SessionOutcome {
			created: vec![Entry::new(3, "xyz")],
			entries: vec![Entry::new(1, "Street"), Entry::new(2, "Men"), Entry::new(3, "xyz")],
		}
	}

	#[test]
	fn json_format_lists_created_and_store() {
		let json = format_outcome_json(&sample()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["created"][0]["id"], 3);
		assert_eq!(value["created"][0]["value"], "xyz");
		assert_eq!(value["entries"].as_array().map(Vec::len), Some(3));
	}

	#[test]
	fn plain_format_lists_rows() {
		let text = format_outcome_plain(&sample());
		assert_eq!(
			text,
			"Created (1):\n  3\txyz\nEntries (3):\n  1\tStreet\n  2\tMen\n  3\txyz\n"
		);
	}

	#[test]
	fn plain_format_without_creations() {
		let outcome = SessionOutcome {
			created: Vec::new(),
			entries: Vec::new(),
		};
		assert_eq!(
			format_outcome_plain(&outcome),
			"No entries created\nEntries (0):\n"
		);
	}
}
