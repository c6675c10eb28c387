//! File-backed logging for the terminal UI.
//!
//! The UI owns the terminal while it runs, so records go to `sift.log` in the
//! data directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target, WriteStyle};

use crate::app_dirs;

/// Environment variable holding the `env_logger` filter.
pub(crate) const LOG_ENV: &str = "SIFT_LOG";
const DEFAULT_FILTER: &str = "warn";
const LOG_FILE: &str = "sift.log";

/// Install the global logger. Returns the log file path.
pub(crate) fn initialize() -> Result<PathBuf> {
	let dir = app_dirs::get_data_dir()?;
	let path = init_in(&dir)?;
	log::debug!("logging to {}", path.display());
	Ok(path)
}

fn init_in(dir: &Path) -> Result<PathBuf> {
	let path = open_target(dir)?;
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	Builder::from_env(Env::new().filter_or(LOG_ENV, DEFAULT_FILTER))
		.target(Target::Pipe(Box::new(file)))
		.write_style(WriteStyle::Never)
		.format_timestamp_millis()
		.try_init()
		.context("logger already initialised")?;
	Ok(path)
}

fn open_target(dir: &Path) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create data directory {}", dir.display()))?;
	Ok(dir.join(LOG_FILE))
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn log_file_lives_in_created_data_dir() {
		let dir = tempdir().expect("tempdir");
		let nested = dir.path().join("nested/data");
		let path = open_target(&nested).expect("target");
		assert!(nested.is_dir());
		assert_eq!(path, nested.join("sift.log"));
	}
}
