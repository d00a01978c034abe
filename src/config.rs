//! Configuration for rcsync
//!
//! The configuration follows a priority chain:
//! 1. Built-in defaults (Config::default())
//! 2. Config file (TOML, or JSON5 for `.json`/`.json5`)
//! 3. CLI flags (highest priority)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SyncError;
use crate::sync::SyncOptions;

/// Default directory for timestamped log files
pub const DEFAULT_LOG_DIR: &str = "log";

/// Configuration for one rcsync invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
	// ========================================================================
	// SYNC
	// ========================================================================
	/// Source root
	pub source: Option<PathBuf>,

	/// Destination root (must already exist)
	pub destination: Option<PathBuf>,

	/// Remove destination entries absent from the source
	pub delete_missing: bool,

	// ========================================================================
	// OUTPUT & LOGGING
	// ========================================================================
	/// Write logs to a timestamped file instead of stderr
	pub log_to_file: bool,

	/// Directory holding log files
	pub log_dir: PathBuf,

	/// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
	pub log_level: String,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			source: None,
			destination: None,
			delete_missing: false,
			log_to_file: true,
			log_dir: PathBuf::from(DEFAULT_LOG_DIR),
			log_level: "info".to_string(),
		}
	}
}

/// Values given on the command line; `None` leaves the lower layer in place
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub source: Option<PathBuf>,
	pub destination: Option<PathBuf>,
	pub delete_missing: Option<bool>,
	pub log_dir: Option<PathBuf>,
	pub log_to_file: Option<bool>,
}

impl Config {
	/// Load a config file; the format is picked from the extension
	pub fn load(path: &Path) -> Result<Self, SyncError> {
		let content = fs::read_to_string(path).map_err(|e| SyncError::InvalidConfig {
			message: format!("cannot read {}: {}", path.display(), e),
		})?;

		let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_lowercase();
		let parsed = match ext.as_str() {
			"json" | "json5" => Self::from_json5(&content),
			_ => Self::from_toml(&content),
		};
		parsed.map_err(|message| SyncError::InvalidConfig {
			message: format!("{}: {}", path.display(), message),
		})
	}

	pub fn from_toml(content: &str) -> Result<Self, String> {
		toml::from_str(content).map_err(|e| e.to_string())
	}

	pub fn from_json5(content: &str) -> Result<Self, String> {
		json5::from_str(content).map_err(|e| e.to_string())
	}

	/// Apply command line values on top of this config
	pub fn merge_cli(mut self, cli: CliOverrides) -> Self {
		if let Some(source) = cli.source {
			self.source = Some(source);
		}
		if let Some(destination) = cli.destination {
			self.destination = Some(destination);
		}
		if let Some(delete_missing) = cli.delete_missing {
			self.delete_missing = delete_missing;
		}
		if let Some(log_dir) = cli.log_dir {
			self.log_dir = log_dir;
		}
		if let Some(log_to_file) = cli.log_to_file {
			self.log_to_file = log_to_file;
		}
		self
	}

	/// Extract the sync options; both roots are mandatory
	pub fn sync_options(&self) -> Result<SyncOptions, SyncError> {
		match (&self.source, &self.destination) {
			(Some(source), Some(destination))
				if !source.as_os_str().is_empty() && !destination.as_os_str().is_empty() =>
			{
				Ok(SyncOptions {
					source: source.clone(),
					destination: destination.clone(),
					delete_missing: self.delete_missing,
				})
			}
			_ => Err(SyncError::InvalidConfig {
				message: "both --src and --dst options are mandatory".to_string(),
			}),
		}
	}
}


// vim: ts=4
