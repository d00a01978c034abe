//! Logging prelude module for convenient access to tracing macros.
//!
//! This module provides convenient re-exports of common tracing macros
//! to reduce verbosity and maintain consistency across the codebase.
//!
//! # Usage
//!
//! ```ignore
//! use crate::logging::*;
//!
//! info!("This is an info message");
//! warn!("This is a warning");
//! error!("An error occurred");
//! debug!("Debug information");
//! ```

pub use tracing::{debug, error, info, warn};

use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::permissions::{DIR_MODE, FILE_MODE};

/// `RUST_LOG` if set, otherwise `default_level`
fn env_filter(default_level: &str) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the tracing subscriber writing to stderr.
///
/// Control the log level with the `RUST_LOG` environment variable:
///
/// ```bash
/// RUST_LOG=debug rcsync --src a --dst b
/// RUST_LOG=rcsync::delete=debug rcsync --src a --dst b --delete-missing
/// ```
pub fn init_tracing(default_level: &str) {
	tracing_subscriber::fmt()
		.with_env_filter(env_filter(default_level))
		.with_writer(io::stderr)
		.init();
}

/// Name of the log file for a run started at `now`
pub fn log_file_name(now: DateTime<Local>) -> String {
	now.format("%Y-%m-%d_%H-%M-%S.log").to_string()
}

/// Open (create or append) a log file with the standard file mode
pub fn open_log_file(path: &Path) -> io::Result<fs::File> {
	fs::OpenOptions::new().create(true).append(true).mode(FILE_MODE).open(path)
}

/// Initialize tracing into a timestamped file under `log_dir`
///
/// The directory is created when missing; a failure to create it is logged as
/// a warning through whichever subscriber ends up installed. If the file
/// cannot be opened the subscriber falls back to stderr and the failure is
/// logged there.
/// Returns the path of the log file in use, if any.
pub fn init_file_logging(log_dir: &Path, default_level: &str) -> Option<PathBuf> {
	let mut dir_warning = None;
	if !log_dir.is_dir() {
		if let Err(e) = fs::DirBuilder::new().recursive(true).mode(DIR_MODE).create(log_dir) {
			dir_warning = Some(format!("Failed to create log folder {}: {}", log_dir.display(), e));
		}
	}

	let path = log_dir.join(log_file_name(Local::now()));
	let in_use = match open_log_file(&path) {
		Ok(file) => {
			tracing_subscriber::fmt()
				.with_env_filter(env_filter(default_level))
				.with_writer(Mutex::new(file))
				.with_ansi(false)
				.init();
			Some(path)
		}
		Err(e) => {
			init_tracing(default_level);
			warn!("Log information will be printed to stderr");
			error!("Could not open log file {}: {}", path.display(), e);
			None
		}
	};

	if let Some(warning) = dir_warning {
		warn!("{}", warning);
	}
	in_use
}


// vim: ts=4
