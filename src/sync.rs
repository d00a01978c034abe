//! Sync orchestration
//!
//! A run validates both roots, mirrors the source into the destination and,
//! when enabled, deletes destination entries the source does not have:
//!
//! ```rust,ignore
//! use rcsync::sync::SyncBuilder;
//!
//! let report = SyncBuilder::new()
//!     .source("./photos")
//!     .destination("/mnt/backup/photos")
//!     .delete_missing(true)
//!     .run()?;
//! println!("copied {} files", report.files_copied);
//! ```

use serde::Serialize;
use std::path::PathBuf;

use crate::callbacks::{NoCallbacks, SyncCallbacks};
use crate::delete::delete_missing;
use crate::error::SyncError;
use crate::logging::*;
use crate::mirror::mirror_tree;
use crate::validation::validate_root;
use crate::walk::PathSet;

/// The values one run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
	pub source: PathBuf,
	pub destination: PathBuf,
	/// Remove destination entries absent from the source
	pub delete_missing: bool,
}

impl SyncOptions {
	pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
		SyncOptions { source: source.into(), destination: destination.into(), delete_missing: false }
	}
}

/// Counters describing what a run did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
	/// Source directories ensured in the destination
	pub dirs_synced: usize,
	pub files_copied: usize,
	pub bytes_copied: u64,
	/// Files whose destination mtime already matched
	pub files_skipped: usize,
	/// Files that failed to copy (logged, run continued)
	pub files_failed: usize,
	/// Destination entries that could not be walked during deletion
	pub walk_errors: usize,
	/// Destination entries removed (a removed directory counts once)
	pub deleted: usize,
}

/// Run one sync with explicit options
pub fn sync(options: &SyncOptions, callbacks: &dyn SyncCallbacks) -> Result<SyncReport, SyncError> {
	validate_root(&options.source)?;
	validate_root(&options.destination)?;

	info!(
		"Syncing {} -> {} (delete missing: {})",
		options.source.display(),
		options.destination.display(),
		options.delete_missing
	);

	let mut report = SyncReport::default();
	let mut keep = options.delete_missing.then(PathSet::new);

	mirror_tree(&options.source, &options.destination, keep.as_mut(), callbacks, &mut report)?;

	if let Some(keep) = keep {
		delete_missing(&options.destination, &keep, callbacks, &mut report)?;
	}

	info!(
		"Sync finished: {} copied, {} up to date, {} failed, {} deleted",
		report.files_copied, report.files_skipped, report.files_failed, report.deleted
	);
	Ok(report)
}

/// Fluent builder for a sync run
pub struct SyncBuilder {
	source: Option<PathBuf>,
	destination: Option<PathBuf>,
	delete_missing: bool,
	callbacks: Option<Box<dyn SyncCallbacks>>,
}

impl SyncBuilder {
	pub fn new() -> Self {
		SyncBuilder { source: None, destination: None, delete_missing: false, callbacks: None }
	}

	pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
		self.source = Some(path.into());
		self
	}

	pub fn destination(mut self, path: impl Into<PathBuf>) -> Self {
		self.destination = Some(path.into());
		self
	}

	pub fn delete_missing(mut self, enabled: bool) -> Self {
		self.delete_missing = enabled;
		self
	}

	pub fn callbacks(mut self, callbacks: Box<dyn SyncCallbacks>) -> Self {
		self.callbacks = Some(callbacks);
		self
	}

	/// Assemble the options without running
	pub fn build(&self) -> Result<SyncOptions, SyncError> {
		match (&self.source, &self.destination) {
			(Some(source), Some(destination)) => Ok(SyncOptions {
				source: source.clone(),
				destination: destination.clone(),
				delete_missing: self.delete_missing,
			}),
			_ => Err(SyncError::InvalidConfig {
				message: "both --src and --dst options are mandatory".to_string(),
			}),
		}
	}

	pub fn run(self) -> Result<SyncReport, SyncError> {
		let options = self.build()?;
		match self.callbacks {
			Some(callbacks) => sync(&options, callbacks.as_ref()),
			None => sync(&options, &NoCallbacks),
		}
	}
}

impl Default for SyncBuilder {
	fn default() -> Self {
		Self::new()
	}
}


// vim: ts=4
