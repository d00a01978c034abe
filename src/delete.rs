//! Deletion pass: remove destination entries that have no source counterpart

use std::fs;
use std::io;
use std::path::Path;

use crate::callbacks::SyncCallbacks;
use crate::error::{DeletionError, DeletionErrors};
use crate::logging::*;
use crate::sync::SyncReport;
use crate::walk::{collect_paths, PathSet};

/// Delete every entry under `destination` whose relative path is not in `keep`
///
/// The destination walk never stops on errors: unreadable entries are reported
/// and the remaining paths are still considered.
/// Deletion failures are collected and returned together once every
/// candidate has been attempted.
pub fn delete_missing(
	destination: &Path,
	keep: &PathSet,
	callbacks: &dyn SyncCallbacks,
	report: &mut SyncReport,
) -> Result<(), DeletionErrors> {
	let found = collect_paths(destination, |e| {
		error!("{}", e);
		report.walk_errors += 1;
		callbacks.on_walk_error(e);
	});

	let mut errors = DeletionErrors::new();
	for relative in found.difference(keep) {
		let full_path = destination.join(relative);
		match remove_entry(&full_path) {
			Ok(true) => {
				info!("Deleted: {}", full_path.display());
				report.deleted += 1;
				callbacks.on_file_delete(relative);
			}
			Ok(false) => {
				// Went away with a parent directory removed earlier
				debug!("Already removed: {}", full_path.display());
			}
			Err(e) => {
				let err = DeletionError { path: full_path, source: e };
				error!("{}", err);
				callbacks.on_delete_error(&err);
				errors.push(err);
			}
		}
	}

	errors.into_result()
}

/// Remove a file or a whole directory tree
///
/// Returns `Ok(false)` when there was nothing left to remove.
pub fn remove_entry(path: &Path) -> io::Result<bool> {
	let meta = match fs::symlink_metadata(path) {
		Ok(m) => m,
		Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
		Err(e) => return Err(e),
	};

	let result = if meta.is_dir() { fs::remove_dir_all(path) } else { fs::remove_file(path) };
	match result {
		Ok(()) => Ok(true),
		Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
		Err(e) => Err(e),
	}
}


// vim: ts=4
