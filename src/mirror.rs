//! Mirror pass: make the destination hold every source directory and an
//! up-to-date copy of every source file.
//!
//! A file is up to date when the destination entry exists, is not a
//! directory and carries exactly the source modification time. Contents are
//! never compared. After a copy the destination gets the source mtime, which
//! is what makes a second run a no-op.

use filetime::FileTime;
use std::fs;
use std::io;
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};
use std::path::Path;

use crate::callbacks::SyncCallbacks;
use crate::error::SyncError;
use crate::logging::*;
use crate::permissions::{DIR_MODE, FILE_MODE};
use crate::sync::SyncReport;
use crate::validation::join_relative;
use crate::walk::{EntryKind, PathSet, TreeWalker, WalkEntry};

/// Walk `source` and mirror it into `destination`
///
/// Walk errors and directory creation failures abort the pass. A file that
/// fails to copy is logged, reported to `callbacks` and skipped.
///
/// When `keep` is given, every visited relative path is recorded in it.
pub fn mirror_tree(
	source: &Path,
	destination: &Path,
	mut keep: Option<&mut PathSet>,
	callbacks: &dyn SyncCallbacks,
	report: &mut SyncReport,
) -> Result<(), SyncError> {
	for result in TreeWalker::new(source) {
		let entry = result?;

		if let Some(keep) = keep.as_deref_mut() {
			keep.insert(entry.relative.clone());
		}

		let target = join_relative(destination, &entry.relative)?;
		match entry.kind {
			EntryKind::Dir => {
				create_dir(&target)
					.map_err(|e| SyncError::WalkFatal { path: target.clone(), source: e })?;
				report.dirs_synced += 1;
				callbacks.on_dir_create(&entry.relative);
			}
			EntryKind::File => sync_file(&entry, &target, callbacks, report)?,
		}
	}
	Ok(())
}

fn sync_file(
	entry: &WalkEntry,
	target: &Path,
	callbacks: &dyn SyncCallbacks,
	report: &mut SyncReport,
) -> Result<(), SyncError> {
	let up_to_date = is_up_to_date(&entry.metadata, target)
		.map_err(|e| SyncError::WalkFatal { path: target.to_path_buf(), source: e })?;
	if up_to_date {
		debug!("Up to date: {}", entry.path.display());
		report.files_skipped += 1;
		callbacks.on_file_skipped(&entry.relative);
		return Ok(());
	}

	match copy_file(&entry.path, target, &entry.metadata) {
		Ok(bytes) => {
			info!("Synced: {}", entry.path.display());
			report.files_copied += 1;
			report.bytes_copied += bytes;
			callbacks.on_file_sync(&entry.relative);
		}
		Err(e) => {
			error!("Failed to Sync: {} ({})", entry.path.display(), e);
			report.files_failed += 1;
			callbacks.on_sync_error(&SyncError::FileSync { path: entry.path.clone(), source: e });
		}
	}
	Ok(())
}

/// Create `target` and any missing parents; an existing directory is fine
pub fn create_dir(target: &Path) -> io::Result<()> {
	fs::DirBuilder::new().recursive(true).mode(DIR_MODE).create(target)
}

/// Whether `target` already holds a current copy of a file with `source` metadata
///
/// A missing target is simply out of date; any other stat failure is returned.
pub fn is_up_to_date(source: &fs::Metadata, target: &Path) -> io::Result<bool> {
	match fs::metadata(target) {
		Ok(dst) => Ok(!dst.is_dir()
			&& FileTime::from_last_modification_time(&dst)
				== FileTime::from_last_modification_time(source)),
		Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
		Err(e) => Err(e),
	}
}

/// Copy `src` over `dst` and give `dst` the source modification time
///
/// Both handles are closed before the timestamp is applied, whether or not
/// the copy succeeded. Returns the number of bytes copied.
pub fn copy_file(src: &Path, dst: &Path, meta: &fs::Metadata) -> io::Result<u64> {
	let bytes = {
		let mut input = fs::File::open(src)?;
		let mut output = fs::OpenOptions::new()
			.create(true)
			.write(true)
			.truncate(true)
			.mode(FILE_MODE)
			.open(dst)?;
		io::copy(&mut input, &mut output)?
	};

	let mtime = FileTime::from_last_modification_time(meta);
	filetime::set_file_times(dst, mtime, mtime)?;
	Ok(bytes)
}


// vim: ts=4
