/// Mirror pass tests - run real syncs over temporary trees and verify results
///
/// Tests verify:
/// 1. Every source entry ends up in the destination with the same kind
/// 2. Copied files carry the source modification time
/// 3. A second run without source changes copies nothing
/// 4. Timestamp equality alone decides whether a file is current
/// 5. Invalid roots are rejected before anything is touched
use filetime::FileTime;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use rcsync::callbacks::{CallbackBuilder, NoCallbacks};
use rcsync::error::SyncError;
use rcsync::sync::{sync, SyncBuilder, SyncOptions};
use rcsync::validation::ValidationError;
use rcsync::walk::TreeWalker;

/// Helper to create a file (and its parents) with a fixed modification time
fn create_file(dir: &Path, name: &str, content: &str, mtime: i64) {
	let path = dir.join(name);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).unwrap();
	}
	fs::write(&path, content).unwrap();
	filetime::set_file_mtime(&path, FileTime::from_unix_time(mtime, 0)).unwrap();
}

fn mtime_of(path: &Path) -> FileTime {
	FileTime::from_last_modification_time(&fs::metadata(path).unwrap())
}

fn setup_two_dirs() -> (TempDir, TempDir) {
	(TempDir::new().unwrap(), TempDir::new().unwrap())
}

// ===================================================================
// SCENARIOS
// ===================================================================

#[test]
fn test_sync_into_empty_destination() {
	let (src, dst) = setup_two_dirs();
	create_file(src.path(), "a/file.txt", "hello", 1_700_000_000);

	let report = sync(&SyncOptions::new(src.path(), dst.path()), &NoCallbacks).unwrap();

	assert!(dst.path().join("a").is_dir());
	assert_eq!(fs::read_to_string(dst.path().join("a/file.txt")).unwrap(), "hello");
	assert_eq!(mtime_of(&dst.path().join("a/file.txt")), FileTime::from_unix_time(1_700_000_000, 0));
	assert_eq!(report.dirs_synced, 1);
	assert_eq!(report.files_copied, 1);
	assert_eq!(report.bytes_copied, 5);
}

#[test]
fn test_same_mtime_different_content_is_left_alone() {
	let (src, dst) = setup_two_dirs();
	create_file(src.path(), "x.txt", "new content", 1_600_000_000);
	create_file(dst.path(), "x.txt", "old content", 1_600_000_000);

	let report = sync(&SyncOptions::new(src.path(), dst.path()), &NoCallbacks).unwrap();

	assert_eq!(fs::read_to_string(dst.path().join("x.txt")).unwrap(), "old content");
	assert_eq!(report.files_copied, 0);
	assert_eq!(report.files_skipped, 1);
}

#[test]
fn test_older_destination_is_overwritten() {
	let (src, dst) = setup_two_dirs();
	create_file(src.path(), "x.txt", "v2", 1_600_000_100);
	create_file(dst.path(), "x.txt", "version one", 1_600_000_000);

	sync(&SyncOptions::new(src.path(), dst.path()), &NoCallbacks).unwrap();

	assert_eq!(fs::read_to_string(dst.path().join("x.txt")).unwrap(), "v2");
	assert_eq!(mtime_of(&dst.path().join("x.txt")), FileTime::from_unix_time(1_600_000_100, 0));
}

#[test]
fn test_newer_destination_is_also_overwritten() {
	// Any difference counts, not just an older destination
	let (src, dst) = setup_two_dirs();
	create_file(src.path(), "x.txt", "source", 1_600_000_000);
	create_file(dst.path(), "x.txt", "edited later", 1_700_000_000);

	sync(&SyncOptions::new(src.path(), dst.path()), &NoCallbacks).unwrap();

	assert_eq!(fs::read_to_string(dst.path().join("x.txt")).unwrap(), "source");
}

// ===================================================================
// PROPERTIES
// ===================================================================

#[test]
fn test_second_run_copies_nothing() {
	let (src, dst) = setup_two_dirs();
	create_file(src.path(), "one.txt", "1", 1_500_000_000);
	create_file(src.path(), "dir/two.txt", "2", 1_500_000_001);
	create_file(src.path(), "dir/sub/three.txt", "3", 1_500_000_002);

	let options = SyncOptions::new(src.path(), dst.path());
	let first = sync(&options, &NoCallbacks).unwrap();
	let second = sync(&options, &NoCallbacks).unwrap();

	assert_eq!(first.files_copied, 3);
	assert_eq!(second.files_copied, 0);
	assert_eq!(second.files_skipped, 3);
}

#[test]
fn test_mirror_completeness_and_timestamps() {
	let (src, dst) = setup_two_dirs();
	create_file(src.path(), "top.txt", "t", 1_400_000_000);
	create_file(src.path(), "a/b/c/deep.bin", "deep", 1_400_000_500);
	fs::create_dir_all(src.path().join("empty/nested")).unwrap();

	sync(&SyncOptions::new(src.path(), dst.path()), &NoCallbacks).unwrap();

	for entry in TreeWalker::new(src.path()) {
		let entry = entry.unwrap();
		let target = dst.path().join(&entry.relative);
		if entry.is_dir() {
			assert!(target.is_dir(), "{} should be a directory", target.display());
		} else {
			assert!(target.is_file(), "{} should be a file", target.display());
			assert_eq!(mtime_of(&target), mtime_of(&entry.path));
			assert_eq!(fs::read(&target).unwrap(), fs::read(&entry.path).unwrap());
		}
	}
}

#[test]
fn test_sub_second_mtime_is_preserved() {
	let (src, dst) = setup_two_dirs();
	let path = src.path().join("precise.txt");
	fs::write(&path, "p").unwrap();
	let precise = FileTime::from_unix_time(1_650_000_000, 987_654_321);
	filetime::set_file_mtime(&path, precise).unwrap();
	let stored = mtime_of(&path);

	sync(&SyncOptions::new(src.path(), dst.path()), &NoCallbacks).unwrap();

	assert_eq!(mtime_of(&dst.path().join("precise.txt")), stored);
}

#[test]
fn test_without_deletion_extra_entries_stay() {
	let (src, dst) = setup_two_dirs();
	create_file(src.path(), "kept.txt", "k", 1_500_000_000);
	create_file(dst.path(), "extra.txt", "e", 1_500_000_000);

	let report = sync(&SyncOptions::new(src.path(), dst.path()), &NoCallbacks).unwrap();

	assert!(dst.path().join("extra.txt").exists());
	assert_eq!(report.deleted, 0);
}

// ===================================================================
// VALIDATION GATE
// ===================================================================

#[test]
fn test_missing_source_is_rejected() {
	let (src, dst) = setup_two_dirs();
	let result = sync(&SyncOptions::new(src.path().join("nope"), dst.path()), &NoCallbacks);

	assert!(matches!(result, Err(SyncError::Validation(ValidationError::NotFound { .. }))));
	assert_eq!(fs::read_dir(dst.path()).unwrap().count(), 0);
}

#[test]
fn test_file_as_destination_is_rejected() {
	let (src, dst) = setup_two_dirs();
	create_file(src.path(), "a.txt", "a", 1_500_000_000);
	let not_a_dir = dst.path().join("plain");
	fs::write(&not_a_dir, "x").unwrap();

	let result = sync(&SyncOptions::new(src.path(), &not_a_dir), &NoCallbacks);

	assert!(matches!(result, Err(SyncError::Validation(ValidationError::NotADirectory { .. }))));
	assert_eq!(fs::read_to_string(&not_a_dir).unwrap(), "x");
}

#[test]
fn test_missing_destination_is_not_created() {
	let (src, dst) = setup_two_dirs();
	create_file(src.path(), "a.txt", "a", 1_500_000_000);
	let missing = dst.path().join("later");

	let result = SyncBuilder::new().source(src.path()).destination(&missing).run();

	assert!(result.is_err());
	assert!(!missing.exists());
}

// ===================================================================
// PER-FILE FAILURES
// ===================================================================

#[test]
fn test_file_over_directory_conflict_is_logged_and_skipped() {
	let (src, dst) = setup_two_dirs();
	create_file(src.path(), "clash", "file in source", 1_500_000_000);
	create_file(src.path(), "zz-after.txt", "still synced", 1_500_000_000);
	fs::create_dir(dst.path().join("clash")).unwrap();

	let failures = Arc::new(Mutex::new(Vec::new()));
	let failures_clone = Arc::clone(&failures);
	let callbacks = CallbackBuilder::new()
		.on_sync_error(move |e| failures_clone.lock().unwrap().push(e.to_string()))
		.build();

	let report = SyncBuilder::new()
		.source(src.path())
		.destination(dst.path())
		.callbacks(callbacks)
		.run()
		.expect("per-file failures must not fail the run");

	assert_eq!(report.files_failed, 1);
	assert_eq!(failures.lock().unwrap().len(), 1);
	assert!(dst.path().join("clash").is_dir());
	assert_eq!(fs::read_to_string(dst.path().join("zz-after.txt")).unwrap(), "still synced");
}

#[test]
fn test_directory_over_file_conflict_aborts() {
	let (src, dst) = setup_two_dirs();
	create_file(src.path(), "clash/inner.txt", "i", 1_500_000_000);
	fs::write(dst.path().join("clash"), "a file").unwrap();

	let result = sync(&SyncOptions::new(src.path(), dst.path()), &NoCallbacks);

	assert!(matches!(result, Err(SyncError::WalkFatal { .. })));
}

#[test]
fn test_unreadable_source_file_does_not_stop_run() {
	use std::os::unix::fs::PermissionsExt;

	let (src, dst) = setup_two_dirs();
	create_file(src.path(), "a-locked.txt", "secret", 1_500_000_000);
	create_file(src.path(), "b-open.txt", "open", 1_500_000_000);
	let locked = src.path().join("a-locked.txt");
	fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

	if fs::File::open(&locked).is_ok() {
		// Running as root, permission bits are not enforced
		return;
	}

	let synced = Arc::new(AtomicUsize::new(0));
	let synced_clone = Arc::clone(&synced);
	let callbacks = CallbackBuilder::new()
		.on_file_sync(move |_| {
			synced_clone.fetch_add(1, Ordering::SeqCst);
		})
		.build();

	let report = sync(&SyncOptions::new(src.path(), dst.path()), callbacks.as_ref()).unwrap();

	assert_eq!(report.files_failed, 1);
	assert_eq!(synced.load(Ordering::SeqCst), 1);
	assert!(dst.path().join("b-open.txt").exists());
}

// vim: ts=4
