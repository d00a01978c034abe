//! Depth-first tree walker
//!
//! [`TreeWalker`] lazily enumerates every descendant of a root, yielding paths
//! relative to that root. Entries of one directory are visited in file name
//! order and a directory is always yielded before its children, so the walk
//! is deterministic for a given tree.
//!
//! Errors are per entry: an unreadable directory or entry produces a single
//! [`WalkError`] and the walk carries on with its siblings. Whether such an
//! error stops the caller is the caller's decision.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Ordered set of relative paths
pub type PathSet = BTreeSet<PathBuf>;

/// Kind of a walked entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
	Dir,
	/// Anything that is not a directory, symlinks included
	File,
}

/// One descendant of the walked root
#[derive(Debug, Clone)]
pub struct WalkEntry {
	/// Path relative to the root
	pub relative: PathBuf,
	/// Full path (root joined with `relative`)
	pub path: PathBuf,
	pub kind: EntryKind,
	/// Metadata of the entry itself (symlinks are not followed)
	pub metadata: fs::Metadata,
}

impl WalkEntry {
	pub fn is_dir(&self) -> bool {
		self.kind == EntryKind::Dir
	}
}

/// Failure to enumerate or inspect one entry
#[derive(Debug)]
pub struct WalkError {
	pub path: PathBuf,
	pub source: io::Error,
}

impl fmt::Display for WalkError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Error walking path {}: {}", self.path.display(), self.source)
	}
}

impl Error for WalkError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		Some(&self.source)
	}
}

impl From<walkdir::Error> for WalkError {
	fn from(e: walkdir::Error) -> Self {
		let path = e.path().map(Path::to_path_buf).unwrap_or_default();
		let message = e.to_string();
		// Only loop errors carry no io::Error
		let source = e.into_io_error().unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
		WalkError { path, source }
	}
}

/// Lazy depth-first walker over the descendants of a root
pub struct TreeWalker {
	root: PathBuf,
	inner: walkdir::IntoIter,
}

impl TreeWalker {
	/// Start a fresh walk of `root`; the root itself is never yielded
	pub fn new(root: impl Into<PathBuf>) -> Self {
		let root = root.into();
		let inner = WalkDir::new(&root)
			.follow_links(false)
			.min_depth(1)
			.sort_by_file_name()
			.into_iter();
		TreeWalker { root, inner }
	}

	fn visit(&self, dir_entry: walkdir::DirEntry) -> Result<WalkEntry, WalkError> {
		let metadata = dir_entry.metadata()?;
		let path = dir_entry.into_path();

		let stripped = path.strip_prefix(&self.root).map(Path::to_path_buf);
		let relative = match stripped {
			Ok(r) => r,
			Err(_) => {
				return Err(WalkError {
					source: io::Error::new(
						io::ErrorKind::InvalidInput,
						format!("{} is not under {}", path.display(), self.root.display()),
					),
					path,
				});
			}
		};

		let kind = if metadata.is_dir() { EntryKind::Dir } else { EntryKind::File };
		Ok(WalkEntry { relative, path, kind, metadata })
	}
}

impl Iterator for TreeWalker {
	type Item = Result<WalkEntry, WalkError>;

	fn next(&mut self) -> Option<Self::Item> {
		match self.inner.next()? {
			Ok(dir_entry) => Some(self.visit(dir_entry)),
			Err(e) => Some(Err(WalkError::from(e))),
		}
	}
}

/// Collect every relative path under `root`, reporting errors instead of stopping
pub fn collect_paths<F>(root: &Path, mut on_error: F) -> PathSet
where
	F: FnMut(&WalkError),
{
	let mut paths = PathSet::new();
	for result in TreeWalker::new(root) {
		match result {
			Ok(entry) => {
				paths.insert(entry.relative);
			}
			Err(e) => on_error(&e),
		}
	}
	paths
}


// vim: ts=4
