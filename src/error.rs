//! Error types for rcsync operations

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::validation::ValidationError;
use crate::walk::WalkError;

/// Main error type for sync operations
#[derive(Debug)]
pub enum SyncError {
	/// A sync root is missing, not a directory or inaccessible
	Validation(ValidationError),

	/// Enumerating or mirroring the source tree failed; aborts the run
	WalkFatal { path: PathBuf, source: io::Error },

	/// A single file failed to copy or to receive its timestamp
	FileSync { path: PathBuf, source: io::Error },

	/// One or more destination entries could not be deleted
	Deletion(DeletionErrors),

	/// Invalid configuration
	InvalidConfig { message: String },
}

impl fmt::Display for SyncError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SyncError::Validation(e) => write!(f, "{}", e),
			SyncError::WalkFatal { path, source } => {
				write!(f, "Error walking {}: {}", path.display(), source)
			}
			SyncError::FileSync { path, source } => {
				write!(f, "Failed to sync {}: {}", path.display(), source)
			}
			SyncError::Deletion(e) => write!(f, "{}", e),
			SyncError::InvalidConfig { message } => {
				write!(f, "Invalid configuration: {}", message)
			}
		}
	}
}

impl Error for SyncError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			SyncError::Validation(e) => Some(e),
			SyncError::WalkFatal { source, .. } => Some(source),
			SyncError::FileSync { source, .. } => Some(source),
			SyncError::Deletion(e) => Some(e),
			SyncError::InvalidConfig { .. } => None,
		}
	}
}

impl From<ValidationError> for SyncError {
	fn from(e: ValidationError) -> Self {
		SyncError::Validation(e)
	}
}

impl From<WalkError> for SyncError {
	fn from(e: WalkError) -> Self {
		SyncError::WalkFatal { path: e.path, source: e.source }
	}
}

impl From<DeletionErrors> for SyncError {
	fn from(e: DeletionErrors) -> Self {
		SyncError::Deletion(e)
	}
}

/// A destination entry that could not be removed
#[derive(Debug)]
pub struct DeletionError {
	pub path: PathBuf,
	pub source: io::Error,
}

impl fmt::Display for DeletionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "failed to delete {}: {}", self.path.display(), self.source)
	}
}

impl Error for DeletionError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		Some(&self.source)
	}
}

/// Every deletion failure of one deletion pass
#[derive(Debug, Default)]
pub struct DeletionErrors {
	errors: Vec<DeletionError>,
}

impl DeletionErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, error: DeletionError) {
		self.errors.push(error);
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &DeletionError> {
		self.errors.iter()
	}

	/// `Ok(())` when nothing failed, otherwise the whole batch
	pub fn into_result(self) -> Result<(), DeletionErrors> {
		if self.errors.is_empty() {
			Ok(())
		} else {
			Err(self)
		}
	}
}

impl fmt::Display for DeletionErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, e) in self.errors.iter().enumerate() {
			if i > 0 {
				writeln!(f)?;
			}
			write!(f, "{}", e)?;
		}
		Ok(())
	}
}

impl Error for DeletionErrors {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		self.errors.first().map(|e| e as &(dyn Error + 'static))
	}
}


// vim: ts=4
