//! Sync root validation

use std::fs;
use std::io;
use std::path::Path;

use super::ValidationError;

/// Confirm that `path` exists and is a directory
///
/// Symlinks are followed, so a link pointing at a directory is a valid root.
pub fn validate_root(path: &Path) -> Result<(), ValidationError> {
	let meta = match fs::metadata(path) {
		Ok(m) => m,
		Err(e) if e.kind() == io::ErrorKind::NotFound => {
			return Err(ValidationError::NotFound { path: path.to_path_buf() });
		}
		Err(e) => {
			return Err(ValidationError::AccessError { path: path.to_path_buf(), source: e });
		}
	};

	if !meta.is_dir() {
		return Err(ValidationError::NotADirectory { path: path.to_path_buf() });
	}
	Ok(())
}


// vim: ts=4
