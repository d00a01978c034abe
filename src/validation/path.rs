//! Relative path validation

use std::path::{Component, Path, PathBuf};

use super::ValidationError;

/// Check if a relative path stays inside its root (no `..`, no root or prefix)
pub fn is_path_safe(path: &Path) -> bool {
	path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Validate a relative path before it is joined onto a root
///
/// # Returns
/// `Ok(())` if valid, `Err(ValidationError)` if the path is absolute or
/// contains parent directory references
pub fn validate_relative(path: &Path) -> Result<(), ValidationError> {
	if path.is_absolute() {
		return Err(ValidationError::PathError(format!(
			"Path must be relative, got absolute path: {:?}",
			path
		)));
	}
	if !is_path_safe(path) {
		return Err(ValidationError::PathError(format!(
			"Path {:?} contains parent directory reference (..)",
			path
		)));
	}
	Ok(())
}

/// Join a validated relative path onto `root`
pub fn join_relative(root: &Path, relative: &Path) -> Result<PathBuf, ValidationError> {
	validate_relative(relative)?;
	Ok(root.join(relative))
}


// vim: ts=4
