//! Validation of sync roots and relative paths
//!
//! - Root validation: a root must exist and be a directory before a run starts
//! - Path validation: relative keys must not escape the root they are joined onto

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub mod path;
pub mod root;

pub use path::*;
pub use root::*;

/// Validation error type
#[derive(Debug)]
pub enum ValidationError {
	/// Root path does not exist
	NotFound { path: PathBuf },

	/// Root path exists but is not a directory
	NotADirectory { path: PathBuf },

	/// Root path could not be inspected
	AccessError { path: PathBuf, source: io::Error },

	/// Relative path is absolute or escapes its root
	PathError(String),
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ValidationError::NotFound { path } => {
				write!(f, "path ({}) doesn't exist", path.display())
			}
			ValidationError::NotADirectory { path } => {
				write!(f, "provided path {} isn't a directory", path.display())
			}
			ValidationError::AccessError { path, source } => {
				write!(f, "error with provided path ({}): {}", path.display(), source)
			}
			ValidationError::PathError(msg) => write!(f, "Path validation error: {}", msg),
		}
	}
}

impl Error for ValidationError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			ValidationError::AccessError { source, .. } => Some(source),
			_ => None,
		}
	}
}


// vim: ts=4
