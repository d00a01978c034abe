//! # rcsync - One-way directory mirroring
//!
//! rcsync makes a destination directory tree match a source tree. Files are
//! copied when their modification time differs from the destination copy;
//! directories are created as needed. Optionally, destination entries that
//! no longer exist in the source are deleted.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rcsync::callbacks::NoCallbacks;
//! use rcsync::sync::{sync, SyncOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut options = SyncOptions::new("./src", "./dst");
//!     options.delete_missing = true;
//!     let report = sync(&options, &NoCallbacks)?;
//!     println!("Synced {} files", report.files_copied);
//!     Ok(())
//! }
//! ```

pub mod callbacks;
pub mod config;
pub mod delete;
pub mod error;
pub mod logging;
pub mod mirror;
pub mod permissions;
pub mod sync;
pub mod validation;
pub mod walk;

// Re-export commonly used types and functions
pub use config::Config;
pub use error::{DeletionError, DeletionErrors, SyncError};
pub use sync::{sync, SyncBuilder, SyncOptions, SyncReport};
pub use validation::ValidationError;
pub use walk::{EntryKind, PathSet, TreeWalker, WalkEntry, WalkError};

// vim: ts=4
