//! Callback traits for observing sync events
//!
//! The engine logs every event through `tracing` on its own. Callbacks are
//! for callers that want to react to events programmatically (counting,
//! progress output, tests). All paths passed to callbacks are relative to
//! their root.

use crate::error::{DeletionError, SyncError};
use crate::walk::WalkError;
use std::path::Path;

// Type aliases to reduce complexity
type PathFn = dyn Fn(&Path) + Send + Sync;
type SyncErrorFn = dyn Fn(&SyncError) + Send + Sync;
type WalkErrorFn = dyn Fn(&WalkError) + Send + Sync;
type DeleteErrorFn = dyn Fn(&DeletionError) + Send + Sync;

/// Combined callback handler for all events
pub trait SyncCallbacks: Send + Sync {
	/// Called when a destination directory has been ensured
	fn on_dir_create(&self, _path: &Path) {}

	/// Called when a file was copied to the destination
	fn on_file_sync(&self, _path: &Path) {}

	/// Called when a file was already up to date
	fn on_file_skipped(&self, _path: &Path) {}

	/// Called when a single file failed to copy (the run continues)
	fn on_sync_error(&self, _error: &SyncError) {}

	/// Called for destination walk errors during the deletion pass
	fn on_walk_error(&self, _error: &WalkError) {}

	/// Called when a destination entry was deleted
	fn on_file_delete(&self, _path: &Path) {}

	/// Called when a destination entry could not be deleted
	fn on_delete_error(&self, _error: &DeletionError) {}
}

/// Default callback implementation that does nothing
pub struct NoCallbacks;

impl SyncCallbacks for NoCallbacks {}

/// Builder for callbacks using function closures
pub struct CallbackBuilder {
	dir_create: Option<Box<PathFn>>,
	file_sync: Option<Box<PathFn>>,
	file_skipped: Option<Box<PathFn>>,
	sync_error: Option<Box<SyncErrorFn>>,
	walk_error: Option<Box<WalkErrorFn>>,
	file_delete: Option<Box<PathFn>>,
	delete_error: Option<Box<DeleteErrorFn>>,
}

impl CallbackBuilder {
	/// Create a new callback builder
	pub fn new() -> Self {
		CallbackBuilder {
			dir_create: None,
			file_sync: None,
			file_skipped: None,
			sync_error: None,
			walk_error: None,
			file_delete: None,
			delete_error: None,
		}
	}

	/// Set directory create callback
	pub fn on_dir_create<F>(mut self, callback: F) -> Self
	where
		F: Fn(&Path) + Send + Sync + 'static,
	{
		self.dir_create = Some(Box::new(callback));
		self
	}

	/// Set file sync callback
	pub fn on_file_sync<F>(mut self, callback: F) -> Self
	where
		F: Fn(&Path) + Send + Sync + 'static,
	{
		self.file_sync = Some(Box::new(callback));
		self
	}

	/// Set up-to-date file callback
	pub fn on_file_skipped<F>(mut self, callback: F) -> Self
	where
		F: Fn(&Path) + Send + Sync + 'static,
	{
		self.file_skipped = Some(Box::new(callback));
		self
	}

	/// Set per-file error callback
	pub fn on_sync_error<F>(mut self, callback: F) -> Self
	where
		F: Fn(&SyncError) + Send + Sync + 'static,
	{
		self.sync_error = Some(Box::new(callback));
		self
	}

	/// Set destination walk error callback
	pub fn on_walk_error<F>(mut self, callback: F) -> Self
	where
		F: Fn(&WalkError) + Send + Sync + 'static,
	{
		self.walk_error = Some(Box::new(callback));
		self
	}

	/// Set file delete callback
	pub fn on_file_delete<F>(mut self, callback: F) -> Self
	where
		F: Fn(&Path) + Send + Sync + 'static,
	{
		self.file_delete = Some(Box::new(callback));
		self
	}

	/// Set delete error callback
	pub fn on_delete_error<F>(mut self, callback: F) -> Self
	where
		F: Fn(&DeletionError) + Send + Sync + 'static,
	{
		self.delete_error = Some(Box::new(callback));
		self
	}

	/// Build the callbacks handler
	pub fn build(self) -> Box<dyn SyncCallbacks> {
		Box::new(CompositeCallbacks {
			dir_create: self.dir_create,
			file_sync: self.file_sync,
			file_skipped: self.file_skipped,
			sync_error: self.sync_error,
			walk_error: self.walk_error,
			file_delete: self.file_delete,
			delete_error: self.delete_error,
		})
	}
}

impl Default for CallbackBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Internal composite callbacks implementation
struct CompositeCallbacks {
	dir_create: Option<Box<PathFn>>,
	file_sync: Option<Box<PathFn>>,
	file_skipped: Option<Box<PathFn>>,
	sync_error: Option<Box<SyncErrorFn>>,
	walk_error: Option<Box<WalkErrorFn>>,
	file_delete: Option<Box<PathFn>>,
	delete_error: Option<Box<DeleteErrorFn>>,
}

impl SyncCallbacks for CompositeCallbacks {
	fn on_dir_create(&self, path: &Path) {
		if let Some(ref callback) = self.dir_create {
			callback(path);
		}
	}

	fn on_file_sync(&self, path: &Path) {
		if let Some(ref callback) = self.file_sync {
			callback(path);
		}
	}

	fn on_file_skipped(&self, path: &Path) {
		if let Some(ref callback) = self.file_skipped {
			callback(path);
		}
	}

	fn on_sync_error(&self, error: &SyncError) {
		if let Some(ref callback) = self.sync_error {
			callback(error);
		}
	}

	fn on_walk_error(&self, error: &WalkError) {
		if let Some(ref callback) = self.walk_error {
			callback(error);
		}
	}

	fn on_file_delete(&self, path: &Path) {
		if let Some(ref callback) = self.file_delete {
			callback(path);
		}
	}

	fn on_delete_error(&self, error: &DeletionError) {
		if let Some(ref callback) = self.delete_error {
			callback(error);
		}
	}
}


// vim: ts=4
