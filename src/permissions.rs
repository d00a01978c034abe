//! Permission profile for entries created in the destination tree

/// Base permission bits for regular files
pub const BASE_FILE_MODE: u32 = 0o666;

/// Base permission bits for directories
pub const BASE_DIR_MODE: u32 = 0o777;

/// Fixed umask applied to both base profiles
pub const UMASK: u32 = 0o022;

/// Mode for created files (rw-r--r--)
pub const FILE_MODE: u32 = BASE_FILE_MODE & !UMASK;

/// Mode for created directories (rwxr-xr-x)
pub const DIR_MODE: u32 = BASE_DIR_MODE & !UMASK;


// vim: ts=4
