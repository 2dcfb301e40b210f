//! Process exit codes

/// All files processed
pub const SUCCESS: i32 = 0;

/// Bad arguments, invalid directories, or at least one file failed
pub const GENERAL_ERROR: i32 = 1;
