//! Exit code constants for the promode CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or invalid input files)
//! - 2: Validation failure (strict mode and the validator reported warnings)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the assembled prompt produced warnings under `--strict`.
pub const VALIDATION_FAILURE: i32 = 2;
