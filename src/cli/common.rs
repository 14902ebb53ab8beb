//! Shared definitions for CLI commands

/// Exit codes used by all subcommands
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
