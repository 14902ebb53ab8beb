//! Path command implementation

use crate::cli::common::EXIT_SUCCESS;
use crate::config::{ProcessEnv, resolve_config_path};
use std::path::Path;

/// Run the path command
///
/// Prints the resolved config file path. Resolution is a read-only probe and
/// never fails, so an explicit path is echoed back whether or not it exists.
pub fn run_path(config_path: Option<&Path>) -> i32 {
    let path = resolve_config_path(config_path, &ProcessEnv);
    println!("{}", path.display());
    EXIT_SUCCESS
}
