//! Initialize the thoughts configuration
//!
//! Builds a starter config from the command-line options and writes it via
//! the standard save path, refusing to clobber an existing file unless
//! `--force` is given.

use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::config::{
    ConfigFile, EnvLookup, ProcessEnv, ThoughtsConfig, default_config_path, save_config_file,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Options collected from `thoughts config init` flags
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Path of the primary notes repository
    pub thoughts_repo: String,
    /// User name; falls back to `$USER`
    pub user: Option<String>,
    /// Defaults to `<thoughts_repo>/repos`
    pub repos_dir: Option<String>,
    /// Defaults to `<thoughts_repo>/global`
    pub global_dir: Option<String>,
    /// Overwrite an existing config file
    pub force: bool,
}

/// Error type specific to the init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// Destination already holds a config file
    #[error("Config file {} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// No user name given and none found in the environment
    #[error("Could not determine a user name; pass --user")]
    MissingUser,

    /// Save failure
    #[error(transparent)]
    Config(#[from] crate::error::ConfigError),
}

/// Run the init command
pub fn run_init(config_path: Option<&Path>, options: &InitOptions) -> i32 {
    match run_init_with_env(config_path, options, &ProcessEnv) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Init with an injected environment lookup; returns the written path
pub fn run_init_with_env(
    config_path: Option<&Path>,
    options: &InitOptions,
    env: &dyn EnvLookup,
) -> Result<PathBuf, InitError> {
    let dest = match config_path {
        Some(path) => path.to_path_buf(),
        None => default_config_path(env),
    };

    if dest.try_exists().unwrap_or(false) && !options.force {
        return Err(InitError::AlreadyExists(dest));
    }

    let config = build_config(options, env)?;
    save_config_file(&config, Some(&dest), env)?;
    Ok(dest)
}

/// Assemble the starter config, filling unset fields from defaults
fn build_config(options: &InitOptions, env: &dyn EnvLookup) -> Result<ConfigFile, InitError> {
    let user = options
        .user
        .clone()
        .or_else(|| env.var("USER"))
        .filter(|user| !user.is_empty())
        .ok_or(InitError::MissingUser)?;

    let repos_dir = options
        .repos_dir
        .clone()
        .unwrap_or_else(|| join_under(&options.thoughts_repo, "repos"));
    let global_dir = options
        .global_dir
        .clone()
        .unwrap_or_else(|| join_under(&options.thoughts_repo, "global"));

    Ok(ConfigFile {
        thoughts: Some(ThoughtsConfig {
            thoughts_repo: options.thoughts_repo.clone(),
            repos_dir,
            global_dir,
            user,
            repo_mappings: HashMap::new(),
        }),
    })
}

fn join_under(repo: &str, child: &str) -> String {
    Path::new(repo).join(child).to_string_lossy().into_owned()
}
