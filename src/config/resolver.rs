//! Config path resolution, loading, and saving
//!
//! With no explicit path, two candidate locations are checked in order:
//! `thoughts.json` in the current working directory, then
//! `~/.thoughts/config.json`. An explicit path bypasses the search entirely.
//!
//! Error handling is asymmetric: an explicit path is trusted, so read and
//! parse failures propagate to the caller. Candidate paths are not trusted;
//! a broken candidate produces a warning and resolution falls through to the
//! next one, degrading to an empty config when nothing loads.

use crate::config::thoughts_json::ConfigFile;
use crate::error::ConfigError;
use crate::output::{self, ColorMode};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-repository candidate checked in the working directory
pub const CWD_CONFIG_NAME: &str = "thoughts.json";

/// Environment lookup used when composing default paths
///
/// Resolution never reads the process environment directly; tests inject a
/// fixed map instead of mutating real variables.
pub trait EnvLookup {
    /// Value of `key`, or `None` when unset
    fn var(&self, key: &str) -> Option<String>;
}

/// [`EnvLookup`] backed by the real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// The fixed home-directory-based config location
///
/// `HOME` unset degrades to the empty string, yielding the relative path
/// `.thoughts/config.json`.
pub fn default_config_path(env: &dyn EnvLookup) -> PathBuf {
    let home = env.var("HOME").unwrap_or_default();
    PathBuf::from(home).join(".thoughts").join("config.json")
}

fn candidate_paths(env: &dyn EnvLookup) -> [PathBuf; 2] {
    [PathBuf::from(CWD_CONFIG_NAME), default_config_path(env)]
}

/// An existence probe that never errors; an unreadable path counts as absent
fn probe_exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

/// Resolve the effective config file path
///
/// An explicit path is returned unconditionally, whether or not it exists.
/// Otherwise the first existing candidate wins; when neither exists the
/// default path is returned as the designated location for a future write.
pub fn resolve_config_path(explicit: Option<&Path>, env: &dyn EnvLookup) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    for candidate in candidate_paths(env) {
        if probe_exists(&candidate) {
            return candidate;
        }
    }

    default_config_path(env)
}

/// Load the config file
///
/// With an explicit path, read and parse failures propagate. With no explicit
/// path the call cannot fail: each existing candidate is tried in order, a
/// broken one is reported as a warning and skipped, and the empty config is
/// returned when nothing loads.
pub fn load_config_file(
    explicit: Option<&Path>,
    env: &dyn EnvLookup,
) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    for candidate in candidate_paths(env) {
        if !probe_exists(&candidate) {
            continue;
        }
        match read_config(&candidate) {
            Ok(config) => return Ok(config),
            Err(err) => output::warn(ColorMode::Auto, &err.to_string()),
        }
    }

    Ok(ConfigFile::default())
}

fn read_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ConfigFile::parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the config as pretty-printed JSON
///
/// The destination is the explicit path when given, else the default path;
/// saving never consults the working-directory candidate. Missing parent
/// directories are created; an existing file is overwritten without backup.
/// There is no atomicity guarantee: a crash mid-write can leave a truncated
/// file.
pub fn save_config_file(
    config: &ConfigFile,
    explicit: Option<&Path>,
    env: &dyn EnvLookup,
) -> Result<(), ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => default_config_path(env),
    };

    output::notice(
        ColorMode::Auto,
        &format!("Writing config to {}", path.display()),
    );

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
    }

    let json = config.to_json_pretty().map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, json).map_err(|source| ConfigError::Write {
        path: path.clone(),
        source,
    })?;

    output::success(ColorMode::Auto, "Config saved successfully");
    Ok(())
}

/// Loads the config once at construction and remembers where it came from
///
/// Both pieces of state are computed independently and never mutated: the
/// resolved path is the first *existing* candidate while the loaded config
/// comes from the first *parseable* one, so a broken `thoughts.json` still
/// claims the path even though its contents were skipped.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    config: ConfigFile,
    config_path: PathBuf,
}

impl ConfigResolver {
    /// Resolve against the real process environment
    ///
    /// # Errors
    ///
    /// Fails only when an explicit path was given and could not be read or
    /// parsed.
    pub fn new(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::with_env(explicit, &ProcessEnv)
    }

    /// Resolve with an injected environment lookup
    pub fn with_env(explicit: Option<&Path>, env: &dyn EnvLookup) -> Result<Self, ConfigError> {
        Ok(Self {
            config: load_config_file(explicit, env)?,
            config_path: resolve_config_path(explicit, env),
        })
    }

    /// The loaded config; empty when nothing was found
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Where configuration is read from or would be written to
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Consume the resolver, keeping only the config
    pub fn into_config(self) -> ConfigFile {
        self.config
    }
}
