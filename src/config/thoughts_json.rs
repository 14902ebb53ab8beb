//! Parsing and serialization for the thoughts JSON config file
//!
//! The same structure is stored both as `thoughts.json` in a repository and as
//! `~/.thoughts/config.json`. Field names on the wire are camelCase. There is no
//! schema validation beyond what deserialization itself enforces.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level structure of the config file
///
/// An empty object is a valid config and means "not yet configured"; it
/// serializes back to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoughts: Option<ThoughtsConfig>,
}

/// Settings for the thoughts notes system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtsConfig {
    /// Path of the primary notes repository
    pub thoughts_repo: String,

    /// Directory containing per-repository notes
    pub repos_dir: String,

    /// Directory for global (cross-repository) notes
    pub global_dir: String,

    /// Name identifying the current user
    pub user: String,

    /// Map from repository identifier to its directory under `repos_dir`
    #[serde(default)]
    pub repo_mappings: HashMap<String, String>,
}

impl ConfigFile {
    /// Parse a config file from JSON text
    pub fn parse(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Serialize as pretty-printed JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Whether the thoughts section is present
    pub fn is_configured(&self) -> bool {
        self.thoughts.is_some()
    }
}
