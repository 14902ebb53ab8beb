//! Config file resolution, parsing, and persistence

pub mod resolver;
pub mod thoughts_json;

pub use resolver::{
    ConfigResolver, EnvLookup, ProcessEnv, default_config_path, load_config_file,
    resolve_config_path, save_config_file,
};
pub use thoughts_json::{ConfigFile, ThoughtsConfig};
