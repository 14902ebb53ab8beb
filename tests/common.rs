//! Test utilities for thoughts integration tests

use std::collections::HashMap;
use thoughts::EnvLookup;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// [`EnvLookup`] backed by a fixed map, so tests never touch the process
/// environment
pub struct MapEnv(HashMap<String, String>);

impl MapEnv {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        MapEnv(
            vars.iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    pub fn empty() -> Self {
        MapEnv(HashMap::new())
    }
}

impl EnvLookup for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}
