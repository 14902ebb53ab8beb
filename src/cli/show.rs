//! Show command implementation
//!
//! Prints the resolved config file path and the effective configuration,
//! either as a human-readable summary or as pretty-printed JSON.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::config::{ConfigFile, ConfigResolver, ThoughtsConfig};
use crate::output::{self, ColorMode};
use std::path::Path;

/// Error type specific to the show command
#[derive(Debug, thiserror::Error)]
enum ShowError {
    #[error(transparent)]
    Config(#[from] crate::error::ConfigError),

    #[error("Failed to serialize config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run the show command
///
/// Exit code 0 on success, 1 when an explicit config path could not be read
/// or parsed.
pub fn run_show(config_path: Option<&Path>, format: OutputFormat, color: ColorMode) -> i32 {
    match run_show_inner(config_path, format, color) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_show_inner(
    config_path: Option<&Path>,
    format: OutputFormat,
    color: ColorMode,
) -> Result<(), ShowError> {
    let resolver = ConfigResolver::new(config_path)?;

    match format {
        OutputFormat::Json => println!("{}", resolver.config().to_json_pretty()?),
        OutputFormat::Human => print_human(&resolver, color),
    }

    Ok(())
}

fn print_human(resolver: &ConfigResolver, color: ColorMode) {
    for line in human_lines(resolver.config_path(), resolver.config()) {
        println!("{}", line);
    }

    if !resolver.config().is_configured() {
        output::notice(
            color,
            "Thoughts is not configured. Run 'thoughts config init' to set it up.",
        );
    }
}

/// Render the human-readable summary
fn human_lines(path: &Path, config: &ConfigFile) -> Vec<String> {
    let mut lines = vec![format!("Config file:   {}", path.display())];

    if let Some(thoughts) = &config.thoughts {
        lines.push(format!("User:          {}", thoughts.user));
        lines.push(format!("Thoughts repo: {}", thoughts.thoughts_repo));
        lines.push(format!("Repos dir:     {}", thoughts.repos_dir));
        lines.push(format!("Global dir:    {}", thoughts.global_dir));
        lines.extend(mapping_lines(thoughts));
    }

    lines
}

fn mapping_lines(thoughts: &ThoughtsConfig) -> Vec<String> {
    if thoughts.repo_mappings.is_empty() {
        return vec!["Repo mappings: (none)".to_string()];
    }

    let mut mappings: Vec<_> = thoughts.repo_mappings.iter().collect();
    mappings.sort();

    let mut lines = vec!["Repo mappings:".to_string()];
    lines.extend(
        mappings
            .into_iter()
            .map(|(repo, dir)| format!("  {} -> {}", repo, dir)),
    );
    lines
}
