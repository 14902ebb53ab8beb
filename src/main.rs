//! Thoughts CLI entry point

use std::process;
use thoughts::cli::args::{self, Command, ConfigCommand};
use thoughts::cli::common::EXIT_SUCCESS;
use thoughts::cli::init::InitOptions;
use thoughts::cli::{init, path, show};

fn main() {
    let cli = args::parse();
    let config_path = cli.config.as_deref();
    let color = cli.color.into();

    // Invoked without a subcommand: print help and exit cleanly
    let Some(command) = cli.command else {
        let _ = args::build_command().print_help();
        process::exit(EXIT_SUCCESS);
    };

    let exit_code = match command {
        Command::Config(config_command) => match config_command {
            ConfigCommand::Show { format } => show::run_show(config_path, format, color),
            ConfigCommand::Path => path::run_path(config_path),
            ConfigCommand::Init {
                thoughts_repo,
                user,
                repos_dir,
                global_dir,
                force,
            } => init::run_init(
                config_path,
                &InitOptions {
                    thoughts_repo,
                    user,
                    repos_dir,
                    global_dir,
                    force,
                },
            ),
        },
    };

    process::exit(exit_code);
}
