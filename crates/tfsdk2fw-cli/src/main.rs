//! Tfsdk2fw CLI - Command-line interface for Terraform schema migration
//!
//! This is the main entry point for the Tfsdk2fw CLI application, providing
//! commands for migrating Plugin SDK resource and data source schemas to
//! Plugin Framework Go code and inspecting how they classify.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    let cli = Cli::parse();

    let result = Config::load_with_file(cli.config.as_deref()).and_then(|config| {
        control::set_override(cli.use_color() && config.output.color);

        if let Err(e) = init_logging(&cli, &config) {
            eprintln!("Failed to initialize logging: {}", e);
        }

        run(cli, config)
    });

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = cli.output.unwrap_or(config.output.format);
    let use_color = control::SHOULD_COLORIZE.should_colorize();
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Migrate(args) => handlers::handle_migrate(args, &config, &mut output),
        Commands::Classify(args) => handlers::handle_classify(args, &config, &mut output),
        Commands::Config(args) => handlers::handle_config(args, &config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_file(&config.logging, cli.verbosity_level());
    logging_config.merge_with_env();

    // Quiet mode only logs errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
