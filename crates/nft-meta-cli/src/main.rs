//! NFT metadata generator CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ColorChoice, Parser};
use nft_meta_cli::logging::{LogConfig, LogFormat, init_logging};
use nft_meta_cli::pipeline::{GenerateOptions, GenerateSummary, generate, load_collection};
use nft_meta_model::RowShape;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => exit_with_usage(&error),
    };
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(summary) => {
            if cli.summary {
                print_summary(&summary);
            }
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Help and version go through clap; any other argument error prints the
/// usage on stdout and exits with status 1.
fn exit_with_usage(error: &clap::Error) -> ! {
    match error.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => error.exit(),
        _ => {
            println!("{}", error.render());
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<GenerateSummary> {
    generate(&generate_options_from_cli(cli)?)
}

fn generate_options_from_cli(cli: &Cli) -> Result<GenerateOptions> {
    let mut options = GenerateOptions::new(&cli.archive, &cli.hidden_image, &cli.public_prefix)
        .with_output_dirs(&cli.hidden_dir, &cli.public_dir)
        .with_entry_name(&cli.entry)
        .with_token_id_policy(cli.token_id.into())
        .with_row_shape(if cli.strict_rows {
            RowShape::Strict
        } else {
            RowShape::Tolerant
        });
    if let Some(path) = &cli.collection {
        options = options.with_collection(load_collection(path)?);
    }
    Ok(options)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
