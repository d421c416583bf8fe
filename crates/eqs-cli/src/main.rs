//! Equipment status CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use eqs_cli::config::load_settings;
use eqs_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_check, run_config, run_export, run_list, run_reasons, run_replace, run_update, sign_in,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Runs the selected command. `Ok(false)` means a checked dataset was rejected.
fn run(cli: &Cli) -> Result<bool> {
    let mut settings = load_settings(cli.config.as_deref())?;
    settings.apply_endpoint_override(cli.endpoint.as_deref());

    match &cli.command {
        Command::Check(args) => run_check(args, &settings),
        Command::Replace(args) => {
            let role = sign_in(&cli.sign_in, &settings)?;
            run_replace(args, &settings, role).map(|_| true)
        }
        Command::Update(args) => {
            let role = sign_in(&cli.sign_in, &settings)?;
            run_update(args, &settings, role).map(|()| true)
        }
        Command::List(args) => {
            let role = sign_in(&cli.sign_in, &settings)?;
            run_list(args, &settings, role).map(|()| true)
        }
        Command::Reasons => {
            run_reasons();
            Ok(true)
        }
        Command::Export(args) => {
            let role = sign_in(&cli.sign_in, &settings)?;
            run_export(args, &settings, role).map(|_| true)
        }
        Command::Config(args) => run_config(args, cli.config.as_deref(), &settings).map(|()| true),
    }
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
