mod args;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use args::{CliArgs, LogLevel};
use clap::Parser;
use config::CliConfig;
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_tracing(&args, &config) {
        eprintln!("warning: failed to install tracing subscriber: {err:#}");
    }
    debug!(variant = %config.variant, scrypt = %config.scrypt, "configuration loaded");

    let password = args.password.as_deref();
    match commands::execute(&args.command, &config, || commands::resolve_passphrase(password)) {
        Ok(output) => {
            println!("{}", output.as_str());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("command failed: {err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &CliArgs) -> Result<CliConfig> {
    match &args.config {
        Some(path) => CliConfig::load(path),
        None => Ok(CliConfig::default()),
    }
}

fn init_tracing(args: &CliArgs, config: &CliConfig) -> Result<()> {
    let env_filter = match args.verbose {
        Some(level) => level_filter(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| level_filter(config.logger.level)),
    };

    let builder = fmt().with_env_filter(env_filter).with_writer(std::io::stderr);
    let installed = if config.logger.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| anyhow::anyhow!(err))
}

fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::default().add_directive(tracing::Level::from(level).into())
}
