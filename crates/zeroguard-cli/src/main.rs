//! ZeroGuard CLI Application
//!
//! Command-line client for the ZeroGuard threat intelligence platform.

mod args;
mod cli;
mod commands;
mod logging;

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::{CommandFactory, Parser};
use commands::Cli;
use log::{debug, info};
use zeroguard_core::{about, DomainQuery, Formatter, LogSettings, Settings, Stream};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        writeln!(io::stdout().lock(), "{}", about::version_line())
            .context("Failed to print version")?;
        return Ok(());
    }

    let settings = resolve_settings(&args);
    logging::init(&settings.log).context("Failed to initialize logging")?;
    debug!("resolved settings: {settings:?}");

    let Some(command) = args.command else {
        Args::command()
            .print_help()
            .context("Failed to print help")?;
        return Ok(());
    };

    let fmt = Formatter::builder()
        .stream(settings.stream)
        .colored(settings.colored)
        .force_colored(settings.force_colored)
        .min_severity(settings.min_severity())
        .build();

    info!("{} {} started", about::TITLE, about::VERSION);

    let mut cli = Cli::new(fmt, settings);
    match command {
        Commands::Domain(domain) => cli.handle_domain(&DomainQuery::from(domain)),
        Commands::Status => cli.handle_status(),
    }
}

fn resolve_settings(args: &Args) -> Settings {
    Settings {
        format: args.format.into(),
        log: LogSettings {
            enabled: args.log,
            format: args.log_format.into(),
            level: args.log_level.into(),
            stdout: args.log_stdout,
        },
        config_path: Settings::resolve_config_path(args.config.clone(), args.no_config),
        identity_path: Settings::resolve_identity_path(args.identity.clone()),
        api_endpoint: args.api_endpoint.clone(),
        api_token: args.api_token.clone(),
        quiet: args.quiet,
        colored: !no_color_requested(args.no_color, env::var_os("NO_COLOR")) || args.force_color,
        force_colored: args.force_color,
        stream: if args.stdout {
            Stream::Stdout
        } else {
            Stream::Stderr
        },
    }
}

/// `--no-color`, or a `NO_COLOR` variable holding any non-empty value.
fn no_color_requested(flag: bool, env_value: Option<OsString>) -> bool {
    flag || env_value.is_some_and(|value| !value.is_empty())
}
