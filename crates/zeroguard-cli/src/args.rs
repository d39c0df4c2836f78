use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zeroguard_core::{
    about::{help_footer, DESCRIPTION},
    config::{DEFAULT_API_ENDPOINT, MAX_CONTENT_WIDTH},
};

use crate::cli::{parse_api_endpoint, DomainArgs, LogFormatArg, LogLevelArg, OutputFormatArg};

/// ZeroGuard threat intelligence platform client
///
/// Root options apply to every command and must be given before the command
/// name.
#[derive(Parser)]
#[command(
    name = "zg",
    about = DESCRIPTION,
    disable_version_flag = true,
    max_term_width = MAX_CONTENT_WIDTH,
    after_help = help_footer()
)]
pub struct Args {
    /// Path to a configuration file. Defaults to
    /// $XDG_CONFIG_HOME/zeroguard/config.toml when it exists
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Data output format
    #[arg(
        short,
        long,
        value_enum,
        value_name = "FORMAT",
        default_value_t = OutputFormatArg::Verbose
    )]
    pub format: OutputFormatArg,

    /// Path to an identity file. Defaults to
    /// $XDG_CONFIG_HOME/zeroguard/identity when it exists
    #[arg(short, long, value_name = "PATH")]
    pub identity: Option<PathBuf>,

    /// Enable application logging
    #[arg(short = 'L', long)]
    pub log: bool,

    /// Logging format to use if logging is enabled
    #[arg(
        short = 'F',
        long,
        value_enum,
        value_name = "FORMAT",
        default_value_t = LogFormatArg::Native
    )]
    pub log_format: LogFormatArg,

    /// Logging level to set if logging is enabled
    #[arg(
        short = 'l',
        long,
        value_enum,
        value_name = "LEVEL",
        default_value_t = LogLevelArg::Info
    )]
    pub log_level: LogLevelArg,

    /// Output log messages to STDOUT if logging is enabled
    #[arg(short = 'S', long)]
    pub log_stdout: bool,

    /// Ignore user configuration file if it exists
    #[arg(short = 'C', long)]
    pub no_config: bool,

    /// Suppress application informational messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Show application version and exit
    #[arg(short = 'v', short_alias = 'V', long)]
    pub version: bool,

    /// Network location of the ZeroGuard API
    #[arg(
        long,
        env = "ZG_API_ENDPOINT",
        value_name = "NETLOC",
        default_value = DEFAULT_API_ENDPOINT,
        value_parser = parse_api_endpoint
    )]
    pub api_endpoint: String,

    /// Token used to authenticate against the ZeroGuard API
    #[arg(long, env = "ZG_API_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Disable colored output and use plain text (also set by a non-empty NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Keep colors even when output is not a terminal
    #[arg(long)]
    pub force_color: bool,

    /// Write messages to STDOUT instead of STDERR
    #[arg(long)]
    pub stdout: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Get intelligence about matching Internet domain names
    Domain(DomainArgs),
    /// Print ZeroGuard platform availability status
    Status,
}
