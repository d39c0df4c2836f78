//! Application defaults and resolved settings.
//!
//! The CLI resolves its root options into a [`Settings`] value. User files
//! follow the XDG Base Directory specification under the `zeroguard` prefix:
//! `$XDG_CONFIG_HOME/zeroguard/config.toml` and
//! `$XDG_CONFIG_HOME/zeroguard/identity`.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{severity::Severity, terminal::Stream};

/// Maximum width of help output.
pub const MAX_CONTENT_WIDTH: usize = 120;

/// Network location of the ZeroGuard API used when none is given.
pub const DEFAULT_API_ENDPOINT: &str = "api.zeroguard.com";

/// Prefix of the user directories.
pub const XDG_PREFIX: &str = "zeroguard";

/// Name of the user configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the user identity file.
pub const IDENTITY_FILE_NAME: &str = "identity";

/// Data output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
    Tree,
    #[default]
    Verbose,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Tree => write!(f, "tree"),
            OutputFormat::Verbose => write!(f, "verbose"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Format of application log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Native,
    Jsonl,
    Syslog,
}

/// Application log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Critical,
}

/// Application logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogSettings {
    pub enabled: bool,
    pub format: LogFormat,
    pub level: LogLevel,
    pub stdout: bool,
}

/// Settings resolved from the root command options.
///
/// The API token is redacted from both `Debug` and serialized output.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub format: OutputFormat,
    pub log: LogSettings,
    /// User configuration file, `None` when absent or ignored
    pub config_path: Option<PathBuf>,
    pub identity_path: Option<PathBuf>,
    pub api_endpoint: String,
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    pub quiet: bool,
    pub colored: bool,
    pub force_colored: bool,
    pub stream: Stream,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log: LogSettings::default(),
            config_path: None,
            identity_path: None,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            api_token: None,
            quiet: false,
            colored: true,
            force_colored: false,
            stream: Stream::default(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("format", &self.format)
            .field("log", &self.log)
            .field("config_path", &self.config_path)
            .field("identity_path", &self.identity_path)
            .field("api_endpoint", &self.api_endpoint)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("quiet", &self.quiet)
            .field("colored", &self.colored)
            .field("force_colored", &self.force_colored)
            .field("stream", &self.stream)
            .finish()
    }
}

impl Settings {
    /// Minimum severity of formatter messages. Quiet mode keeps warnings and
    /// errors only.
    pub fn min_severity(&self) -> Severity {
        if self.quiet {
            Severity::Warn
        } else {
            Severity::Info
        }
    }

    /// Resolves the configuration file path.
    ///
    /// An explicit path wins. Otherwise the user file is used if it exists.
    /// `ignore_user_config` disables both.
    pub fn resolve_config_path(
        explicit: Option<PathBuf>,
        ignore_user_config: bool,
    ) -> Option<PathBuf> {
        if ignore_user_config {
            return None;
        }
        explicit.or_else(|| find_user_file(CONFIG_FILE_NAME))
    }

    /// Resolves the identity file path: the explicit path, or the user file
    /// if it exists.
    pub fn resolve_identity_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| find_user_file(IDENTITY_FILE_NAME))
    }
}

fn find_user_file(name: &str) -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix(XDG_PREFIX).find_config_file(name)
}
