//! Command-line argument wrappers.
//!
//! Core types stay free of clap derives. Each wrapper here adds the parsing
//! concerns (flags, help text, possible values) and converts into the core
//! type with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Command handlers
//! ```

use clap::{Args, ValueEnum};
use zeroguard_core::{validate_netloc, DomainQuery, LogFormat, LogLevel, OutputFormat};

/// Clap value parser for `--api-endpoint`.
pub fn parse_api_endpoint(value: &str) -> Result<String, String> {
    validate_netloc(value)
        .map(str::to_owned)
        .map_err(|_| "API endpoint specified is not valid.".to_string())
}

/// Get intelligence about matching Internet domain names
#[derive(Args)]
pub struct DomainArgs {
    /// Domain name pattern to look up
    pub pattern: String,
    /// List of resources with their singular views to include in the output
    #[arg(short, long = "include-resources", value_name = "RES")]
    pub include_resources: Vec<String>,
}

impl From<DomainArgs> for DomainQuery {
    fn from(val: DomainArgs) -> Self {
        DomainQuery {
            pattern: val.pattern,
            include_resources: val.include_resources,
        }
    }
}

/// Command-line representation of data output formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
    Tree,
    Verbose,
    Yaml,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(val: OutputFormatArg) -> Self {
        match val {
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Tree => OutputFormat::Tree,
            OutputFormatArg::Verbose => OutputFormat::Verbose,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Command-line representation of log record formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    /// Default logger format
    Native,
    /// One JSON object per line
    Jsonl,
    /// Syslog style lines with a priority header
    Syslog,
}

impl From<LogFormatArg> for LogFormat {
    fn from(val: LogFormatArg) -> Self {
        match val {
            LogFormatArg::Native => LogFormat::Native,
            LogFormatArg::Jsonl => LogFormat::Jsonl,
            LogFormatArg::Syslog => LogFormat::Syslog,
        }
    }
}

/// Command-line representation of log levels
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Debug,
    Info,
    Warning,
    Critical,
}

impl From<LogLevelArg> for LogLevel {
    fn from(val: LogLevelArg) -> Self {
        match val {
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Warning => LogLevel::Warning,
            LogLevelArg::Critical => LogLevel::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_endpoint() {
        assert_eq!(
            parse_api_endpoint("api.zeroguard.com:8443"),
            Ok("api.zeroguard.com:8443".to_string())
        );
        assert_eq!(
            parse_api_endpoint("bruh"),
            Err("API endpoint specified is not valid.".to_string())
        );
    }

    #[test]
    fn test_domain_args_into_query() {
        let args = DomainArgs {
            pattern: "example.com".to_string(),
            include_resources: vec!["whois".to_string()],
        };
        let query: DomainQuery = args.into();
        assert_eq!(query, DomainQuery::new("example.com").with_resources(["whois"]));
    }

    #[test]
    fn test_value_enum_names() {
        assert_eq!(
            LogLevelArg::Warning.to_possible_value().unwrap().get_name(),
            "warning"
        );
        assert_eq!(
            LogFormatArg::Jsonl.to_possible_value().unwrap().get_name(),
            "jsonl"
        );
        assert_eq!(LogLevel::from(LogLevelArg::Critical), LogLevel::Critical);
        assert_eq!(OutputFormat::from(OutputFormatArg::Yaml), OutputFormat::Yaml);
    }
}
