//! Application logging set-up.
//!
//! Logging is independent from formatter output: it goes through the `log`
//! facade and `env_logger`, is off unless `--log` is given, and can be
//! written as native lines, JSON lines or syslog style lines.

use std::io::Write;

use env_logger::{Builder, Target};
use jiff::Timestamp;
use log::{Level, LevelFilter};
use serde_json::json;
use zeroguard_core::{LogFormat, LogLevel, LogSettings};

/// Syslog facility code for user-level messages.
const SYSLOG_FACILITY_USER: u8 = 1;

/// Maps an application log level onto a `log` filter.
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Warning => LevelFilter::Warn,
        LogLevel::Critical => LevelFilter::Error,
    }
}

/// Formats a record as one compact JSON object.
pub fn jsonl_record(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    json!({
        "ts": timestamp,
        "level": level.as_str(),
        "target": target,
        "msg": message,
    })
    .to_string()
}

/// Syslog priority of a record: facility * 8 + severity.
pub fn syslog_priority(level: Level) -> u8 {
    let severity = match level {
        Level::Error => 3,
        Level::Warn => 4,
        Level::Info => 6,
        Level::Debug | Level::Trace => 7,
    };
    SYSLOG_FACILITY_USER * 8 + severity
}

/// Formats a record as a syslog style line.
pub fn syslog_record(level: Level, target: &str, pid: u32, message: &str) -> String {
    format!("<{}>{target}[{pid}]: {message}", syslog_priority(level))
}

/// Installs the global logger.
///
/// # Errors
///
/// Fails if a logger has already been installed.
pub fn init(settings: &LogSettings) -> Result<(), log::SetLoggerError> {
    let mut builder = Builder::new();

    if settings.enabled {
        builder.filter_level(level_filter(settings.level));
        builder.parse_default_env();
    } else {
        builder.filter_level(LevelFilter::Off);
    }

    builder.target(if settings.stdout {
        Target::Stdout
    } else {
        Target::Stderr
    });

    match settings.format {
        LogFormat::Native => {}
        LogFormat::Jsonl => {
            builder.format(|buf, record| {
                let line = jsonl_record(
                    &Timestamp::now().to_string(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Syslog => {
            let pid = std::process::id();
            builder.format(move |buf, record| {
                let line = syslog_record(
                    record.level(),
                    record.target(),
                    pid,
                    &record.args().to_string(),
                );
                writeln!(buf, "{line}")
            });
        }
    }

    builder.try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(LogLevel::Debug), LevelFilter::Debug);
        assert_eq!(level_filter(LogLevel::Warning), LevelFilter::Warn);
        assert_eq!(level_filter(LogLevel::Critical), LevelFilter::Error);
    }

    #[test]
    fn test_jsonl_record() {
        let line = jsonl_record("2024-01-01T00:00:00Z", Level::Info, "zg", "started");
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["msg"], "started");
        assert_eq!(value["target"], "zg");
        assert_eq!(value["ts"], "2024-01-01T00:00:00Z");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_syslog_record() {
        assert_eq!(syslog_priority(Level::Error), 11);
        assert_eq!(syslog_priority(Level::Debug), 15);
        assert_eq!(
            syslog_record(Level::Warn, "zg", 42, "careful"),
            "<12>zg[42]: careful"
        );
    }
}
