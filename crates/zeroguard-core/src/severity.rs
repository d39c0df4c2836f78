//! Message severities and the verbosity gate.
//!
//! Severities classify formatter messages. They are not logging levels: each
//! one carries a fixed rank, a message prefix and a style token that colors
//! the whole message.

use std::fmt;

/// Classification of a leveled formatter message, ordered by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Ok,
    Warn,
    Err,
}

impl Severity {
    /// All severities in ascending rank order.
    pub const ALL: [Severity; 4] = [Severity::Info, Severity::Ok, Severity::Warn, Severity::Err];

    /// Integer rank, `Err` being the highest.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Info => 0,
            Severity::Ok => 1,
            Severity::Warn => 2,
            Severity::Err => 3,
        }
    }

    /// Text placed in front of every message of this severity.
    pub fn prefix(self) -> &'static str {
        match self {
            Severity::Info => "---(i) INFO: ",
            Severity::Ok => "---(+) OK: ",
            Severity::Warn => "---(!) WARN: ",
            Severity::Err => "---(X) ERR: ",
        }
    }

    /// Style token coloring the whole message.
    pub fn color_token(self) -> &'static str {
        match self {
            Severity::Info => "{t.white}",
            Severity::Ok => "{t.green}",
            Severity::Warn => "{t.yellow}",
            Severity::Err => "{t.red}",
        }
    }

    /// Whether a message of this severity passes a gate set to `minimum`.
    pub fn should_emit(self, minimum: Severity) -> bool {
        self.rank() >= minimum.rank()
    }

    /// Wraps a user template with this severity's color, prefix and a
    /// trailing reset token.
    pub fn decorate(self, template: &str) -> String {
        format!("{}{}{}{{t.normal}}", self.color_token(), self.prefix(), template)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Ok => write!(f, "ok"),
            Severity::Warn => write!(f, "warn"),
            Severity::Err => write!(f, "err"),
        }
    }
}
