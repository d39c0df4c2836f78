//! Core library for the ZeroGuard command-line client.
//!
//! The centerpiece is the console [`Formatter`]: leveled messages
//! ([`Severity`]), rich templates rendered with minijinja, terminal style
//! tokens such as `{t.red}` and scoped list/indent decoration. Around it the
//! crate provides the application defaults ([`config`]), the API endpoint
//! validator ([`validators`]) and framework-free command parameters
//! ([`params`]).
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use zeroguard_core::{Formatter, MemorySink, Severity};
//!
//! let sink = MemorySink::new();
//! let mut fmt = Formatter::builder()
//!     .colored(false)
//!     .min_severity(Severity::Warn)
//!     .sink(sink.clone())
//!     .build();
//!
//! fmt.info("suppressed", None)?;
//! fmt.err("lookup of {{ domain }} failed", Some(&json!({"domain": "example.com"})))?;
//!
//! assert_eq!(sink.texts(), vec!["---(X) ERR: lookup of example.com failed"]);
//! # Ok::<(), zeroguard_core::ZeroGuardError>(())
//! ```

pub mod about;
pub mod config;
pub mod error;
pub mod formatter;
pub mod params;
pub mod severity;
pub mod template;
pub mod terminal;
pub mod validators;

// Re-export commonly used types
pub use config::{LogFormat, LogLevel, LogSettings, OutputFormat, Settings};
pub use error::{Result, ZeroGuardError};
pub use formatter::{
    CapturedLine, Decoration, DecorationKind, Formatter, FormatterBuilder, ListScope, MemorySink,
    OutputSink, StdSink, INDENT_STEP,
};
pub use params::DomainQuery;
pub use severity::Severity;
pub use terminal::{Palette, Stream};
pub use validators::{check_valid_netloc, validate_netloc};
