//! Console output formatter.
//!
//! The [`Formatter`] turns message templates into console lines. Every message
//! goes through the same pipeline:
//!
//! ```text
//! template ──▶ minijinja (rich templates only) ──▶ style tokens ──▶ list prefix ──▶ sink
//!                                                 resolved or        bullet or      indent,
//!                                                 stripped           "<n>. "        severity gate
//! ```
//!
//! Leveled messages ([`Formatter::info`], [`Formatter::ok`],
//! [`Formatter::warn`], [`Formatter::err`]) wrap the template in the
//! severity's color token and prefix before rendering. The severity gate is
//! only consulted when a line is about to be written, so the silent variants
//! ([`Formatter::infos`] and friends) always return the rendered text.
//!
//! # Example
//!
//! ```rust
//! use zeroguard_core::{Formatter, MemorySink};
//!
//! let sink = MemorySink::new();
//! let mut fmt = Formatter::builder().colored(false).sink(sink.clone()).build();
//!
//! fmt.warn("disk {t.bold}usage{t.normal} high", None)?;
//! {
//!     let mut list = fmt.begin_numbered_list(0);
//!     list.data("first", None)?;
//!     list.data("second", None)?;
//! }
//! fmt.data("done", None)?;
//!
//! assert_eq!(
//!     sink.texts(),
//!     vec!["---(!) WARN: disk usage high", "1. first", "2. second", "done"]
//! );
//! # Ok::<(), zeroguard_core::ZeroGuardError>(())
//! ```

mod scope;
mod sink;


use std::fmt;

use serde_json::Value;

pub use scope::{Decoration, DecorationKind, ListScope, ITEM_LIST_PREFIX};
pub use sink::{CapturedLine, MemorySink, OutputSink, StdSink};

use crate::{
    error::Result,
    severity::Severity,
    template,
    terminal::{Palette, Stream},
};

/// Number of spaces per indent level.
pub const INDENT_STEP: usize = 2;

/// Leveled, templated console output with list and indent scopes.
pub struct Formatter {
    stream: Stream,
    colored: bool,
    force_colored: bool,
    min_severity: Severity,
    decoration: Option<Decoration>,
    sink: Box<dyn OutputSink>,
}

impl Formatter {
    /// Creates a formatter writing colored output to STDERR.
    pub fn new() -> Self {
        FormatterBuilder::new().build()
    }

    /// Returns a builder for a customized formatter.
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::new()
    }

    pub fn stream(&self) -> Stream {
        self.stream
    }

    pub fn set_stream(&mut self, stream: Stream) {
        self.stream = stream;
    }

    pub fn colored(&self) -> bool {
        self.colored
    }

    pub fn set_colored(&mut self, colored: bool) {
        self.colored = colored;
    }

    pub fn force_colored(&self) -> bool {
        self.force_colored
    }

    pub fn set_force_colored(&mut self, force_colored: bool) {
        self.force_colored = force_colored;
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    pub fn set_min_severity(&mut self, severity: Severity) {
        self.min_severity = severity;
    }

    /// Decoration of the innermost active list scope.
    pub fn decoration(&self) -> Option<&Decoration> {
        self.decoration.as_ref()
    }

    /// Palette matching the current target stream and color flags.
    pub fn palette(&self) -> Palette {
        Palette::for_destination(self.sink.is_terminal(self.stream), self.force_colored)
    }

    /// Whether a message of `severity` passes the verbosity gate.
    pub fn should_emit(&self, severity: Severity) -> bool {
        severity.should_emit(self.min_severity)
    }

    /// Renders `template` with `data`, then prepends `prefix`.
    ///
    /// The prefix is never run through templating or style resolution.
    ///
    /// # Errors
    ///
    /// Returns `ZeroGuardError::TemplateRender` if a rich template fails,
    /// `ZeroGuardError::UnknownStyleToken` if an unknown style token is found
    /// while colored output is on.
    pub fn render(
        &self,
        template: &str,
        data: Option<&Value>,
        prefix: Option<&str>,
    ) -> Result<String> {
        let body = if template::is_rich_template(template) {
            template::render_rich(template, data)?
        } else {
            template.to_owned()
        };
        let body = if self.colored {
            template::apply_styles(&body, &self.palette())?
        } else {
            template::strip_styles(&body).into_owned()
        };
        Ok(match prefix {
            Some(prefix) => format!("{prefix}{body}"),
            None => body,
        })
    }

    /// Renders with the prefix of the active list scope, if any.
    fn render_decorated(&mut self, template: &str, data: Option<&Value>) -> Result<String> {
        let prefix = self.decoration.as_mut().and_then(Decoration::next_prefix);
        self.render(template, data, prefix.as_deref())
    }

    fn render_leveled(
        &mut self,
        severity: Severity,
        template: &str,
        data: Option<&Value>,
    ) -> Result<String> {
        self.render_decorated(&severity.decorate(template), data)
    }

    fn emit(&mut self, severity: Severity, template: &str, data: Option<&Value>) -> Result<()> {
        let line = self.render_leveled(severity, template, data)?;
        if self.should_emit(severity) {
            self.write(&line, 0)?;
        }
        Ok(())
    }

    /// Prints an informational message.
    pub fn info(&mut self, template: &str, data: Option<&Value>) -> Result<()> {
        self.emit(Severity::Info, template, data)
    }

    /// Prints a success message.
    pub fn ok(&mut self, template: &str, data: Option<&Value>) -> Result<()> {
        self.emit(Severity::Ok, template, data)
    }

    /// Prints a warning.
    pub fn warn(&mut self, template: &str, data: Option<&Value>) -> Result<()> {
        self.emit(Severity::Warn, template, data)
    }

    /// Prints an error message.
    pub fn err(&mut self, template: &str, data: Option<&Value>) -> Result<()> {
        self.emit(Severity::Err, template, data)
    }

    /// Same as [`Formatter::info`] but returns the line instead of printing.
    pub fn infos(&mut self, template: &str, data: Option<&Value>) -> Result<String> {
        self.render_leveled(Severity::Info, template, data)
    }

    /// Same as [`Formatter::ok`] but returns the line instead of printing.
    pub fn oks(&mut self, template: &str, data: Option<&Value>) -> Result<String> {
        self.render_leveled(Severity::Ok, template, data)
    }

    /// Same as [`Formatter::warn`] but returns the line instead of printing.
    pub fn warns(&mut self, template: &str, data: Option<&Value>) -> Result<String> {
        self.render_leveled(Severity::Warn, template, data)
    }

    /// Same as [`Formatter::err`] but returns the line instead of printing.
    pub fn errs(&mut self, template: &str, data: Option<&Value>) -> Result<String> {
        self.render_leveled(Severity::Err, template, data)
    }

    /// Prints a plain message. Plain messages are never suppressed.
    pub fn data(&mut self, template: &str, data: Option<&Value>) -> Result<()> {
        let line = self.datas(template, data)?;
        self.write(&line, 0)
    }

    /// Same as [`Formatter::data`] but returns the line instead of printing.
    pub fn datas(&mut self, template: &str, data: Option<&Value>) -> Result<String> {
        self.render_decorated(template, data)
    }

    /// Writes an already rendered line to the target stream.
    ///
    /// A positive `indent` is written as `indent * INDENT_STEP` spaces
    /// separated from the line by one more space. Inside a list scope the
    /// scope's indent replaces `indent`.
    pub fn write(&mut self, rendered: &str, indent: usize) -> Result<()> {
        let indent = self.decoration.as_ref().map_or(indent, Decoration::indent);
        let line = if indent > 0 {
            format!("{} {}", " ".repeat(indent * INDENT_STEP), rendered)
        } else {
            rendered.to_owned()
        };
        self.sink.write_line(self.stream, &line)?;
        Ok(())
    }

    /// Starts an item list: lines get a `"* "` prefix and `indent`.
    pub fn begin_item_list(&mut self, indent: usize) -> ListScope<'_> {
        ListScope::enter(self, Decoration::bullet(indent))
    }

    /// Starts a numbered list: lines get a `"<n>. "` prefix, counting every
    /// rendered line from 1, and `indent`.
    pub fn begin_numbered_list(&mut self, indent: usize) -> ListScope<'_> {
        ListScope::enter(self, Decoration::numbered(indent))
    }

    /// Starts an indented block without list prefixes.
    pub fn begin_indent(&mut self, indent: usize) -> ListScope<'_> {
        ListScope::enter(self, Decoration::indent_only(indent))
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("stream", &self.stream)
            .field("colored", &self.colored)
            .field("force_colored", &self.force_colored)
            .field("min_severity", &self.min_severity)
            .field("decoration", &self.decoration)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Formatter`] instances.
pub struct FormatterBuilder {
    stream: Stream,
    colored: bool,
    force_colored: bool,
    min_severity: Severity,
    sink: Option<Box<dyn OutputSink>>,
}

impl FormatterBuilder {
    /// Creates a builder with default settings: STDERR, colored, not forced,
    /// every severity shown, process streams as sink.
    pub fn new() -> Self {
        Self {
            stream: Stream::default(),
            colored: true,
            force_colored: false,
            min_severity: Severity::default(),
            sink: None,
        }
    }

    pub fn stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn force_colored(mut self, force_colored: bool) -> Self {
        self.force_colored = force_colored;
        self
    }

    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Sets the sink receiving rendered lines.
    pub fn sink(mut self, sink: impl OutputSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Formatter {
        Formatter {
            stream: self.stream,
            colored: self.colored,
            force_colored: self.force_colored,
            min_severity: self.min_severity,
            decoration: None,
            sink: self.sink.unwrap_or_else(|| Box::new(StdSink)),
        }
    }
}

impl Default for FormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
