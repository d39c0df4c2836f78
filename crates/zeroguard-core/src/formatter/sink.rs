//! Output sinks receiving rendered formatter lines.

use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::terminal::Stream;

/// Destination for rendered lines.
///
/// Implementations receive one fully decorated line per call and report
/// whether a stream is an interactive terminal, which decides if style
/// escapes are produced.
pub trait OutputSink: Send {
    /// Writes `line` followed by a newline to `stream`.
    fn write_line(&mut self, stream: Stream, line: &str) -> io::Result<()>;

    /// Whether `stream` is attached to an interactive terminal.
    fn is_terminal(&self, stream: Stream) -> bool;
}

/// Sink writing to the process STDOUT/STDERR.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdSink;

impl OutputSink for StdSink {
    fn write_line(&mut self, stream: Stream, line: &str) -> io::Result<()> {
        match stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{line}"),
            Stream::Stderr => writeln!(io::stderr().lock(), "{line}"),
        }
    }

    fn is_terminal(&self, stream: Stream) -> bool {
        match stream {
            Stream::Stdout => io::stdout().is_terminal(),
            Stream::Stderr => io::stderr().is_terminal(),
        }
    }
}

/// A line captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub stream: Stream,
    pub text: String,
}

/// Sink keeping lines in memory.
///
/// Clones share the same buffer, so a clone handed to a formatter can be
/// inspected through the original handle.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
    terminal: bool,
}

impl MemorySink {
    /// Creates a sink that reports no terminal on either stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that reports a terminal on both streams.
    pub fn terminal() -> Self {
        Self {
            terminal: true,
            ..Self::default()
        }
    }

    /// All captured lines in write order.
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Text of the captured lines in write order.
    pub fn texts(&self) -> Vec<String> {
        self.lines().into_iter().map(|line| line.text).collect()
    }

    /// Drops all captured lines.
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, stream: Stream, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedLine {
                stream,
                text: line.to_owned(),
            });
        Ok(())
    }

    fn is_terminal(&self, _stream: Stream) -> bool {
        self.terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shares_buffer_between_clones() {
        let sink = MemorySink::new();
        let mut handle = sink.clone();
        handle.write_line(Stream::Stdout, "one").unwrap();
        handle.write_line(Stream::Stderr, "two").unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                CapturedLine {
                    stream: Stream::Stdout,
                    text: "one".to_string()
                },
                CapturedLine {
                    stream: Stream::Stderr,
                    text: "two".to_string()
                },
            ]
        );

        sink.clear();
        assert!(handle.texts().is_empty());
    }

    #[test]
    fn test_memory_sink_terminal_flag() {
        assert!(!MemorySink::new().is_terminal(Stream::Stderr));
        assert!(MemorySink::terminal().is_terminal(Stream::Stdout));
    }
}
