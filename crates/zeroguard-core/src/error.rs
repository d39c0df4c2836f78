//! Error types for the ZeroGuard core library.

use thiserror::Error;

/// Error type for formatting, validation and command placeholders.
#[derive(Error, Debug)]
pub enum ZeroGuardError {
    /// A rich template failed to render, usually because a variable it
    /// references is missing from the supplied data
    #[error("Template rendering failed: {source}")]
    TemplateRender {
        #[from]
        source: minijinja::Error,
    },
    /// A style token outside of the terminal capability table
    #[error("Unknown style token '{token}'")]
    UnknownStyleToken { token: String },
    /// Writing a rendered line to the output stream failed
    #[error("Output error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    /// Value is not a structurally valid network location
    #[error("Invalid network location '{value}'")]
    InvalidNetloc { value: String },
    /// Command exists on the command line but has no implementation yet
    #[error("The '{command}' command is not implemented yet")]
    NotImplemented { command: String },
}

impl ZeroGuardError {
    /// Creates an unknown style token error.
    pub fn unknown_style_token(token: impl Into<String>) -> Self {
        Self::UnknownStyleToken {
            token: token.into(),
        }
    }

    /// Creates an error for a placeholder command.
    pub fn not_implemented(command: impl Into<String>) -> Self {
        Self::NotImplemented {
            command: command.into(),
        }
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, ZeroGuardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ZeroGuardError::unknown_style_token("{t.purple}");
        assert_eq!(err.to_string(), "Unknown style token '{t.purple}'");

        let err = ZeroGuardError::not_implemented("status");
        assert_eq!(err.to_string(), "The 'status' command is not implemented yet");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ZeroGuardError = io.into();
        assert!(matches!(err, ZeroGuardError::Io { .. }));
        assert!(err.to_string().contains("pipe closed"));
    }
}
