//! Parameter structures for ZeroGuard commands
//!
//! These structures are free of CLI framework derives. The CLI wraps them in
//! clap argument types and converts with `From`, keeping parsing concerns out
//! of the core.

use serde::{Deserialize, Serialize};

/// Intelligence request about domain names matching a pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainQuery {
    /// Domain name pattern to match
    pub pattern: String,
    /// Resources whose singular views are included in the output
    pub include_resources: Vec<String>,
}

impl DomainQuery {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            include_resources: Vec::new(),
        }
    }

    pub fn with_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_resources
            .extend(resources.into_iter().map(Into::into));
        self
    }
}
