//! Command handlers.

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::debug;
use serde_json::json;
use zeroguard_core::{DomainQuery, Formatter, OutputFormat, Settings, ZeroGuardError};

/// Writes a styled label followed by a user supplied value.
///
/// Only the label goes through template and style rendering; the value is
/// appended verbatim so braces in it are never taken for style tokens.
fn write_labeled(fmt: &mut Formatter, label: &str, value: &str) -> Result<()> {
    let label = fmt.datas(label, None)?;
    fmt.write(&format!("{label}{value}"), 0)?;
    Ok(())
}

/// Runs commands against the resolved settings, reporting through the
/// formatter.
pub struct Cli {
    fmt: Formatter,
    settings: Settings,
}

impl Cli {
    pub fn new(fmt: Formatter, settings: Settings) -> Self {
        Self { fmt, settings }
    }

    /// Handles `zg domain`. Lookups are not available yet, so the parsed
    /// request is reported back.
    pub fn handle_domain(&mut self, query: &DomainQuery) -> Result<()> {
        debug!("domain query: {query:?}");

        match self.settings.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(query)
                    .context("Failed to serialize domain query")?;
                writeln!(io::stdout().lock(), "{json}").context("Failed to write domain query")?;
            }
            OutputFormat::Verbose => self.print_domain_query(query)?,
            other => {
                self.fmt.warn(
                    "Output format {t.bold}{{ format }}{t.normal} is not supported yet, using verbose",
                    Some(&json!({ "format": other.to_string() })),
                )?;
                self.print_domain_query(query)?;
            }
        }

        self.fmt.warn("Domain intelligence lookups are not implemented yet", None)?;
        Ok(())
    }

    fn print_domain_query(&mut self, query: &DomainQuery) -> Result<()> {
        self.fmt.info("Domain intelligence request", None)?;
        {
            let mut list = self.fmt.begin_item_list(1);
            write_labeled(&mut list, "{t.bold}pattern{t.normal}: ", &query.pattern)?;
            write_labeled(
                &mut list,
                "{t.bold}endpoint{t.normal}: ",
                &self.settings.api_endpoint,
            )?;
        }

        if query.include_resources.is_empty() {
            return Ok(());
        }

        self.fmt.data("Included resources:", None)?;
        let mut list = self.fmt.begin_numbered_list(1);
        for resource in &query.include_resources {
            write_labeled(&mut list, "", resource)?;
        }
        Ok(())
    }

    /// Handles `zg status`.
    pub fn handle_status(&mut self) -> Result<()> {
        debug!(
            "status check requested for {} (token {})",
            self.settings.api_endpoint,
            if self.settings.api_token.is_some() {
                "set"
            } else {
                "not set"
            }
        );
        Err(ZeroGuardError::not_implemented("status").into())
    }
}
