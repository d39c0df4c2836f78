//! Validation of user supplied values.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::error::{Result, ZeroGuardError};

// Structure only: IPv4 octets are not range checked, so `355.0.0.1` passes,
// and labels may start or end with a hyphen.
static NETLOC: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"^([a-z0-9\-\.]*)\.(([a-z]{2,4})|([0-9]{1,3}\.([0-9]{1,3})\.([0-9]{1,3})))(:[0-9]{2,5})?$",
    )
    .case_insensitive(true)
    .build()
    .expect("netloc pattern is valid")
});

/// Whether `value` looks like a network location: a host name ending in a
/// 2-4 letter label, or a dotted IPv4 address, with an optional port.
pub fn check_valid_netloc(value: &str) -> bool {
    NETLOC.is_match(value)
}

/// Returns `value` unchanged if it is a valid network location.
///
/// # Errors
///
/// Returns `ZeroGuardError::InvalidNetloc` otherwise.
pub fn validate_netloc(value: &str) -> Result<&str> {
    if check_valid_netloc(value) {
        Ok(value)
    } else {
        Err(ZeroGuardError::InvalidNetloc {
            value: value.to_string(),
        })
    }
}
