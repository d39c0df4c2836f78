//! Information about the ZeroGuard CLI application.

pub const TITLE: &str = "zeroguard-cli";
pub const DESCRIPTION: &str = "ZeroGuard CLI";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DOCS_URL: &str = "https://zeroguard-cli.readthedocs.io";
pub const SOURCE_URL: &str = "https://github.com/zeroguard/zeroguard-cli";
pub const HOME_URL: &str = "https://zeroguard.com";

pub const COPYRIGHT: &str = "2019 ZeroGuard Ltd";
pub const LICENSE: &str = "AGPL-3.0";

/// Line printed by `zg --version`.
pub fn version_line() -> String {
    format!("{DESCRIPTION} version {VERSION}")
}

/// Project links and license shown after the help text.
pub fn help_footer() -> String {
    format!(
        "Documentation: {DOCS_URL}\nSource: {SOURCE_URL}\nHome: {HOME_URL}\n\n\
         Copyright {COPYRIGHT}. Licensed under {LICENSE}."
    )
}
