//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// The domain is optional at the parser level so `--wiki` can be used on its
/// own; `main` enforces that a domain is present on every other code path.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "crtsh_lookup",
    about = "Query crt.sh for SSL certificate data of a domain."
)]
pub struct Opt {
    /// Domain to query (e.g., example.com)
    pub domain: Option<String>,

    /// Show only the subdomains related to the domain
    #[arg(long)]
    pub subdomains: bool,

    /// Show IP addresses for each subdomain
    #[arg(long)]
    pub show_ips: bool,

    /// Save results to a file
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Display the command wiki
    #[arg(long)]
    pub wiki: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_opt_defaults() {
        let opt = Opt::parse_from(["crtsh_lookup", "example.com"]);
        assert_eq!(opt.domain.as_deref(), Some("example.com"));
        assert!(!opt.subdomains);
        assert!(!opt.show_ips);
        assert!(opt.save.is_none());
        assert!(!opt.wiki);
    }

    #[test]
    fn test_opt_domain_is_optional() {
        // `--wiki` must parse without a positional domain
        let opt = Opt::parse_from(["crtsh_lookup", "--wiki"]);
        assert!(opt.domain.is_none());
        assert!(opt.wiki);
    }
}
