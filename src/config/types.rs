//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_GEOLOCATION_ENDPOINT, DEFAULT_USER_AGENT, DNS_TIMEOUT_SECS, WHOIS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
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
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// The domain under investigation is never a flag: it is always read from the
/// interactive prompt.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dns_find",
    version,
    about = "Resolve DNS records, geolocate A records into a KML file, and show WHOIS data"
)]
pub struct Opt {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// DNS query timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Directory the KML artifact is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use dns_find::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     output_dir: PathBuf::from("/tmp"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// DNS query timeout in seconds
    pub timeout_seconds: u64,

    /// Directory receiving the KML artifact
    pub output_dir: PathBuf,

    /// Base URL of the geolocation service; the IP address is appended as a path segment
    pub geolocation_endpoint: String,

    /// Timeout for the whole WHOIS lookup in seconds
    pub whois_timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Config {
    /// DNS query timeout as a `Duration`.
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// WHOIS lookup timeout as a `Duration`.
    pub fn whois_timeout(&self) -> Duration {
        Duration::from_secs(self.whois_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: DNS_TIMEOUT_SECS,
            output_dir: PathBuf::from("."),
            geolocation_endpoint: DEFAULT_GEOLOCATION_ENDPOINT.to_string(),
            whois_timeout_seconds: WHOIS_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            log_level: opt.log_level,
            log_format: opt.log_format,
            timeout_seconds: opt.timeout_seconds,
            output_dir: opt.output_dir,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(log::LevelFilter::from(LogLevel::Warn), log::LevelFilter::Warn);
        assert_eq!(log::LevelFilter::from(LogLevel::Info), log::LevelFilter::Info);
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
        let opt = Opt::try_parse_from(["dns_find"]).expect("defaults should parse");
        assert_eq!(opt.log_level, LogLevel::Warn);
        assert_eq!(opt.log_format, LogFormat::Plain);
        assert_eq!(opt.timeout_seconds, DNS_TIMEOUT_SECS);
        assert_eq!(opt.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_opt_rejects_positional_domain() {
        // The domain comes from the prompt only
        assert!(Opt::try_parse_from(["dns_find", "example.com"]).is_err());
    }

    #[test]
    fn test_config_from_opt_keeps_endpoint_defaults() {
        let opt = Opt::try_parse_from([
            "dns_find",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--timeout-seconds",
            "7",
            "--output-dir",
            "/tmp/out",
        ])
        .unwrap();
        let config = Config::from(opt);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.dns_timeout(), Duration::from_secs(7));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.geolocation_endpoint, DEFAULT_GEOLOCATION_ENDPOINT);
        assert_eq!(config.whois_timeout(), Duration::from_secs(WHOIS_TIMEOUT_SECS));
    }
}
