//! dns_find library: interactive domain reconnaissance
//!
//! This library resolves a domain's A, CNAME, MX, TXT, and SOA records,
//! geolocates every A-record address into a KML point file named
//! `dnsFIND-{domain}.kml`, and retrieves WHOIS registration metadata.
//!
//! # Example
//!
//! ```no_run
//! use dns_find::app::Console;
//! use dns_find::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let mut console = Console::new(std::io::stdout());
//! let report = run_lookup(&config, "example.com", &mut console).await?;
//! println!(
//!     "{} point(s) saved to {}",
//!     report.enrichment.points.len(),
//!     report.enrichment.artifact_path.display()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod geoip;
pub mod initialization;
mod run;
pub mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::LookupError;
pub use run::{
    lookup_domain, run_lookup, EnrichmentReport, LookupReport, RecordEnrichmentPipeline,
    RegistrationLookup,
};
