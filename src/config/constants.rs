//! Configuration constants.
//!
//! This module defines the operational constants used throughout the application,
//! including timeouts, external endpoints, and artifact naming.

// Network operation timeouts
/// DNS query timeout in seconds
/// Most DNS queries complete in <1s, 3s provides good buffer while failing fast
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts the resolver makes per query before reporting a timeout
pub const DNS_ATTEMPTS: usize = 2;
/// Geolocation HTTP request timeout in seconds
pub const GEOLOCATION_TIMEOUT_SECS: u64 = 5;
/// Upper bound for a whole WHOIS lookup (bootstrap, RDAP/WHOIS query, parsing) in seconds
pub const WHOIS_TIMEOUT_SECS: u64 = 15;

// Geolocation
/// ip-api.com JSON endpoint (free, no API key required for non-commercial use)
pub const DEFAULT_GEOLOCATION_ENDPOINT: &str = "http://ip-api.com/json";
/// Fields requested from the geolocation endpoint
pub const GEOLOCATION_FIELDS: &str = "status,message,lon,lat";

// Artifact naming
/// Prefix of the geo-point artifact: `dnsFIND-{domain}.kml`
pub const ARTIFACT_PREFIX: &str = "dnsFIND";
/// Extension of the geo-point artifact
pub const ARTIFACT_EXTENSION: &str = "kml";

/// User-Agent sent with geolocation requests.
pub const DEFAULT_USER_AGENT: &str = concat!("dns_find/", env!("CARGO_PKG_VERSION"));
