//! Error handling.
//!
//! Error types are split by collaborator:
//! - **Initialization**: logger and HTTP client setup
//! - **Geolocation** and **WHOIS**: external service failures
//! - **Lookup**: the single error type returned by a run

mod types;

// Re-export public API
pub use types::{GeolocationError, InitializationError, LookupError, WhoisError};
