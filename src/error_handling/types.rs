//! Error type definitions.
//!
//! Only the outcomes that are recovered locally (absent records, non-existent
//! domain, DNS timeouts, missing WHOIS data) are modelled outside these types;
//! everything here terminates the run once it reaches the caller.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::dns::DnsRecordType;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure to geolocate one IPv4 address.
#[derive(Error, Debug)]
pub enum GeolocationError {
    /// Transport failure, non-success HTTP status, or undecodable body.
    #[error("Geolocation request for {ip} failed: {source}")]
    Request {
        /// Address being located
        ip: String,
        /// Underlying HTTP error
        #[source]
        source: ReqwestError,
    },

    /// The service answered but refused the lookup (e.g. private or reserved range).
    #[error("Geolocation service rejected {ip}: {message}")]
    Rejected {
        /// Address being located
        ip: String,
        /// Reason reported by the service
        message: String,
    },

    /// The answer did not carry both longitude and latitude.
    #[error("Geolocation response for {ip} is missing coordinates")]
    MissingCoordinates {
        /// Address being located
        ip: String,
    },
}

/// Failure of a WHOIS lookup.
#[derive(Error, Debug)]
pub enum WhoisError {
    /// The registry holds no registration data for the domain.
    #[error("No WHOIS information found for {domain}")]
    NoData {
        /// Domain that was looked up
        domain: String,
    },

    /// The lookup did not finish within the configured bound.
    #[error("WHOIS lookup for {domain} timed out")]
    Timeout {
        /// Domain that was looked up
        domain: String,
    },

    /// The WHOIS client could not be created (e.g. IANA bootstrap data unavailable).
    #[error("Failed to create WHOIS client: {message}")]
    Client {
        /// Error reported by the WHOIS library
        message: String,
    },

    /// The lookup failed for a reason other than missing registration data.
    #[error("WHOIS lookup for {domain} failed: {message}")]
    Lookup {
        /// Domain that was looked up
        domain: String,
        /// Error reported by the WHOIS library
        message: String,
    },
}

/// Errors that escape a lookup run.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Resolver failure that is neither an empty answer, NXDOMAIN nor a timeout.
    #[error("{record_type} lookup for {domain} failed: {message}")]
    Resolver {
        /// Domain under investigation
        domain: String,
        /// Record type being queried
        record_type: DnsRecordType,
        /// Resolver error description
        message: String,
    },

    /// Geolocation of an A record failed.
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),

    /// WHOIS lookup failed with something other than "no data".
    #[error(transparent)]
    Whois(#[from] WhoisError),

    /// The KML artifact could not be written.
    #[error("Failed to write artifact {}: {source}", path.display())]
    Artifact {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Console output could not be written.
    #[error("Console output error: {0}")]
    Output(#[from] io::Error),
}
