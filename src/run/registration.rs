//! WHOIS registration lookup.

use std::io::Write;

use crate::app::Console;
use crate::error_handling::{LookupError, WhoisError};
use crate::whois::{WhoisRecord, WhoisSource};

/// Fetches and displays WHOIS metadata for a domain.
pub struct RegistrationLookup<S> {
    source: S,
}

impl<S: WhoisSource> RegistrationLookup<S> {
    /// Creates a lookup over `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Looks up `domain` once and prints the result.
    ///
    /// Returns `Ok(None)` when the registry has no data for the domain; any
    /// other WHOIS failure is returned as an error.
    pub async fn run<W: Write>(
        &self,
        domain: &str,
        console: &mut Console<W>,
    ) -> Result<Option<WhoisRecord>, LookupError> {
        match self.source.lookup(domain).await {
            Ok(record) => {
                console.whois(&record)?;
                Ok(Some(record))
            }
            Err(WhoisError::NoData { .. }) => {
                log::info!("No WHOIS data for {domain}");
                console.whois_not_found(domain)?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
