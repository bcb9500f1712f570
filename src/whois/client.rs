//! WHOIS lookups through the `whois-service` crate.
//!
//! The crate handles IANA bootstrap, RDAP with WHOIS fallback, and referral
//! following; this module bounds the lookup and maps its result.

use std::future::Future;
use std::time::Duration;

use whois_service::WhoisClient;

use super::parse::{classify_lookup_error, convert_response};
use super::types::WhoisRecord;
use crate::error_handling::WhoisError;

/// Source of WHOIS registration data.
pub trait WhoisSource {
    /// Looks up `domain`.
    ///
    /// Returns `WhoisError::NoData` when the registry has no registration for it.
    fn lookup(&self, domain: &str) -> impl Future<Output = Result<WhoisRecord, WhoisError>> + Send;
}

impl<T: WhoisSource + Sync> WhoisSource for &T {
    fn lookup(&self, domain: &str) -> impl Future<Output = Result<WhoisRecord, WhoisError>> + Send {
        (**self).lookup(domain)
    }
}

/// WHOIS source backed by `whois_service::WhoisClient`.
#[derive(Debug, Clone)]
pub struct WhoisServiceSource {
    timeout: Duration,
}

impl WhoisServiceSource {
    /// Creates a source whose lookups are abandoned after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl WhoisSource for WhoisServiceSource {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        log::info!("Starting WHOIS lookup for domain: {}", domain);

        let exchange = async {
            // The client is lightweight and only one lookup is made per run
            let client = WhoisClient::new()
                .await
                .map_err(|e| WhoisError::Client {
                    message: e.to_string(),
                })?;
            client
                .lookup(domain)
                .await
                .map_err(|e| classify_lookup_error(domain, &e.to_string()))
        };

        let response = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(WhoisError::Timeout {
                    domain: domain.to_string(),
                })
            }
        };

        let record = convert_response(domain, &response)?;
        log::info!("WHOIS lookup successful for {}", domain);
        Ok(record)
    }
}
