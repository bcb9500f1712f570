//! Lookup orchestration.
//!
//! A run is the record enrichment pipeline followed by the WHOIS lookup. The
//! two share no state; WHOIS only runs once the pipeline has completed.

mod pipeline;
mod registration;

use std::io::Write;

use anyhow::{Context, Result};

use crate::app::Console;
use crate::config::Config;
use crate::dns::{HickoryRecordResolver, RecordResolver};
use crate::error_handling::{InitializationError, LookupError};
use crate::geoip::{Geolocator, IpApiGeolocator};
use crate::initialization::{init_client, init_resolver};
use crate::whois::{WhoisRecord, WhoisServiceSource, WhoisSource};

pub use pipeline::{EnrichmentReport, RecordEnrichmentPipeline};
pub use registration::RegistrationLookup;

/// Results of a full lookup run.
#[derive(Debug, Clone)]
pub struct LookupReport {
    /// DNS records, geolocated points, and artifact location
    pub enrichment: EnrichmentReport,
    /// WHOIS record, `None` when the registry had no data
    pub whois: Option<WhoisRecord>,
}

/// Runs the pipeline then the WHOIS lookup for `domain`.
///
/// A pipeline failure is returned immediately and no WHOIS lookup is made.
pub async fn lookup_domain<R, G, S, W>(
    pipeline: &RecordEnrichmentPipeline<R, G>,
    registration: &RegistrationLookup<S>,
    domain: &str,
    console: &mut Console<W>,
) -> Result<LookupReport, LookupError>
where
    R: RecordResolver,
    G: Geolocator,
    S: WhoisSource,
    W: Write,
{
    let enrichment = pipeline.run(domain, console).await?;
    let whois = registration.run(domain, console).await?;
    console.flush()?;
    Ok(LookupReport { enrichment, whois })
}

/// Runs a lookup for `domain` using the production collaborators.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, or propagates any
/// fatal `LookupError` from the run.
pub async fn run_lookup<W: Write>(
    config: &Config,
    domain: &str,
    console: &mut Console<W>,
) -> Result<LookupReport> {
    let client = init_client(config)
        .map_err(InitializationError::from)
        .context("Failed to initialize HTTP client")?;
    let resolver = HickoryRecordResolver::new(init_resolver(config.dns_timeout()));
    let geolocator = IpApiGeolocator::new(client, config.geolocation_endpoint.clone());
    let whois = WhoisServiceSource::new(config.whois_timeout());

    let pipeline = RecordEnrichmentPipeline::new(resolver, geolocator, config.output_dir.clone());
    let registration = RegistrationLookup::new(whois);

    let report = lookup_domain(&pipeline, &registration, domain, console)
        .await
        .with_context(|| format!("Lookup for {domain} failed"))?;
    Ok(report)
}
