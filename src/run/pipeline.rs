//! DNS record enrichment pipeline.
//!
//! Queries every record type for a domain, reports each outcome, geolocates
//! A-record addresses, and flushes the collected points to the KML artifact.

use std::io::Write;
use std::path::PathBuf;

use log::{debug, info};
use strum::IntoEnumIterator;

use crate::app::Console;
use crate::dns::{DnsQueryOutcome, DnsRecordType, RecordResolver};
use crate::error_handling::LookupError;
use crate::export::{save_kml, PointCollection};
use crate::geoip::{GeoPoint, Geolocator};

/// Results of one pipeline run.
#[derive(Debug, Clone)]
pub struct EnrichmentReport {
    /// Absolute path of the written KML artifact
    pub artifact_path: PathBuf,
    /// Points written to the artifact, in insertion order
    pub points: PointCollection,
    /// Every record type with its classified outcome, in query order
    pub outcomes: Vec<(DnsRecordType, DnsQueryOutcome)>,
}

impl EnrichmentReport {
    /// Outcome recorded for `record_type`.
    pub fn outcome(&self, record_type: DnsRecordType) -> Option<&DnsQueryOutcome> {
        self.outcomes
            .iter()
            .find(|(t, _)| *t == record_type)
            .map(|(_, outcome)| outcome)
    }
}

/// Record lookup plus geolocation enrichment for one domain.
pub struct RecordEnrichmentPipeline<R, G> {
    resolver: R,
    geolocator: G,
    output_dir: PathBuf,
}

impl<R: RecordResolver, G: Geolocator> RecordEnrichmentPipeline<R, G> {
    /// Creates a pipeline writing its artifact into `output_dir`.
    pub fn new(resolver: R, geolocator: G, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            resolver,
            geolocator,
            output_dir: output_dir.into(),
        }
    }

    /// Runs every record query for `domain` and saves the artifact.
    ///
    /// Record types are queried strictly in A, CNAME, MX, TXT, SOA order and A
    /// records are geolocated one at a time in answer order. Absent records,
    /// a non-existent domain, and timeouts are reported and processing carries
    /// on with the next type; the artifact is written once all five are done.
    ///
    /// # Errors
    ///
    /// - `LookupError::Resolver` for an unclassified resolver failure
    /// - `LookupError::Geolocation` for the first address that cannot be located
    /// - `LookupError::Artifact` if the KML file cannot be written
    ///
    /// No artifact is written when the run fails before the save step.
    pub async fn run<W: Write>(
        &self,
        domain: &str,
        console: &mut Console<W>,
    ) -> Result<EnrichmentReport, LookupError> {
        let mut points = PointCollection::new();
        let mut outcomes = Vec::new();

        for record_type in DnsRecordType::iter() {
            let outcome = self.resolver.query(domain, record_type).await;
            debug!("{record_type} outcome for {domain}: {outcome:?}");

            match &outcome {
                DnsQueryOutcome::Found(records) => {
                    console.record_header(record_type)?;
                    for record in records {
                        console.record_line(&record.text)?;
                        if record_type != DnsRecordType::A {
                            continue;
                        }
                        if let Some(address) = record.address {
                            let coordinates = self.geolocator.locate(address).await?;
                            console.coordinates(&coordinates)?;
                            points.push(GeoPoint::new(record.text.clone(), coordinates));
                        }
                    }
                }
                DnsQueryOutcome::NotPresent => {
                    console.record_header(record_type)?;
                    console.no_records(record_type)?;
                }
                DnsQueryOutcome::NonExistentDomain => console.domain_missing(domain)?,
                DnsQueryOutcome::TimedOut => console.timed_out(domain)?,
                DnsQueryOutcome::OtherFailure(message) => {
                    return Err(LookupError::Resolver {
                        domain: domain.to_string(),
                        record_type,
                        message: message.clone(),
                    });
                }
            }

            outcomes.push((record_type, outcome));
        }

        let artifact_path = save_kml(&points, &self.output_dir, domain)?;
        console.artifact_saved(&artifact_path)?;
        info!(
            "Record lookup for {domain} complete: {} point(s) exported",
            points.len()
        );

        Ok(EnrichmentReport {
            artifact_path,
            points,
            outcomes,
        })
    }
}
