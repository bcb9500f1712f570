//! DNS record queries against hickory-resolver.
//!
//! Resolver errors are classified into [`DnsQueryOutcome`] variants here so the
//! pipeline can match exhaustively instead of inspecting error strings.

use std::future::Future;
use std::sync::Arc;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::types::{DnsQueryOutcome, DnsRecordType, RecordValue};

/// Typed DNS query interface.
///
/// Implementations never fail: every resolver error is folded into a
/// [`DnsQueryOutcome`] variant.
pub trait RecordResolver {
    /// Queries `record_type` records for `domain`.
    fn query(
        &self,
        domain: &str,
        record_type: DnsRecordType,
    ) -> impl Future<Output = DnsQueryOutcome> + Send;
}

impl<T: RecordResolver + Sync> RecordResolver for &T {
    fn query(
        &self,
        domain: &str,
        record_type: DnsRecordType,
    ) -> impl Future<Output = DnsQueryOutcome> + Send {
        (**self).query(domain, record_type)
    }
}

/// Production resolver backed by `hickory-resolver`.
#[derive(Clone)]
pub struct HickoryRecordResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryRecordResolver {
    /// Wraps an initialized resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

impl RecordResolver for HickoryRecordResolver {
    async fn query(&self, domain: &str, record_type: DnsRecordType) -> DnsQueryOutcome {
        let wanted = RecordType::from(record_type);
        match self.resolver.lookup(domain, wanted).await {
            Ok(lookup) => {
                // Answers to an A query may include the CNAME chain that led to them
                let records: Vec<RecordValue> = lookup
                    .iter()
                    .filter(|rdata| rdata.record_type() == wanted)
                    .map(record_value)
                    .collect();
                log::debug!("{record_type} lookup for {domain}: {} record(s)", records.len());
                DnsQueryOutcome::from_records(records)
            }
            Err(e) => {
                let outcome = classify_error(&e);
                if let DnsQueryOutcome::OtherFailure(_) = outcome {
                    log::warn!("Failed to lookup {record_type} records for {domain}: {e}");
                } else {
                    log::debug!("{record_type} lookup for {domain}: {e}");
                }
                outcome
            }
        }
    }
}

/// Converts record data to its presentation text.
pub(crate) fn record_value(rdata: &RData) -> RecordValue {
    match rdata {
        RData::A(a) => RecordValue::a(a.0),
        RData::TXT(txt) => {
            // TXT records can contain multiple strings - join them
            let joined = txt
                .iter()
                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                .collect::<Vec<String>>()
                .join("");
            RecordValue::text(format!("\"{joined}\""))
        }
        other => RecordValue::text(other.to_string()),
    }
}

/// Maps a resolver error to an outcome.
pub(crate) fn classify_error(error: &ResolveError) -> DnsQueryOutcome {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            classify_empty_response(*response_code)
        }
        ResolveErrorKind::Timeout => DnsQueryOutcome::TimedOut,
        _ => DnsQueryOutcome::OtherFailure(error.to_string()),
    }
}

/// Maps the response code of an answer without records.
pub(crate) fn classify_empty_response(response_code: ResponseCode) -> DnsQueryOutcome {
    match response_code {
        ResponseCode::NXDomain => DnsQueryOutcome::NonExistentDomain,
        ResponseCode::NoError => DnsQueryOutcome::NotPresent,
        other => DnsQueryOutcome::OtherFailure(format!("server responded with {other}")),
    }
}
