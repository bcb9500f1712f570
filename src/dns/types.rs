//! DNS data structures.

use std::net::Ipv4Addr;

use hickory_resolver::proto::rr::RecordType;
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};

/// Record types queried for every domain.
///
/// Declaration order is the query and report order: A, CNAME, MX, TXT, SOA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, DisplayMacro)]
pub enum DnsRecordType {
    /// IPv4 address
    #[strum(serialize = "A")]
    A,
    /// Canonical name (alias)
    #[strum(serialize = "CNAME")]
    Cname,
    /// Mail exchanger
    #[strum(serialize = "MX")]
    Mx,
    /// Free-form text
    #[strum(serialize = "TXT")]
    Txt,
    /// Start of authority
    #[strum(serialize = "SOA")]
    Soa,
}

impl From<DnsRecordType> for RecordType {
    fn from(record_type: DnsRecordType) -> Self {
        match record_type {
            DnsRecordType::A => RecordType::A,
            DnsRecordType::Cname => RecordType::CNAME,
            DnsRecordType::Mx => RecordType::MX,
            DnsRecordType::Txt => RecordType::TXT,
            DnsRecordType::Soa => RecordType::SOA,
        }
    }
}

/// Textual form of one DNS record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordValue {
    /// Presentation text of the record data
    pub text: String,
    /// Parsed address, only set for A records
    pub address: Option<Ipv4Addr>,
}

impl RecordValue {
    /// A record value carrying its address.
    pub fn a(address: Ipv4Addr) -> Self {
        Self {
            text: address.to_string(),
            address: Some(address),
        }
    }

    /// Any non-A record value.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            address: None,
        }
    }
}

/// Classified result of one (domain, record type) query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsQueryOutcome {
    /// Records in resolver-returned order (never empty)
    Found(Vec<RecordValue>),
    /// The domain exists but has no record of this type
    NotPresent,
    /// The domain does not exist (NXDOMAIN)
    NonExistentDomain,
    /// The resolver gave up waiting for an answer
    TimedOut,
    /// Any other resolver failure; fatal to the run
    OtherFailure(String),
}

impl DnsQueryOutcome {
    /// Builds an outcome from answer records, treating an empty answer as absence.
    pub fn from_records(records: Vec<RecordValue>) -> Self {
        if records.is_empty() {
            DnsQueryOutcome::NotPresent
        } else {
            DnsQueryOutcome::Found(records)
        }
    }

}
