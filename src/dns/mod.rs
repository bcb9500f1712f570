//! DNS resolution and record querying.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - The record types queried per domain (A, CNAME, MX, TXT, SOA)
//! - A typed query interface ([`RecordResolver`]) returning classified outcomes
//! - The production implementation over the system-independent default config

mod records;
mod types;

// Re-export public API
pub use records::{HickoryRecordResolver, RecordResolver};
pub use types::{DnsQueryOutcome, DnsRecordType, RecordValue};
