//! WHOIS domain registration lookup.
//!
//! This module provides:
//! - [`WhoisSource`]: the typed lookup interface, with "no data" as a distinct error
//! - [`WhoisServiceSource`]: the implementation backed by the `whois-service` crate
//! - Projection of its responses onto the displayed [`WhoisRecord`] fields

mod client;
mod parse;
mod types;

pub use client::{WhoisServiceSource, WhoisSource};
pub use types::WhoisRecord;
