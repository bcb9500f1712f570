//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_ATTEMPTS;

/// Initializes the DNS resolver for record lookups.
///
/// Uses the default upstream configuration (Google DNS) with a short timeout
/// so a dead upstream is reported as a timeout instead of hanging the prompt.
/// `ndots` is 0 so the domain is never expanded with local search suffixes.
pub fn init_resolver(timeout: Duration) -> Arc<TokioAsyncResolver> {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(ResolverConfig::default(), opts))
}
