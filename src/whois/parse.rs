//! Conversion of whois-service responses into [`WhoisRecord`].

use whois_service::WhoisResponse;

use super::types::WhoisRecord;
use crate::error_handling::WhoisError;

/// Library error texts meaning nothing is registered under the name.
const NO_DATA_ERRORS: &[&str] = &["not found", "no match", "no data", "no entries"];

/// Converts a whois-service response to the displayed fields.
///
/// A response without parsed data, or whose parsed data carries none of the
/// displayed fields, is `WhoisError::NoData`.
pub(crate) fn convert_response(
    domain: &str,
    response: &WhoisResponse,
) -> Result<WhoisRecord, WhoisError> {
    let parsed = response
        .parsed_data
        .as_ref()
        .ok_or_else(|| no_data(domain))?;

    record_from_parts(
        domain,
        &response.raw_data,
        parsed.registrar.clone(),
        &parsed.name_servers,
    )
}

/// Builds the record from the pieces of a response.
pub(crate) fn record_from_parts(
    domain: &str,
    raw: &str,
    registrar: Option<String>,
    name_servers: &[String],
) -> Result<WhoisRecord, WhoisError> {
    let mut servers: Vec<String> = Vec::with_capacity(name_servers.len());
    for server in name_servers.iter().map(|s| s.trim()) {
        if !server.is_empty() && !servers.iter().any(|s| s.eq_ignore_ascii_case(server)) {
            servers.push(server.to_string());
        }
    }

    let record = WhoisRecord {
        domain_name: registered_domain_name(raw),
        registrar: registrar
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty()),
        name_servers: servers,
    };

    if record.registrar.is_none() && record.name_servers.is_empty() {
        // A bare name without registration details is not a registration
        return Err(no_data(domain));
    }
    Ok(record)
}

/// Domain name as spelled by the registry.
///
/// RDAP answers carry it as `ldhName`; port-43 answers as a `Domain Name:` or
/// `domain:` line.
fn registered_domain_name(raw: &str) -> Option<String> {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(raw) {
        return json
            .get("ldhName")
            .and_then(|name| name.as_str())
            .map(str::to_string);
    }

    raw.lines().find_map(|line| {
        let (key, value) = line.trim().split_once(':')?;
        let key = key.trim();
        let value = value.trim();
        let is_name_key =
            key.eq_ignore_ascii_case("domain name") || key.eq_ignore_ascii_case("domain");
        (is_name_key && !value.is_empty()).then(|| value.to_string())
    })
}

/// Maps a whois-service lookup error.
pub(crate) fn classify_lookup_error(domain: &str, message: &str) -> WhoisError {
    let lower = message.to_lowercase();
    if NO_DATA_ERRORS.iter().any(|marker| lower.contains(marker)) {
        log::debug!("WHOIS has no data for {domain}: {message}");
        no_data(domain)
    } else {
        log::warn!("WHOIS lookup failed for {}: {}", domain, message);
        WhoisError::Lookup {
            domain: domain.to_string(),
            message: message.to_string(),
        }
    }
}

fn no_data(domain: &str) -> WhoisError {
    WhoisError::NoData {
        domain: domain.to_string(),
    }
}
