//! WHOIS data structures.

/// Registration fields displayed for a domain.
///
/// Each field is reported as the registry returned it; nothing is normalized
/// beyond trimming and name server deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    /// Registered domain name as spelled by the registry (often upper case)
    pub domain_name: Option<String>,
    /// Registrar name
    pub registrar: Option<String>,
    /// Name servers in response order
    pub name_servers: Vec<String>,
}
