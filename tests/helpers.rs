// Shared test helpers: scripted collaborators for the lookup pipeline.
//
// These stand in for the resolver, geolocation service, and WHOIS server so
// scenarios run without network access.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Mutex;

use dns_find::app::Console;
use dns_find::dns::{DnsQueryOutcome, DnsRecordType, RecordResolver, RecordValue};
use dns_find::error_handling::{GeolocationError, WhoisError};
use dns_find::geoip::{Coordinates, Geolocator};
use dns_find::whois::{WhoisRecord, WhoisSource};

/// Resolver answering from a fixed table; unscripted types are `NotPresent`.
#[derive(Default)]
pub struct ScriptedResolver {
    answers: HashMap<DnsRecordType, DnsQueryOutcome>,
    queries: Mutex<Vec<DnsRecordType>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, record_type: DnsRecordType, outcome: DnsQueryOutcome) -> Self {
        self.answers.insert(record_type, outcome);
        self
    }

    pub fn with_a(self, addresses: &[Ipv4Addr]) -> Self {
        let records = addresses.iter().copied().map(RecordValue::a).collect();
        self.with(DnsRecordType::A, DnsQueryOutcome::Found(records))
    }

    pub fn with_text(self, record_type: DnsRecordType, texts: &[&str]) -> Self {
        let records = texts.iter().map(|t| RecordValue::text(*t)).collect();
        self.with(record_type, DnsQueryOutcome::Found(records))
    }

    /// Every type answers with the same outcome.
    pub fn all(outcome: DnsQueryOutcome) -> Self {
        use strum::IntoEnumIterator;
        DnsRecordType::iter().fold(Self::new(), |resolver, record_type| {
            resolver.with(record_type, outcome.clone())
        })
    }

    pub fn queried(&self) -> Vec<DnsRecordType> {
        self.queries.lock().unwrap().clone()
    }
}

impl RecordResolver for ScriptedResolver {
    async fn query(&self, _domain: &str, record_type: DnsRecordType) -> DnsQueryOutcome {
        self.queries.lock().unwrap().push(record_type);
        self.answers
            .get(&record_type)
            .cloned()
            .unwrap_or(DnsQueryOutcome::NotPresent)
    }
}

/// Geolocator answering from a fixed table; unknown addresses fail.
#[derive(Default)]
pub struct ScriptedGeolocator {
    locations: HashMap<Ipv4Addr, Coordinates>,
    calls: Mutex<Vec<Ipv4Addr>>,
}

#[allow(dead_code)]
impl ScriptedGeolocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, ip: Ipv4Addr, longitude: f64, latitude: f64) -> Self {
        self.locations.insert(
            ip,
            Coordinates {
                longitude,
                latitude,
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<Ipv4Addr> {
        self.calls.lock().unwrap().clone()
    }
}

impl Geolocator for ScriptedGeolocator {
    async fn locate(&self, ip: Ipv4Addr) -> Result<Coordinates, GeolocationError> {
        self.calls.lock().unwrap().push(ip);
        self.locations
            .get(&ip)
            .copied()
            .ok_or_else(|| GeolocationError::Rejected {
                ip: ip.to_string(),
                message: "simulated network error".to_string(),
            })
    }
}

/// Scripted WHOIS answer.
#[allow(dead_code)]
pub enum WhoisScript {
    Record(WhoisRecord),
    NoData,
    Timeout,
}

/// WHOIS source returning one scripted answer and counting lookups.
pub struct ScriptedWhois {
    script: WhoisScript,
    lookups: Mutex<usize>,
}

#[allow(dead_code)]
impl ScriptedWhois {
    pub fn new(script: WhoisScript) -> Self {
        Self {
            script,
            lookups: Mutex::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        *self.lookups.lock().unwrap()
    }
}

impl WhoisSource for ScriptedWhois {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        *self.lookups.lock().unwrap() += 1;
        match &self.script {
            WhoisScript::Record(record) => Ok(record.clone()),
            WhoisScript::NoData => Err(WhoisError::NoData {
                domain: domain.to_string(),
            }),
            WhoisScript::Timeout => Err(WhoisError::Timeout {
                domain: domain.to_string(),
            }),
        }
    }
}

/// Sample registration used by several scenarios.
#[allow(dead_code)]
pub fn example_whois_record() -> WhoisRecord {
    WhoisRecord {
        domain_name: Some("EXAMPLE.COM".to_string()),
        registrar: Some("RESERVED-Internet Assigned Numbers Authority".to_string()),
        name_servers: vec![
            "A.IANA-SERVERS.NET".to_string(),
            "B.IANA-SERVERS.NET".to_string(),
        ],
    }
}

/// Console capturing output in memory.
#[allow(dead_code)]
pub fn capture_console() -> Console<Vec<u8>> {
    Console::new(Vec::new())
}

/// Captured console output as text.
#[allow(dead_code)]
pub fn captured(console: Console<Vec<u8>>) -> String {
    String::from_utf8(console.into_inner()).expect("console output should be UTF-8")
}
