//! Console report rendering.
//!
//! All user-facing report text goes through [`Console`], which writes to any
//! `io::Write` sink. Diagnostics go through `log` instead.

use std::io::{self, Write};
use std::path::Path;

use colored::*;

use crate::dns::DnsRecordType;
use crate::geoip::Coordinates;
use crate::whois::WhoisRecord;

/// Startup banner.
pub const BANNER: &str = r"
░█▀▄░█▄░█░▄▀▀▒█▀░█░█▄░█░█▀▄
▒█▄▀░█▒▀█▒▄██░█▀░█░█▒▀█▒█▄▀
";

/// Placeholder printed for WHOIS fields the registry did not return.
pub const MISSING_FIELD: &str = "None";

/// Section header style: bold text on a red background.
fn header_style(title: &str) -> ColoredString {
    format!(" {title} ").bold().on_red()
}

/// Report writer.
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    /// Wraps an output sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the wrapped sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints the startup banner.
    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{BANNER}")
    }

    /// Prints a styled section header preceded by a blank line.
    pub fn section_header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", header_style(title))
    }

    /// Header of one record-type block.
    pub fn record_header(&mut self, record_type: DnsRecordType) -> io::Result<()> {
        self.section_header(&format!("{record_type} Record"))
    }

    /// One record, in presentation text.
    pub fn record_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Block body for a record type the domain does not have.
    pub fn no_records(&mut self, record_type: DnsRecordType) -> io::Result<()> {
        writeln!(self.out, "No {record_type} record found")
    }

    /// The domain does not exist (NXDOMAIN).
    pub fn domain_missing(&mut self, domain: &str) -> io::Result<()> {
        writeln!(self.out, "{domain} does not exist")
    }

    /// The resolver timed out.
    pub fn timed_out(&mut self, domain: &str) -> io::Result<()> {
        writeln!(self.out, "Timeout while resolving {domain}")
    }

    /// Geolocation of the preceding A record.
    pub fn coordinates(&mut self, coordinates: &Coordinates) -> io::Result<()> {
        writeln!(
            self.out,
            "Longitude: {}, Latitude: {}",
            coordinates.longitude, coordinates.latitude
        )
    }

    /// Location of the written KML artifact.
    pub fn artifact_saved(&mut self, path: &Path) -> io::Result<()> {
        self.section_header("KML file has been created and saved to:")?;
        writeln!(self.out, "{}", path.display())?;
        writeln!(self.out)
    }

    /// WHOIS block.
    pub fn whois(&mut self, record: &WhoisRecord) -> io::Result<()> {
        self.section_header("WHOIS Information")?;
        writeln!(
            self.out,
            "Domain Name: {}",
            record.domain_name.as_deref().unwrap_or(MISSING_FIELD)
        )?;
        writeln!(
            self.out,
            "Registrar: {}",
            record.registrar.as_deref().unwrap_or(MISSING_FIELD)
        )?;
        let name_servers = if record.name_servers.is_empty() {
            MISSING_FIELD.to_string()
        } else {
            record.name_servers.join(", ")
        };
        writeln!(self.out, "Name Servers: {name_servers}")
    }

    /// The registry has no WHOIS data for the domain.
    pub fn whois_not_found(&mut self, domain: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "No WHOIS information found for {domain}")
    }

    /// Flushes the sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
