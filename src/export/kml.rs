//! KML export.
//!
//! Serializes a [`PointCollection`] as a KML 2.2 document with one `Placemark`
//! per point, readable by Google Earth and most GIS tools.

use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};

use super::types::PointCollection;
use crate::config::{ARTIFACT_EXTENSION, ARTIFACT_PREFIX};
use crate::error_handling::LookupError;
use crate::geoip::GeoPoint;

const KML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
    <Document>
"#;

const KML_FOOTER: &str = r#"    </Document>
</kml>
"#;

/// Artifact file name for `domain`: `dnsFIND-{domain}.kml`.
pub fn artifact_file_name(domain: &str) -> String {
    format!("{ARTIFACT_PREFIX}-{domain}.{ARTIFACT_EXTENSION}")
}

/// Renders the collection as a KML document.
pub fn to_kml(points: &PointCollection) -> String {
    let mut kml = String::from(KML_HEADER);
    for point in points {
        // Writing to a String cannot fail
        let _ = write_placemark(&mut kml, point);
    }
    kml.push_str(KML_FOOTER);
    kml
}

fn write_placemark(kml: &mut String, point: &GeoPoint) -> fmt::Result {
    writeln!(kml, "        <Placemark>")?;
    writeln!(kml, "            <name>{}</name>", escape_xml(&point.label))?;
    writeln!(kml, "            <Point>")?;
    writeln!(
        kml,
        "                <coordinates>{},{},0</coordinates>",
        point.coordinates.longitude, point.coordinates.latitude
    )?;
    writeln!(kml, "            </Point>")?;
    writeln!(kml, "        </Placemark>")
}

/// Writes the collection to `dir/dnsFIND-{domain}.kml`, replacing any existing file.
///
/// # Returns
///
/// The absolute path of the written artifact.
///
/// # Errors
///
/// Returns `LookupError::Artifact` if the file cannot be written.
pub fn save_kml(points: &PointCollection, dir: &Path, domain: &str) -> Result<PathBuf, LookupError> {
    let path = dir.join(artifact_file_name(domain));
    let artifact_error = |source| LookupError::Artifact {
        path: path.clone(),
        source,
    };

    std::fs::write(&path, to_kml(points)).map_err(artifact_error)?;
    let absolute = std::fs::canonicalize(&path).map_err(artifact_error)?;
    log::info!(
        "Saved {} point(s) to {}",
        points.len(),
        absolute.display()
    );
    Ok(absolute)
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
