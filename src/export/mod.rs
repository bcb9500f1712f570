//! Geo-point artifact export.
//!
//! Points collected from geolocated A records are accumulated in a
//! [`PointCollection`] and flushed once per run to `dnsFIND-{domain}.kml`.

mod kml;
mod types;

pub use kml::{artifact_file_name, save_kml, to_kml};
pub use types::PointCollection;
