//! GeoIP data structures.

use serde::Deserialize;

/// Longitude/latitude pair returned by the geolocation service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Degrees east of Greenwich
    pub longitude: f64,
    /// Degrees north of the equator
    pub latitude: f64,
}

/// A named point destined for the KML artifact.
///
/// The label is the literal IP address text of the A record it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    /// Point name
    pub label: String,
    /// Point position
    pub coordinates: Coordinates,
}

impl GeoPoint {
    /// Creates a point named `label`.
    pub fn new(label: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            label: label.into(),
            coordinates,
        }
    }
}

/// Response from ip-api.com (restricted to the requested fields)
#[derive(Debug, Deserialize)]
pub(crate) struct IpApiResponse {
    pub(crate) status: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) lon: Option<f64>,
    pub(crate) lat: Option<f64>,
}
