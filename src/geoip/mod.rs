//! IP geolocation.
//!
//! Resolved A-record addresses are located through an external JSON service
//! (ip-api.com by default) and turned into [`GeoPoint`]s for the KML export.

mod lookup;
mod types;

// Re-export public API
pub use lookup::{Geolocator, IpApiGeolocator};
pub use types::{Coordinates, GeoPoint};
