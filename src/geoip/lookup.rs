//! IP address geolocation over HTTP.
//!
//! One request per address, no retries and no rate limiting.

use std::future::Future;
use std::net::Ipv4Addr;
use std::sync::Arc;

use super::types::{Coordinates, IpApiResponse};
use crate::config::GEOLOCATION_FIELDS;
use crate::error_handling::GeolocationError;

/// Resolves an IPv4 address to coordinates.
pub trait Geolocator {
    /// Locates `ip`. Any failure is fatal to the run calling it.
    fn locate(
        &self,
        ip: Ipv4Addr,
    ) -> impl Future<Output = Result<Coordinates, GeolocationError>> + Send;
}

impl<T: Geolocator + Sync> Geolocator for &T {
    fn locate(
        &self,
        ip: Ipv4Addr,
    ) -> impl Future<Output = Result<Coordinates, GeolocationError>> + Send {
        (**self).locate(ip)
    }
}

/// Geolocator backed by the ip-api.com JSON API.
#[derive(Clone)]
pub struct IpApiGeolocator {
    client: Arc<reqwest::Client>,
    endpoint: String,
}

impl IpApiGeolocator {
    /// Creates a geolocator querying `{endpoint}/{ip}`.
    pub fn new(client: Arc<reqwest::Client>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, ip: Ipv4Addr) -> String {
        format!("{}/{}?fields={}", self.endpoint, ip, GEOLOCATION_FIELDS)
    }
}

impl Geolocator for IpApiGeolocator {
    async fn locate(&self, ip: Ipv4Addr) -> Result<Coordinates, GeolocationError> {
        let url = self.url_for(ip);
        log::debug!("Geolocating {ip} via {url}");

        let request_error = |source| GeolocationError::Request {
            ip: ip.to_string(),
            source,
        };
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(request_error)?;
        let body: IpApiResponse = response.json().await.map_err(request_error)?;

        coordinates_from_response(ip, body)
    }
}

/// Validates a decoded response and extracts its coordinates.
pub(crate) fn coordinates_from_response(
    ip: Ipv4Addr,
    body: IpApiResponse,
) -> Result<Coordinates, GeolocationError> {
    if body.status.as_deref() == Some("fail") {
        return Err(GeolocationError::Rejected {
            ip: ip.to_string(),
            message: body.message.unwrap_or_else(|| "unknown reason".to_string()),
        });
    }

    match (body.lon, body.lat) {
        (Some(longitude), Some(latitude)) => Ok(Coordinates {
            longitude,
            latitude,
        }),
        _ => Err(GeolocationError::MissingCoordinates { ip: ip.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn geolocator_for(server: &Server) -> IpApiGeolocator {
        let client = Arc::new(reqwest::Client::new());
        IpApiGeolocator::new(client, server.url("/json").to_string())
    }

    #[test]
    fn test_url_includes_ip_and_fields() {
        let geolocator = IpApiGeolocator::new(
            Arc::new(reqwest::Client::new()),
            "http://ip-api.com/json/",
        );
        assert_eq!(
            geolocator.url_for(Ipv4Addr::new(93, 184, 216, 34)),
            "http://ip-api.com/json/93.184.216.34?fields=status,message,lon,lat"
        );
    }

    #[tokio::test]
    async fn test_locate_success() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/93.184.216.34"))
                .respond_with(
                    status_code(200)
                        .append_header("Content-Type", "application/json")
                        .body(r#"{"status":"success","lon":-97.8,"lat":37.75}"#),
                ),
        );

        let coordinates = geolocator_for(&server)
            .locate(Ipv4Addr::new(93, 184, 216, 34))
            .await
            .expect("lookup should succeed");
        assert_eq!(coordinates.longitude, -97.8);
        assert_eq!(coordinates.latitude, 37.75);
    }

    #[tokio::test]
    async fn test_locate_rejected_by_service() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/10.0.0.1")).respond_with(
                status_code(200).body(r#"{"status":"fail","message":"private range"}"#),
            ),
        );

        let err = geolocator_for(&server)
            .locate(Ipv4Addr::new(10, 0, 0, 1))
            .await
            .unwrap_err();
        match err {
            GeolocationError::Rejected { ip, message } => {
                assert_eq!(ip, "10.0.0.1");
                assert_eq!(message, "private range");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_locate_http_error_status() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/192.0.2.1"))
                .respond_with(status_code(503)),
        );

        let err = geolocator_for(&server)
            .locate(Ipv4Addr::new(192, 0, 2, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, GeolocationError::Request { .. }));
    }

    #[tokio::test]
    async fn test_locate_undecodable_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/192.0.2.2"))
                .respond_with(status_code(200).body("<html>not json</html>")),
        );

        let err = geolocator_for(&server)
            .locate(Ipv4Addr::new(192, 0, 2, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, GeolocationError::Request { .. }));
    }

    #[test]
    fn test_missing_latitude_is_an_error() {
        let body = IpApiResponse {
            status: None,
            message: None,
            lon: Some(1.0),
            lat: None,
        };
        let err = coordinates_from_response(Ipv4Addr::new(192, 0, 2, 3), body).unwrap_err();
        assert!(matches!(err, GeolocationError::MissingCoordinates { .. }));
    }

    #[test]
    fn test_response_without_status_is_accepted() {
        // fields=lon,lat responses omit the status field entirely
        let body = IpApiResponse {
            status: None,
            message: None,
            lon: Some(2.35),
            lat: Some(48.85),
        };
        let coordinates = coordinates_from_response(Ipv4Addr::new(192, 0, 2, 4), body).unwrap();
        assert_eq!(
            coordinates,
            Coordinates {
                longitude: 2.35,
                latitude: 48.85
            }
        );
    }
}
