use geoenrich_core::gateways::geocode::{GeocodingGateway, TransportError};
use reqwest::{blocking::Client, StatusCode};

/// Some requests are rejected without a browser-like user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// The Google Maps Geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleMaps {
    client: Client,
}

impl GoogleMaps {
    pub fn new(user_agent: &str) -> reqwest::Result<Self> {
        // Every request uses its own connection.
        let client = Client::builder()
            .user_agent(user_agent)
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self { client })
    }
}

impl GeocodingGateway for GoogleMaps {
    fn fetch(&self, url: &str) -> Result<String, TransportError> {
        let response = self.client.get(url).send().map_err(TransportError::io)?;
        let status = response.status();
        log::debug!("Response code: {status}");
        if status != StatusCode::OK {
            return Err(TransportError::Status {
                code: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
                url: url.to_string(),
            });
        }
        response.text().map_err(TransportError::io)
    }
}
