use geoenrich_core::gateways::geocode::{GeocodingGateway, TransportError};
use std::{fs, io, path::Path};

const SAMPLE_RESPONSE: &str = include_str!("canned_sample.json");

/// Answers every request with the same response body
/// without contacting any service.
///
/// For local testing purposes.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    body: String,
}

impl CannedResponse {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let body = fs::read_to_string(path)?;
        Ok(Self { body })
    }
}

impl Default for CannedResponse {
    fn default() -> Self {
        Self::new(SAMPLE_RESPONSE)
    }
}

impl GeocodingGateway for CannedResponse {
    fn fetch(&self, _: &str) -> Result<String, TransportError> {
        log::debug!("Answer with canned geocoding response");
        Ok(self.body.clone())
    }
}
