use std::error::Error as StdError;
use thiserror::Error;

/// Access to a remote geocoding service.
pub trait GeocodingGateway {
    /// Sends a GET request to `url` and returns the body
    /// of a successful (`200`) response.
    fn fetch(&self, url: &str) -> Result<String, TransportError>;
}

impl<G> GeocodingGateway for &G
where
    G: GeocodingGateway + ?Sized,
{
    fn fetch(&self, url: &str) -> Result<String, TransportError> {
        (**self).fetch(url)
    }
}

impl<G> GeocodingGateway for Box<G>
where
    G: GeocodingGateway + ?Sized,
{
    fn fetch(&self, url: &str) -> Result<String, TransportError> {
        (**self).fetch(url)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    /// The service answered with something other than `200 OK`.
    #[error("Error accessing {url} {code} {message}")]
    Status {
        code: u16,
        message: String,
        url: String,
    },
    /// The request could not be sent or the body could not be read.
    #[error(transparent)]
    Io(Box<dyn StdError + Send + Sync + 'static>),
}

impl TransportError {
    pub fn io<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self::Io(err.into())
    }
}
