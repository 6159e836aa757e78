use crate::gateways::geocode::TransportError;
use std::{error::Error as StdError, str::Utf8Error};
use thiserror::Error;

/// Why a row could not be geocoded.
///
/// The display text is the status message of the output row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("URL Encoding Error : {0}")]
    UrlEncoding(String),
    #[error("IO Error : {0}")]
    Io(String),
    #[error("Response Error : {0}")]
    Response(String),
    #[error("Google Error : {0}")]
    Remote(String),
}

#[derive(Debug, Error)]
#[error("Unable to encode {part}: {cause}")]
pub struct EncodingError {
    pub part: String,
    pub cause: Utf8Error,
}

impl From<EncodingError> for Error {
    fn from(err: EncodingError) -> Self {
        Self::UrlEncoding(root_cause_message(&err))
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Io(err) => Self::Io(root_cause_message(&*err)),
            err @ TransportError::Status { .. } => Self::Response(root_cause_message(&err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Response(format!("Invalid JSON payload: {}", root_cause_message(&err)))
    }
}

/// The message of the innermost error in the chain of sources.
pub fn root_cause_message(err: &(dyn StdError + 'static)) -> String {
    let mut cause = err;
    while let Some(source) = cause.source() {
        cause = source;
    }
    cause.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fmt, io};

    #[derive(Debug)]
    struct Wrapper(io::Error);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("error sending request")
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn root_cause_of_nested_error() {
        let err = Wrapper(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(root_cause_message(&err), "Connection refused");
    }

    #[test]
    fn transport_io_error() {
        let err = TransportError::io(Wrapper(io::Error::new(
            io::ErrorKind::TimedOut,
            "operation timed out",
        )));
        assert_eq!(
            Error::from(err).to_string(),
            "IO Error : operation timed out"
        );
    }

    #[test]
    fn transport_status_error() {
        let err = TransportError::Status {
            code: 503,
            message: "Service Unavailable".into(),
            url: "http://localhost/geocode/json?address=x&key=".into(),
        };
        let err = Error::from(err);
        assert!(matches!(err, Error::Response(_)));
        assert_eq!(
            err.to_string(),
            "Response Error : Error accessing http://localhost/geocode/json?address=x&key= 503 Service Unavailable"
        );
    }

    #[test]
    fn encoding_error() {
        let bytes = vec![b'Z', 0xfc, b'r', b'i', b'c', b'h'];
        let cause = std::str::from_utf8(&bytes).unwrap_err();
        let err = Error::from(EncodingError {
            part: "city".into(),
            cause,
        });
        let msg = err.to_string();
        assert!(msg.starts_with("URL Encoding Error : Unable to encode city: "));
    }
}
