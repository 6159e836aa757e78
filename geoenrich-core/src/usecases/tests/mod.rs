use crate::gateways::geocode::{GeocodingGateway, TransportError};
use std::{cell::RefCell, io};

pub const ARNHEM_RESPONSE: &str = include_str!("arnhem.json");

enum Reply {
    Body(String),
    Io(String),
    Status(u16, String),
}

/// Records every requested URL and always gives the same reply.
pub struct MockGateway {
    reply: Reply,
    requested_urls: RefCell<Vec<String>>,
}

impl MockGateway {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            requested_urls: RefCell::new(vec![]),
        }
    }
    pub fn respond(body: &str) -> Self {
        Self::new(Reply::Body(body.to_string()))
    }
    pub fn fail_io(msg: &str) -> Self {
        Self::new(Reply::Io(msg.to_string()))
    }
    pub fn fail_status(code: u16, msg: &str) -> Self {
        Self::new(Reply::Status(code, msg.to_string()))
    }
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested_urls.borrow().clone()
    }
}

impl GeocodingGateway for MockGateway {
    fn fetch(&self, url: &str) -> Result<String, TransportError> {
        self.requested_urls.borrow_mut().push(url.to_string());
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Io(msg) => Err(TransportError::io(io::Error::new(
                io::ErrorKind::ConnectionReset,
                msg.clone(),
            ))),
            Reply::Status(code, msg) => Err(TransportError::Status {
                code: *code,
                message: msg.clone(),
                url: url.to_string(),
            }),
        }
    }
}
