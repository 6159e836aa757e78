mod address_query;
mod decode_response;
mod error;
mod geocode_address;
mod request_url;

#[cfg(test)]
pub mod tests;

pub use self::{
    address_query::*, decode_response::*, error::*, geocode_address::*, request_url::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::*};
}
