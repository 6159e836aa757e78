pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use geoenrich_entities::{address::*, geocode::*, output::*};
}
