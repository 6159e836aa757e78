use crate::config::{self, GeocodingGateway as GatewayConfig};
use anyhow::{Context, Result};
use geoenrich_core::{
    entities::{AddressParts, GeocodeOutput},
    gateways::geocode::GeocodingGateway,
    usecases::{self, Endpoint},
};
use geoenrich_gateways::{canned::CannedResponse, google::GoogleMaps};

/// A configured gateway together with the endpoint it talks to.
pub struct Geocoder {
    gateway: Box<dyn GeocodingGateway>,
    endpoint: Endpoint,
}

impl Geocoder {
    pub fn new<G>(gateway: G, endpoint: Endpoint) -> Self
    where
        G: GeocodingGateway + 'static,
    {
        Self {
            gateway: Box::new(gateway),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn geocode(&self, parts: &AddressParts) -> GeocodeOutput {
        usecases::geocode_address(&self.gateway, &self.endpoint, parts)
    }
}

pub fn geocoder(cfg: &config::Geocoding) -> Result<Geocoder> {
    let geocoder = match &cfg.gateway {
        GatewayConfig::Google {
            endpoint,
            user_agent,
        } => {
            let gw = GoogleMaps::new(user_agent).context("Unable to create HTTP client")?;
            Geocoder::new(gw, endpoint.clone())
        }
        GatewayConfig::CannedResponse { file } => {
            let gw = match file {
                Some(file) => CannedResponse::from_file(file).with_context(|| {
                    format!("Unable to read canned response from {}", file.display())
                })?,
                None => CannedResponse::default(),
            };
            Geocoder::new(gw, Endpoint::default())
        }
    };
    Ok(geocoder)
}
