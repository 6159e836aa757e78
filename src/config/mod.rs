use anyhow::{anyhow, Result};
use geoenrich_core::{entities::AddressPart, usecases::Endpoint};
use std::{
    collections::HashSet,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geoenrich.toml";

pub struct Config {
    pub geocoding: Geocoding,
    pub address: Address,
    pub output: Output,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        Self::try_from(raw_config)
    }

    /// Replaces the configured Google API key.
    pub fn set_api_key(&mut self, api_key: String) {
        match &mut self.geocoding.gateway {
            GeocodingGateway::Google { endpoint, .. } => {
                endpoint.api_key = api_key;
            }
            GeocodingGateway::CannedResponse { .. } => {
                log::warn!("The API key is ignored by the canned response gateway");
            }
        }
    }
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
}

pub enum GeocodingGateway {
    Google {
        endpoint: Endpoint,
        user_agent: String,
    },
    /// For local testing purposes
    CannedResponse {
        /// JSON file with the response body.
        file: Option<PathBuf>,
    },
}

pub struct Address {
    pub columns: Vec<AddressColumn>,
}

/// A CSV column that contains a part of the address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressColumn {
    pub name: String,
    /// `None` if the configured tag is not a known address part.
    pub part: Option<AddressPart>,
}

pub struct Output {
    pub extended: bool,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            gateway,
            address,
            output,
        } = from;

        let gw_name = geocoding
            .unwrap_or_default()
            .gateway
            .unwrap_or(raw::GeocodingGateway::Google);
        let gateway = gateway.unwrap_or_default();

        let gateway = match gw_name {
            raw::GeocodingGateway::Google => {
                let defaults = raw::Google::default();
                let raw::Google {
                    api_key,
                    base_url,
                    user_agent,
                } = gateway.google.unwrap_or_else(|| defaults.clone());
                let endpoint = Endpoint {
                    base_url: base_url
                        .or(defaults.base_url)
                        .ok_or_else(|| anyhow!("Missing base URL of the 'google' gateway"))?,
                    api_key: api_key.unwrap_or_default(),
                };
                let user_agent = user_agent
                    .or(defaults.user_agent)
                    .ok_or_else(|| anyhow!("Missing user agent of the 'google' gateway"))?;
                if endpoint.api_key.is_empty() {
                    log::warn!("No Google API key configured");
                }
                log::info!("Use Google geocoding gateway ({})", endpoint.base_url);
                GeocodingGateway::Google {
                    endpoint,
                    user_agent,
                }
            }
            raw::GeocodingGateway::CannedResponse => {
                let raw::CannedResponse { file } = gateway.canned_response.unwrap_or_default();
                log::info!("Use canned response geocoding gateway");
                GeocodingGateway::CannedResponse { file }
            }
        };
        let geocoding = Geocoding { gateway };

        let raw::Address { columns, parts } = address.unwrap_or_default();
        if columns.len() != parts.len() {
            return Err(anyhow!(
                "The number of address columns ({}) does not match the number of address parts ({})",
                columns.len(),
                parts.len()
            ));
        }
        let columns = columns
            .into_iter()
            .zip(parts)
            .map(|(name, tag)| {
                let part = tag.parse::<AddressPart>().ok();
                if part.is_none() {
                    log::warn!("Unknown address part '{tag}' of column '{name}'");
                }
                AddressColumn { name, part }
            })
            .collect::<Vec<_>>();
        let mut seen = HashSet::new();
        for part in columns.iter().filter_map(|c| c.part) {
            if !seen.insert(part) {
                log::warn!("Address part '{part}' is assigned to more than one column");
            }
        }
        let address = Address { columns };

        let raw::Output { extended } = output.unwrap_or_default();
        let output = Output { extended };

        Ok(Self {
            geocoding,
            address,
            output,
        })
    }
}
