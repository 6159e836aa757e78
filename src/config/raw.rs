use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = include_str!("geoenrich.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
    pub address: Option<Address>,
    pub output: Option<Output>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default()
            .geocoding
            .expect("Geocoding configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Google,
    CannedResponse,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub google: Option<Google>,
    pub canned_response: Option<CannedResponse>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Google {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
}

impl Default for Google {
    fn default() -> Self {
        Config::default()
            .gateway
            .and_then(|gw| gw.google)
            .expect("Google gateway configuration")
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CannedResponse {
    pub file: Option<PathBuf>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Address {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub parts: Vec<String>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Output {
    #[serde(default)]
    pub extended: bool,
}
