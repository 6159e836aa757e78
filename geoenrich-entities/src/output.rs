use strum::{Display, EnumString};

/// Tag that identifies the provider in every output column name.
pub const PROVIDER_TAG: &str = "(Google GeoCode)";

pub const LONGITUDE_COLUMN: &str = "Longitude";
pub const LATITUDE_COLUMN: &str = "Latitude";
pub const STATUS_COLUMN: &str = "Status";
pub const STATUS_MESSAGE_COLUMN: &str = "Status Message";
pub const FORMATTED_ADDRESS_COLUMN: &str = "Formatted Address";
pub const PLACE_ID_COLUMN: &str = "Place ID";
pub const LOCATION_TYPE_COLUMN: &str = "Location Type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum GeocodeStatus {
    #[default]
    Ok,
    Error,
}

/// Additional information about the first match.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchDetails {
    pub formatted_address : String,
    pub place_id          : String,
    pub location_type     : String,
}

/// The outcome of geocoding one row.
///
/// A row is never dropped: failures are reported through
/// [`GeocodeOutput::status`] and [`GeocodeOutput::status_message`].
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodeOutput {
    pub longitude      : String,
    pub latitude       : String,
    pub status         : GeocodeStatus,
    pub status_message : String,
    pub details        : Option<MatchDetails>,
}

impl GeocodeOutput {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: GeocodeStatus::Error,
            status_message: message.into(),
            ..Default::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == GeocodeStatus::Ok
    }

    /// Longitude, latitude, status and status message.
    pub fn to_columns(&self) -> [String; 4] {
        [
            self.longitude.clone(),
            self.latitude.clone(),
            self.status.to_string(),
            self.status_message.clone(),
        ]
    }

    /// Formatted address, place ID and location type
    /// (empty if nothing matched).
    pub fn to_detail_columns(&self) -> [String; 3] {
        let MatchDetails {
            formatted_address,
            place_id,
            location_type,
        } = self.details.clone().unwrap_or_default();
        [formatted_address, place_id, location_type]
    }
}

pub fn column_name(name: &str) -> String {
    format!("{name} {PROVIDER_TAG}")
}

pub fn column_names() -> [String; 4] {
    [
        LONGITUDE_COLUMN,
        LATITUDE_COLUMN,
        STATUS_COLUMN,
        STATUS_MESSAGE_COLUMN,
    ]
    .map(column_name)
}

pub fn detail_column_names() -> [String; 3] {
    [
        FORMATTED_ADDRESS_COLUMN,
        PLACE_ID_COLUMN,
        LOCATION_TYPE_COLUMN,
    ]
    .map(column_name)
}
