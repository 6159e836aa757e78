/// The decoded answer of a geocoding service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeResponse {
    /// Status reported by the provider itself,
    /// independent of the HTTP status code.
    pub status: String,
    pub error_message: Option<String>,
    pub results: Vec<GeocodeResult>,
}

pub const REMOTE_STATUS_OK: &str = "OK";

impl GeocodeResponse {
    /// The empty response that is assumed if the
    /// service did not send anything at all.
    pub fn empty() -> Self {
        Self {
            status: REMOTE_STATUS_OK.to_string(),
            error_message: None,
            results: vec![],
        }
    }

    pub fn has_errored(&self) -> bool {
        !self.status.eq_ignore_ascii_case(REMOTE_STATUS_OK)
    }

    pub fn has_results(&self) -> bool {
        !self.has_errored() && !self.results.is_empty()
    }

    /// Only the first candidate is ever used.
    pub fn first_result(&self) -> Option<&GeocodeResult> {
        self.results.first()
    }
}

impl Default for GeocodeResponse {
    fn default() -> Self {
        Self::empty()
    }
}

/// A single candidate match.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodeResult {
    pub formatted_address  : String,
    pub place_id           : String,
    pub geometry           : Geometry,
    pub address_components : Vec<AddressComponent>,
    pub types              : Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Geometry {
    /// e.g. `ROOFTOP` or `APPROXIMATE`
    pub location_type: String,
    pub location: LatLng,
}

/// Coordinates in the textual form the provider sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatLng {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    pub types: Vec<String>,
}
