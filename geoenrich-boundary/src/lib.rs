use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;

#[cfg(feature = "entity-conversions")]
mod conv;

/// Top level object of a `geocode/json` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address  : String,
    #[serde(default)]
    pub place_id           : String,
    #[serde(default)]
    pub geometry           : Geometry,
    #[serde(default)]
    pub address_components : Vec<AddressComponent>,
    #[serde(default)]
    pub types              : Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location_type: String,
    #[serde(default)]
    pub location: LatLng,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub lat: Option<Coordinate>,
    #[serde(default)]
    pub lng: Option<Coordinate>,
}

/// The service sends numbers, but quoted values are accepted as well.
/// Either way the textual representation is kept as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coordinate {
    /// The verbatim JSON number token.
    Number(String),
    Text(String),
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(s) | Self::Text(s) => f.write_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let token = raw.get();
        if token.starts_with('"') {
            return serde_json::from_str(token)
                .map(Self::Text)
                .map_err(de::Error::custom);
        }
        serde_json::from_str::<serde_json::Number>(token)
            .map_err(|_| de::Error::custom(format!("invalid coordinate: {token}")))?;
        Ok(Self::Number(token.to_string()))
    }
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Number(token) => RawValue::from_string(token.clone())
                .map_err(ser::Error::custom)?
                .serialize(serializer),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_numeric_coordinates() {
        let json = r#"{"lat":51.9842339,"lng":5.870231}"#;
        let loc: LatLng = serde_json::from_str(json).unwrap();
        assert_eq!(loc.lat.unwrap().to_string(), "51.9842339");
        assert_eq!(loc.lng.unwrap().to_string(), "5.870231");
    }

    #[test]
    fn deserialize_quoted_coordinates() {
        let json = r#"{"lat":"51.98","lng":"5.87"}"#;
        let loc: LatLng = serde_json::from_str(json).unwrap();
        assert_eq!(loc.lat, Some(Coordinate::Text("51.98".into())));
        assert_eq!(loc.lng.unwrap().to_string(), "5.87");
    }

    #[test]
    fn keep_number_tokens_verbatim() {
        let json = r#"{"lat":51.98423390,"lng":1E-7}"#;
        let loc: LatLng = serde_json::from_str(json).unwrap();
        assert_eq!(loc.lat.unwrap().to_string(), "51.98423390");
        assert_eq!(loc.lng.unwrap().to_string(), "1E-7");

        let json = r#"{"lat":51.984233912345678912}"#;
        let loc: LatLng = serde_json::from_str(json).unwrap();
        assert_eq!(
            loc.lat,
            Some(Coordinate::Number("51.984233912345678912".into()))
        );
        assert!(loc.lng.is_none());
    }

    #[test]
    fn null_and_invalid_coordinates() {
        let loc: LatLng = serde_json::from_str(r#"{"lat":null}"#).unwrap();
        assert!(loc.lat.is_none());
        assert!(serde_json::from_str::<LatLng>(r#"{"lat":true}"#).is_err());
        assert!(serde_json::from_str::<LatLng>(r#"{"lat":[1]}"#).is_err());
    }

    #[test]
    fn serialize_coordinates() {
        let loc = LatLng {
            lat: Some(Coordinate::Number("51.98423390".into())),
            lng: Some(Coordinate::Text("5.87".into())),
        };
        assert_eq!(
            serde_json::to_string(&loc).unwrap(),
            r#"{"lat":51.98423390,"lng":"5.87"}"#
        );
    }

    #[test]
    fn deserialize_error_response_without_results() {
        let json = r#"{"status":"REQUEST_DENIED","error_message":"The provided API key is invalid."}"#;
        let res: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.status, "REQUEST_DENIED");
        assert!(res.results.is_empty());
        assert_eq!(
            res.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }

    #[test]
    fn status_is_required() {
        assert!(serde_json::from_str::<GeocodeResponse>(r#"{"results":[]}"#).is_err());
    }
}
