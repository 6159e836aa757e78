use super::*;
use geoenrich_entities as e;

impl From<GeocodeResponse> for e::geocode::GeocodeResponse {
    fn from(from: GeocodeResponse) -> Self {
        let GeocodeResponse {
            status,
            error_message,
            results,
        } = from;
        Self {
            status,
            error_message,
            results: results.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<GeocodeResult> for e::geocode::GeocodeResult {
    fn from(from: GeocodeResult) -> Self {
        let GeocodeResult {
            formatted_address,
            place_id,
            geometry,
            address_components,
            types,
        } = from;
        Self {
            formatted_address,
            place_id,
            geometry: geometry.into(),
            address_components: address_components.into_iter().map(Into::into).collect(),
            types,
        }
    }
}

impl From<Geometry> for e::geocode::Geometry {
    fn from(from: Geometry) -> Self {
        let Geometry {
            location_type,
            location,
        } = from;
        Self {
            location_type,
            location: location.into(),
        }
    }
}

impl From<LatLng> for e::geocode::LatLng {
    fn from(from: LatLng) -> Self {
        let LatLng { lat, lng } = from;
        Self {
            lat: lat.map(|x| x.to_string()).unwrap_or_default(),
            lng: lng.map(|x| x.to_string()).unwrap_or_default(),
        }
    }
}

impl From<AddressComponent> for e::geocode::AddressComponent {
    fn from(from: AddressComponent) -> Self {
        let AddressComponent {
            long_name,
            short_name,
            types,
        } = from;
        Self {
            long_name,
            short_name,
            types,
        }
    }
}
