use super::prelude::*;
use geoenrich_boundary as json;

/// Parses the body of a geocoding response.
///
/// A missing or blank body is not an error but
/// an empty response with status `OK`.
pub fn decode_geocode_response(body: Option<&str>) -> Result<GeocodeResponse> {
    let body = match body.map(str::trim) {
        None | Some("") => {
            log::debug!("Empty geocoding response");
            return Ok(GeocodeResponse::empty());
        }
        Some(body) => body,
    };
    let response: json::GeocodeResponse = serde_json::from_str(body)?;
    Ok(response.into())
}

/// Maps a decoded response to the output of a row.
///
/// Coordinates are taken from the first result even if
/// the service reported an error.
pub fn response_to_output(response: &GeocodeResponse) -> GeocodeOutput {
    let mut output = GeocodeOutput::default();
    if response.has_errored() {
        let message = response
            .error_message
            .clone()
            .unwrap_or_else(|| response.status.clone());
        log::warn!("Geocoding service returned status {}", response.status);
        output.status = GeocodeStatus::Error;
        output.status_message = Error::Remote(message).to_string();
    }
    // TODO: report the number of ignored candidates once ambiguous
    // addresses should be flagged in the output.
    if let Some(first) = response.first_result() {
        let GeocodeResult {
            formatted_address,
            place_id,
            geometry,
            ..
        } = first;
        output.longitude = geometry.location.lng.clone();
        output.latitude = geometry.location.lat.clone();
        output.details = Some(MatchDetails {
            formatted_address: formatted_address.clone(),
            place_id: place_id.clone(),
            location_type: geometry.location_type.clone(),
        });
    }
    output
}
