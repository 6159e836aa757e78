use super::{address_query, decode_geocode_response, prelude::*, response_to_output, Endpoint};

/// Geocodes the address of a single row.
///
/// Failures never propagate: they are reported
/// by the status fields of the returned output.
pub fn geocode_address<G>(gateway: &G, endpoint: &Endpoint, parts: &AddressParts) -> GeocodeOutput
where
    G: GeocodingGateway + ?Sized,
{
    match try_geocode_address(gateway, endpoint, parts) {
        Ok(output) => output,
        Err(err) => {
            log::error!("Unable to geocode address: {err}");
            GeocodeOutput::error(err.to_string())
        }
    }
}

fn try_geocode_address<G>(
    gateway: &G,
    endpoint: &Endpoint,
    parts: &AddressParts,
) -> Result<GeocodeOutput>
where
    G: GeocodingGateway + ?Sized,
{
    let query = address_query(parts)?;
    let url = endpoint.request_url(&query);
    log::debug!("Geocoding request {}", endpoint.redact(&url));
    let body = gateway.fetch(&url).map_err(|err| redact(endpoint, err.into()))?;
    log::debug!("Geocoding response {body}");
    let response = decode_geocode_response(Some(&body))?;
    Ok(response_to_output(&response))
}

fn redact(endpoint: &Endpoint, err: Error) -> Error {
    match err {
        Error::Response(msg) => Error::Response(endpoint.redact(&msg)),
        Error::Io(msg) => Error::Io(endpoint.redact(&msg)),
        err => err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::*;
    use geoenrich_entities::builders::*;

    fn arnhem() -> AddressParts {
        AddressParts::build()
            .address1("Utrechtseweg 310")
            .postal_code("6812 AR")
            .city("Arnhem")
            .country("Netherlands")
            .finish()
    }

    #[test]
    fn geocode_successfully() {
        let gw = MockGateway::respond(ARNHEM_RESPONSE);
        let endpoint = Endpoint::new("my-key");
        let out = geocode_address(&gw, &endpoint, &arnhem());
        assert_eq!(
            out.to_columns(),
            ["5.870231", "51.9842339", "OK", ""].map(String::from)
        );
        assert_eq!(
            gw.requested_urls(),
            vec![
                "https://maps.googleapis.com/maps/api/geocode/json?address=Utrechtseweg+310+Arnhem+6812+AR+Netherlands&key=my-key"
            ]
        );
    }

    #[test]
    fn encoding_error_short_circuits() {
        let gw = MockGateway::respond(ARNHEM_RESPONSE);
        let parts = AddressParts::build()
            .raw(AddressPart::AddressLine1, b"\xff\xfe")
            .city("Arnhem")
            .finish();
        let out = geocode_address(&gw, &Endpoint::default(), &parts);
        assert_eq!(out.status, GeocodeStatus::Error);
        assert!(out.status_message.starts_with("URL Encoding Error : "));
        assert_eq!(out.longitude, "");
        assert!(gw.requested_urls().is_empty());
    }

    #[test]
    fn io_error() {
        let gw = MockGateway::fail_io("Connection reset by peer");
        let out = geocode_address(&gw, &Endpoint::default(), &arnhem());
        assert_eq!(
            out.to_columns(),
            [
                "".to_string(),
                "".to_string(),
                "ERROR".to_string(),
                "IO Error : Connection reset by peer".to_string()
            ]
        );
    }

    #[test]
    fn io_error_text_containing_the_key_is_kept() {
        let gw = MockGateway::fail_io("Connection reset by peer");
        let out = geocode_address(&gw, &Endpoint::new("e"), &arnhem());
        assert_eq!(out.status_message, "IO Error : Connection reset by peer");
    }

    #[test]
    fn http_status_error() {
        let gw = MockGateway::fail_status(403, "Forbidden");
        let endpoint = Endpoint::new("my-key");
        let out = geocode_address(&gw, &endpoint, &arnhem());
        assert_eq!(out.status, GeocodeStatus::Error);
        assert!(out.status_message.starts_with("Response Error : "));
        assert!(out.status_message.contains("403"));
        assert!(out.status_message.ends_with("&key=*** 403 Forbidden"));
        assert!(!out.status_message.contains("my-key"));
    }

    #[test]
    fn remote_error() {
        let gw = MockGateway::respond(
            r#"{"error_message":"The provided API key is invalid.","results":[],"status":"REQUEST_DENIED"}"#,
        );
        let out = geocode_address(&gw, &Endpoint::default(), &arnhem());
        assert_eq!(
            out.to_columns(),
            [
                "".to_string(),
                "".to_string(),
                "ERROR".to_string(),
                "Google Error : The provided API key is invalid.".to_string()
            ]
        );
    }

    #[test]
    fn empty_body() {
        let gw = MockGateway::respond("");
        let out = geocode_address(&gw, &Endpoint::default(), &arnhem());
        assert_eq!(out, GeocodeOutput::default());
    }

    #[test]
    fn empty_address_is_still_requested() {
        let gw = MockGateway::respond(r#"{"results":[],"status":"ZERO_RESULTS"}"#);
        let out = geocode_address(&gw, &Endpoint::default(), &AddressParts::default());
        assert_eq!(out.status_message, "Google Error : ZERO_RESULTS");
        assert_eq!(
            gw.requested_urls(),
            vec!["https://maps.googleapis.com/maps/api/geocode/json?address=&key="]
        );
    }

    #[test]
    fn boxed_gateway() {
        let gw: Box<dyn GeocodingGateway> = Box::new(MockGateway::respond(ARNHEM_RESPONSE));
        let out = geocode_address(&gw, &Endpoint::default(), &arnhem());
        assert!(out.is_ok());
    }
}
