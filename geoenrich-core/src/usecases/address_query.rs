use super::{prelude::*, EncodingError};
use itertools::Itertools;
use std::str;
use url::form_urlencoded;

const PART_SEPARATOR: &str = "+";

/// Builds the `address` query value from the parts of a row.
///
/// Known parts are sent in their fixed order followed by
/// the unrecognized ones. Blank values are omitted.
pub fn address_query(parts: &AddressParts) -> std::result::Result<String, EncodingError> {
    let known = parts
        .iter()
        .map(|(part, value)| encode_value(value).map_err(|cause| encoding_error(part, cause)));
    let unrecognized = parts
        .unrecognized()
        .map(|value| encode_value(value).map_err(|cause| encoding_error("unrecognized part", cause)));
    let encoded = known
        .chain(unrecognized)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(encoded.into_iter().flatten().join(PART_SEPARATOR))
}

fn encoding_error(part: impl ToString, cause: str::Utf8Error) -> EncodingError {
    EncodingError {
        part: part.to_string(),
        cause,
    }
}

fn encode_value(raw: &[u8]) -> std::result::Result<Option<String>, str::Utf8Error> {
    let value = str::from_utf8(raw)?.trim();
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(form_urlencoded::byte_serialize(value.as_bytes()).collect()))
}
