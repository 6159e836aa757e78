use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString};

/// The kind of an address fragment.
///
/// The declaration order is the order in which the fragments
/// are sent to the geocoding service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum AddressPart {
    #[strum(serialize = "address1")]
    AddressLine1,
    #[strum(serialize = "address2")]
    AddressLine2,
    City,
    PostalCode,
    Country,
}

/// The address fragments of a single row.
///
/// Values are kept as raw bytes, exactly as the host delivered them.
/// They are decoded and encoded only when the request is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    known: BTreeMap<AddressPart, Vec<u8>>,
    unrecognized: Vec<Vec<u8>>,
}

impl AddressParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a part and returns the previous one, if any.
    pub fn insert(&mut self, part: AddressPart, value: impl Into<Vec<u8>>) -> Option<Vec<u8>> {
        self.known.insert(part, value.into())
    }

    /// Values that could not be assigned to a known part.
    /// They are sent after all known parts.
    pub fn push_unrecognized(&mut self, value: impl Into<Vec<u8>>) {
        self.unrecognized.push(value.into());
    }

    pub fn get(&self, part: AddressPart) -> Option<&[u8]> {
        self.known.get(&part).map(Vec::as_slice)
    }

    /// Known parts in request order.
    pub fn iter(&self) -> impl Iterator<Item = (AddressPart, &[u8])> {
        self.known.iter().map(|(part, value)| (*part, value.as_slice()))
    }

    pub fn unrecognized(&self) -> impl Iterator<Item = &[u8]> {
        self.unrecognized.iter().map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.unrecognized.is_empty()
    }
}

impl<V> FromIterator<(AddressPart, V)> for AddressParts
where
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (AddressPart, V)>>(iter: I) -> Self {
        let mut parts = Self::default();
        for (part, value) in iter {
            parts.insert(part, value);
        }
        parts
    }
}
