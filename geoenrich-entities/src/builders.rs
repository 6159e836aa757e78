pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, result_builder::*};

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        parts: AddressParts,
    }

    impl AddressBuild {
        pub fn address1(mut self, x: &str) -> Self {
            self.parts.insert(AddressPart::AddressLine1, x);
            self
        }
        pub fn address2(mut self, x: &str) -> Self {
            self.parts.insert(AddressPart::AddressLine2, x);
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.parts.insert(AddressPart::City, x);
            self
        }
        pub fn postal_code(mut self, x: &str) -> Self {
            self.parts.insert(AddressPart::PostalCode, x);
            self
        }
        pub fn country(mut self, x: &str) -> Self {
            self.parts.insert(AddressPart::Country, x);
            self
        }
        pub fn raw(mut self, part: AddressPart, x: &[u8]) -> Self {
            self.parts.insert(part, x);
            self
        }
        pub fn finish(self) -> AddressParts {
            self.parts
        }
    }

    impl Builder for AddressParts {
        type Build = AddressBuild;
        fn build() -> Self::Build {
            AddressBuild {
                parts: AddressParts::default(),
            }
        }
    }
}

pub mod result_builder {

    use super::*;
    use crate::geocode::*;

    #[derive(Debug)]
    pub struct GeocodeResultBuild {
        result: GeocodeResult,
    }

    impl GeocodeResultBuild {
        pub fn formatted_address(mut self, x: &str) -> Self {
            self.result.formatted_address = x.into();
            self
        }
        pub fn place_id(mut self, x: &str) -> Self {
            self.result.place_id = x.into();
            self
        }
        pub fn lat_lng(mut self, lat: &str, lng: &str) -> Self {
            self.result.geometry.location = LatLng {
                lat: lat.into(),
                lng: lng.into(),
            };
            self
        }
        pub fn location_type(mut self, x: &str) -> Self {
            self.result.geometry.location_type = x.into();
            self
        }
        pub fn finish(self) -> GeocodeResult {
            self.result
        }
    }

    impl Builder for GeocodeResult {
        type Build = GeocodeResultBuild;
        fn build() -> Self::Build {
            GeocodeResultBuild {
                result: GeocodeResult::default(),
            }
        }
    }
}
