use phonenumber::metadata::DATABASE;
use phonenumber::{country, validator};
use phonenumber::{Mode, PhoneNumber, Type};

use phonefield_core::country::CountryCode;
use phonefield_ports::error::ServiceError;
use phonefield_ports::outbound::PhoneNumberService;

/// [`PhoneNumberService`] backed by the `phonenumber` crate's bundled metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumberService;

impl LibPhoneNumberService {
    pub fn new() -> Self {
        Self
    }

    fn country_id(code: &CountryCode) -> Option<country::Id> {
        code.as_str().parse::<country::Id>().ok()
    }

    /// Digits after the calling code, leading zeros included ("1234567890" for +44 1234 567890).
    fn national_significant_number(number: &PhoneNumber) -> String {
        let e164 = number.format().mode(Mode::E164).to_string();
        let digits = e164.trim_start_matches('+');
        let calling_code = number.country().code().to_string();
        digits
            .strip_prefix(calling_code.as_str())
            .unwrap_or(digits)
            .to_string()
    }

    /// Region for a valid number the library left without a country id, e.g.
    /// Italian landlines. First region sharing the calling code whose own
    /// metadata recognizes the national number.
    fn region_from_metadata(number: &PhoneNumber) -> Option<String> {
        if !phonenumber::is_valid(number) {
            return None;
        }
        let national = Self::national_significant_number(number);
        let calling_code = number.country().code();
        DATABASE
            .region(&calling_code)?
            .into_iter()
            .find(|id| {
                DATABASE
                    .by_id(*id)
                    .is_some_and(|meta| validator::number_type(meta, &national) != Type::Unknown)
            })
            .map(str::to_string)
    }
}

impl PhoneNumberService for LibPhoneNumberService {
    type Number = PhoneNumber;

    fn parse(
        &self,
        text: &str,
        region_hint: Option<&CountryCode>,
    ) -> Result<PhoneNumber, ServiceError> {
        let hint = region_hint.and_then(Self::country_id);
        if region_hint.is_some() && hint.is_none() {
            tracing::debug!(
                hint = region_hint.map(CountryCode::as_str),
                "region hint unknown to phone metadata, parsing without it"
            );
        }
        phonenumber::parse(hint, text).map_err(|e| {
            tracing::trace!(input = text, error = %e, "phonenumber parse failed");
            ServiceError::Unparsable(format!("{text:?}: {e}"))
        })
    }

    fn region_of(&self, number: &PhoneNumber) -> Option<CountryCode> {
        let region = match number.country().id() {
            Some(id) => format!("{id:?}"),
            None => Self::region_from_metadata(number)?,
        };
        CountryCode::new(&region).ok()
    }

    fn is_valid_for_region(&self, number: &PhoneNumber, region: &CountryCode) -> bool {
        match self.reinterpret(number, region) {
            Ok(candidate) => {
                phonenumber::is_valid(&candidate)
                    && self.region_of(&candidate).as_ref() == Some(region)
            }
            Err(_) => false,
        }
    }

    fn reinterpret(
        &self,
        number: &PhoneNumber,
        region: &CountryCode,
    ) -> Result<PhoneNumber, ServiceError> {
        let id = Self::country_id(region)
            .ok_or_else(|| ServiceError::UnknownRegion(region.to_string()))?;
        let national = Self::national_significant_number(number);
        phonenumber::parse(Some(id), &national)
            .map_err(|e| ServiceError::Unparsable(format!("{national:?} under {region}: {e}")))
    }

    fn format_national(&self, number: &PhoneNumber) -> String {
        number.format().mode(Mode::National).to_string()
    }

    fn format_e164(&self, number: &PhoneNumber) -> String {
        number.format().mode(Mode::E164).to_string()
    }
}
