use phonefield_core::country::CountryCode;

use crate::error::ServiceError;

/// Phone-number library seen by the transformer: parsing, region lookup,
/// validation and formatting all happen behind this trait.
pub trait PhoneNumberService: Send + Sync {
    type Number: Clone;

    /// Parses free text. Without a hint only internationally written numbers parse.
    fn parse(
        &self,
        text: &str,
        region_hint: Option<&CountryCode>,
    ) -> Result<Self::Number, ServiceError>;

    fn region_of(&self, number: &Self::Number) -> Option<CountryCode>;

    fn is_valid_for_region(&self, number: &Self::Number, region: &CountryCode) -> bool;

    /// Reads the national digits of `number` again under `region`'s dialing plan.
    fn reinterpret(
        &self,
        number: &Self::Number,
        region: &CountryCode,
    ) -> Result<Self::Number, ServiceError>;

    fn format_national(&self, number: &Self::Number) -> String;

    fn format_e164(&self, number: &Self::Number) -> String;
}
