pub mod country;
pub mod error;
pub mod field;

pub use country::{CountryChoices, CountryCode};
pub use error::DomainError;
pub use field::FieldArray;
