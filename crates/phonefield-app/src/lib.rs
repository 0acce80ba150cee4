pub mod field_transformer;

pub use field_transformer::PhoneNumberFieldTransformer;
