pub mod form;
pub mod phone;

pub use form::JsonPhoneField;
pub use phone::LibPhoneNumberService;
