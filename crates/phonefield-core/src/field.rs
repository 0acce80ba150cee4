use serde::{Deserialize, Serialize};

/// View-side value of a phone field: the country selector and the text input.
///
/// Both entries are always present; an unfilled field is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldArray {
    pub country: String,
    pub number: String,
}

impl FieldArray {
    pub fn new(country: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            number: number.into(),
        }
    }

    /// The pair shown for a field with no phone number.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when nothing was typed into the number input.
    pub fn has_no_number(&self) -> bool {
        self.number.trim().is_empty()
    }
}
