use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// ISO 3166-1 alpha-2 country code, stored upper case (e.g., "GB").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: &str) -> Result<Self, DomainError> {
        let code = code.trim();
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCountryCode(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

/// Ordered set of countries a phone number is allowed to resolve to.
///
/// Order matters: when a number's own country is not listed, candidates are
/// tried front to back and the first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryChoices(Vec<CountryCode>);

impl CountryChoices {
    /// Builds the set, dropping repeated codes but keeping first positions.
    pub fn new(codes: impl IntoIterator<Item = CountryCode>) -> Self {
        let mut unique: Vec<CountryCode> = Vec::new();
        for code in codes {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        Self(unique)
    }

    pub fn parse_codes<'a>(
        codes: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, DomainError> {
        let codes = codes
            .into_iter()
            .map(CountryCode::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(codes))
    }

    pub fn contains(&self, code: &CountryCode) -> bool {
        self.0.contains(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryCode> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parses a comma-separated list such as `"GB, JE"`. Blank entries are skipped.
impl FromStr for CountryChoices {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_codes(s.split(',').filter(|part| !part.trim().is_empty()))
    }
}

impl fmt::Display for CountryChoices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.0.iter().map(CountryCode::as_str).collect();
        write!(f, "{}", codes.join(","))
    }
}
