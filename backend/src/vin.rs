//! VIN validation
//!
//! A VIN is accepted when it is present and exactly [`VIN_LENGTH`] characters
//! long. No check-digit or alphabet validation is performed.

use crate::error::AppError;
use std::fmt;

/// Required VIN length in characters
pub const VIN_LENGTH: usize = 17;

/// A VIN that passed length validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vin(String);

impl Vin {
    /// Validate a raw `vin` query value
    ///
    /// # Errors
    /// * `AppError::InvalidVin` if the value is absent or not 17 characters
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        match raw {
            Some(vin) if vin.chars().count() == VIN_LENGTH => Ok(Self(vin.to_string())),
            other => Err(AppError::InvalidVin(other.map(str::to_string))),
        }
    }

    /// The VIN as submitted
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
