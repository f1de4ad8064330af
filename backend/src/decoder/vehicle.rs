//! Vehicle attributes derived from a decode result

use crate::decoder::fields::{variables, DecodedFieldSet};
use serde::{Deserialize, Serialize};

/// Attributes of a decoded vehicle
///
/// Every field is the raw vPIC text, empty when the service had no value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAttributes {
    /// Model year
    pub year: String,
    /// Make
    pub make: String,
    /// Model
    pub model: String,
    /// Trim level
    pub trim: String,
    /// Engine displacement in liters
    pub engine: String,
    /// Cylinder count
    pub cylinders: String,
    /// Drive type
    pub drive_type: String,
    /// Body class
    pub body_class: String,
}

impl VehicleAttributes {
    /// Extract the eight attributes from a decoded field set
    pub fn from_fields(fields: &DecodedFieldSet) -> Self {
        Self {
            year: fields.get(variables::MODEL_YEAR).to_string(),
            make: fields.get(variables::MAKE).to_string(),
            model: fields.get(variables::MODEL).to_string(),
            trim: fields.get(variables::TRIM).to_string(),
            engine: fields.get(variables::DISPLACEMENT_L).to_string(),
            cylinders: fields.get(variables::CYLINDERS).to_string(),
            drive_type: fields.get(variables::DRIVE_TYPE).to_string(),
            body_class: fields.get(variables::BODY_CLASS).to_string(),
        }
    }

    /// Whether the decode produced a usable make and model year
    ///
    /// vPIC sometimes reports a missing make as the literal string `"null"`
    /// rather than JSON null, so both spellings count as missing.
    pub fn is_decoded(&self) -> bool {
        !self.make.is_empty() && self.make != "null" && !self.year.is_empty()
    }

    /// Human-readable description, e.g. `2020 Honda Accord EX-L, 1.5L 4-cylinder`
    pub fn describe(&self) -> String {
        let mut description = format!("{} {} {}", self.year, self.make, self.model);
        if !self.trim.is_empty() {
            description.push(' ');
            description.push_str(&self.trim);
        }
        if !self.engine.is_empty() {
            description.push_str(&format!(", {}L", self.engine));
        }
        if !self.cylinders.is_empty() {
            description.push_str(&format!(" {}-cylinder", self.cylinders));
        }
        description
    }
}
