//! Maintenance schedule types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Service priority as labelled by the generative service
///
/// Values other than `critical`, `recommended` and `optional` are kept verbatim
/// in [`Priority::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    /// Skipping it risks damage
    Critical,
    /// Manufacturer recommended
    Recommended,
    /// Nice to have
    Optional,
    /// Any other label
    Other(String),
}

impl From<String> for Priority {
    fn from(label: String) -> Self {
        match label.as_str() {
            "critical" => Priority::Critical,
            "recommended" => Priority::Recommended,
            "optional" => Priority::Optional,
            _ => Priority::Other(label),
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Critical => "critical".to_string(),
            Priority::Recommended => "recommended".to_string(),
            Priority::Optional => "optional".to_string(),
            Priority::Other(label) => label,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Critical => "critical",
            Priority::Recommended => "recommended",
            Priority::Optional => "optional",
            Priority::Other(label) => label,
        };
        f.write_str(label)
    }
}

/// One scheduled service task, exactly as the model produced it
///
/// The item is carried as parsed JSON and serialized back unchanged: missing
/// fields, nulls, float intervals and extra keys all pass through, in their
/// original key order. The accessors read the expected fields
/// (`id`, `name`, `description`, `intervalMiles`, `intervalMonths`,
/// `priority`) without validating them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaintenanceItem(Value);

impl MaintenanceItem {
    /// Raw JSON of the item
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the raw JSON
    pub fn into_value(self) -> Value {
        self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// `id`, e.g. `oil_change`
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    /// `name`
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// `description`
    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    /// `intervalMiles` when it is a non-negative integer
    pub fn interval_miles(&self) -> Option<u64> {
        self.0.get("intervalMiles").and_then(Value::as_u64)
    }

    /// `intervalMonths` when it is a non-negative integer
    pub fn interval_months(&self) -> Option<u64> {
        self.0.get("intervalMonths").and_then(Value::as_u64)
    }

    /// `priority` when it is a string
    pub fn priority(&self) -> Option<Priority> {
        self.str_field("priority")
            .map(|label| Priority::from(label.to_string()))
    }
}

impl From<Value> for MaintenanceItem {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Top-level shape the model is asked to return
#[derive(Debug, Deserialize)]
pub struct GeneratedSchedule {
    /// Maintenance items in the order generated
    pub schedule: Vec<MaintenanceItem>,
}
