//! Decoded field set
//!
//! vPIC answers with a flat `Results` array of `{"Variable": ..., "Value": ...}`
//! records. Records are read leniently: anything that is not an object with a
//! string `Variable` is skipped, and a missing, null, zero or `false` `Value`
//! reads as `""`.

use serde_json::Value;

/// Variable names read from the decode result
pub mod variables {
    /// Model year, e.g. "2020"
    pub const MODEL_YEAR: &str = "Model Year";
    /// Manufacturer brand, e.g. "HONDA"
    pub const MAKE: &str = "Make";
    /// Model name
    pub const MODEL: &str = "Model";
    /// Trim level
    pub const TRIM: &str = "Trim";
    /// Engine displacement in liters
    pub const DISPLACEMENT_L: &str = "Displacement (L)";
    /// Cylinder count
    pub const CYLINDERS: &str = "Engine Number of Cylinders";
    /// Drive type, e.g. "FWD/Front-Wheel Drive"
    pub const DRIVE_TYPE: &str = "Drive Type";
    /// Body class, e.g. "Sedan/Saloon"
    pub const BODY_CLASS: &str = "Body Class";
}

/// One `{Variable, Value}` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedField {
    /// Variable name, matched exactly
    pub variable: String,
    /// Value text; empty when the service reported null
    pub value: String,
}

/// Ordered decode records with first-match lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedFieldSet {
    fields: Vec<DecodedField>,
}

impl DecodedFieldSet {
    /// Build from raw `Results` entries, dropping malformed ones
    pub fn from_results(results: &[Value]) -> Self {
        let fields = results
            .iter()
            .filter_map(|record| {
                let object = record.as_object()?;
                let variable = object.get("Variable")?.as_str()?;
                Some(DecodedField {
                    variable: variable.to_string(),
                    value: object.get("Value").map(value_text).unwrap_or_default(),
                })
            })
            .collect();
        Self { fields }
    }

    /// Value of the first record named `variable`, or `""` when there is none
    pub fn get(&self, variable: &str) -> &str {
        self.fields
            .iter()
            .find(|field| field.variable == variable)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    /// Number of well-formed records
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no well-formed records were returned
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<DecodedField> for DecodedFieldSet {
    fn from_iter<I: IntoIterator<Item = DecodedField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Falsy scalars (`0`, `false`, `""`, null) read as `""`
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_match_wins() {
        let results = vec![
            json!({"Variable": "Make", "Value": "HONDA"}),
            json!({"Variable": "Make", "Value": "ACURA"}),
        ];
        let fields = DecodedFieldSet::from_results(&results);
        assert_eq!(fields.get(variables::MAKE), "HONDA");
    }

    #[test]
    fn test_missing_and_null_read_as_empty() {
        let results = vec![
            json!({"Variable": "Trim", "Value": null}),
            json!({"Variable": "Model"}),
        ];
        let fields = DecodedFieldSet::from_results(&results);
        assert_eq!(fields.get(variables::TRIM), "");
        assert_eq!(fields.get(variables::MODEL), "");
        assert_eq!(fields.get(variables::BODY_CLASS), "");
    }

    #[test]
    fn test_malformed_records_skipped() {
        let results = vec![
            json!("Make"),
            json!(42),
            json!({"Value": "HONDA"}),
            json!({"Variable": 7, "Value": "HONDA"}),
            json!({"Variable": "Model Year", "Value": "2020"}),
        ];
        let fields = DecodedFieldSet::from_results(&results);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get(variables::MAKE), "");
        assert_eq!(fields.get(variables::MODEL_YEAR), "2020");
    }

    #[test]
    fn test_variable_match_is_exact() {
        let results = vec![json!({"Variable": "make", "Value": "HONDA"})];
        let fields = DecodedFieldSet::from_results(&results);
        assert_eq!(fields.get(variables::MAKE), "");
    }

    #[test]
    fn test_numeric_value_rendered_as_text() {
        let results = vec![json!({"Variable": "Engine Number of Cylinders", "Value": 4})];
        let fields = DecodedFieldSet::from_results(&results);
        assert_eq!(fields.get(variables::CYLINDERS), "4");
    }

    #[test]
    fn test_falsy_values_read_as_empty() {
        let results = vec![
            json!({"Variable": "Engine Number of Cylinders", "Value": 0}),
            json!({"Variable": "Displacement (L)", "Value": 0.0}),
            json!({"Variable": "Trim", "Value": false}),
            json!({"Variable": "Model", "Value": true}),
            json!({"Variable": "Model Year", "Value": "0"}),
        ];
        let fields = DecodedFieldSet::from_results(&results);
        assert_eq!(fields.get(variables::CYLINDERS), "");
        assert_eq!(fields.get(variables::DISPLACEMENT_L), "");
        assert_eq!(fields.get(variables::TRIM), "");
        assert_eq!(fields.get(variables::MODEL), "true");
        // Only non-string zeros are falsy
        assert_eq!(fields.get(variables::MODEL_YEAR), "0");
    }
}
