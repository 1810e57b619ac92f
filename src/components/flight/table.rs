use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::errors::{Result, StabilityError};

/// A single named input quantity, e.g. `"V": {"value": 206.0, "unit": "m/s"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Parameter {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            unit: None,
        }
    }
}

/// Parsed key to parameter mapping as found in the cruise, coefficient and
/// geometry JSON files. Only the `value` field is consumed by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterTable {
    entries: BTreeMap<String, Parameter>,
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object of `key -> {value, unit?}` entries.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Builder style insertion of a unit-less value.
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.insert(key, Parameter::new(value));
        self
    }

    pub fn insert(&mut self, key: &str, parameter: Parameter) {
        self.entries.insert(key.to_string(), parameter);
    }

    /// Value of a required key.
    pub fn value(&self, key: &str) -> Result<f64> {
        self.entries
            .get(key)
            .map(|p| p.value)
            .ok_or_else(|| StabilityError::MissingInput(format!("required key '{}'", key)))
    }

    /// Value of an optional key.
    pub fn optional(&self, key: &str) -> Option<f64> {
        self.entries.get(key).map(|p| p.value)
    }

    pub fn get(&self, key: &str) -> Option<&Parameter> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_and_unit() {
        let table = ParameterTable::from_json_str(
            r#"{"V": {"value": 206.0, "unit": "m/s"}, "m": {"value": 6000}}"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.value("V").unwrap(), 206.0);
        assert_eq!(table.get("V").unwrap().unit.as_deref(), Some("m/s"));
        assert_eq!(table.value("m").unwrap(), 6000.0);
    }

    #[test]
    fn test_missing_key() {
        let table = ParameterTable::new().with("V", 1.0);
        match table.value("rho") {
            Err(StabilityError::MissingInput(msg)) => assert!(msg.contains("rho")),
            other => panic!("expected MissingInput, got {:?}", other),
        }
        assert_eq!(table.optional("rho"), None);
    }

    #[test]
    fn test_malformed_structure() {
        let result = ParameterTable::from_json_str(r#"{"V": 206.0}"#);
        assert!(matches!(
            result,
            Err(StabilityError::ConfigurationFormat(_))
        ));

        let result = ParameterTable::from_json_str(r#"{"V": {"unit": "m/s"}}"#);
        assert!(matches!(
            result,
            Err(StabilityError::ConfigurationFormat(_))
        ));
    }
}
