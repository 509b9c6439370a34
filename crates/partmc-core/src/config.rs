//! Configuration documents and consumed-key tracking.
//!
//! Entity construction parameters arrive as JSON-shaped nested mappings. A
//! [`ConfigDocument`] wraps one such mapping read-only and records every key
//! the construction path reads; [`ConfigDocument::finish`] then rejects any
//! key that was never consumed, which is how misspelled parameters surface
//! as errors instead of being silently ignored.

use crate::errors::{PartMcError, PartMcResult};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// One entity's construction parameters, parsed once and consumed read-only
/// during a single construction call.
#[derive(Debug)]
pub struct ConfigDocument {
    map: Map<String, Value>,
    consumed: RefCell<BTreeSet<String>>,
}

impl ConfigDocument {
    pub fn from_value(value: &Value) -> PartMcResult<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| PartMcError::Schema("expected a mapping".into()))?
            .clone();
        Ok(ConfigDocument {
            map,
            consumed: RefCell::new(BTreeSet::new()),
        })
    }

    pub fn from_str(text: &str) -> PartMcResult<Self> {
        Self::from_value(&serde_json::from_str(text)?)
    }

    /// Splits a `{name: {params}}` document into its name and inner
    /// parameter mapping. The outer mapping must have exactly one entry.
    pub fn single_entry(value: &Value) -> PartMcResult<(String, ConfigDocument)> {
        let outer = value
            .as_object()
            .filter(|m| m.len() == 1)
            .ok_or_else(|| {
                PartMcError::Schema(
                    "expected a single-entry mapping with the entity name as key".into(),
                )
            })?;
        let (name, params) = outer
            .iter()
            .next()
            .ok_or_else(|| PartMcError::Schema("expected a single-entry mapping".into()))?;
        if !params.is_object() {
            return Err(PartMcError::Schema(format!(
                "parameters of {name:?} must be a mapping"
            )));
        }
        Ok((name.clone(), ConfigDocument::from_value(params)?))
    }

    /// Reads a key, marking it consumed whether or not it is present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.consumed.borrow_mut().insert(key.to_string());
        self.map.get(key)
    }

    pub fn require(&self, key: &str) -> PartMcResult<&Value> {
        self.get(key)
            .ok_or_else(|| PartMcError::Schema(format!("required key {key:?} is missing")))
    }

    pub fn require_f64(&self, key: &str) -> PartMcResult<f64> {
        self.require(key)?
            .as_f64()
            .ok_or_else(|| PartMcError::Schema(format!("key {key:?} must be a number")))
    }

    pub fn require_i64(&self, key: &str) -> PartMcResult<i64> {
        self.require(key)?
            .as_i64()
            .ok_or_else(|| PartMcError::Schema(format!("key {key:?} must be an integer")))
    }

    pub fn require_str(&self, key: &str) -> PartMcResult<&str> {
        self.require(key)?
            .as_str()
            .ok_or_else(|| PartMcError::Schema(format!("key {key:?} must be a string")))
    }

    pub fn require_array(&self, key: &str) -> PartMcResult<&Vec<Value>> {
        self.require(key)?
            .as_array()
            .ok_or_else(|| PartMcError::Schema(format!("key {key:?} must be a list")))
    }

    /// Verifies every key of the document was read during construction.
    pub fn finish(&self) -> PartMcResult<()> {
        let consumed = self.consumed.borrow();
        let stray: Vec<String> = self
            .map
            .keys()
            .filter(|k| !consumed.contains(*k))
            .cloned()
            .collect();
        if stray.is_empty() {
            Ok(())
        } else {
            Err(PartMcError::UnconsumedKeys(stray))
        }
    }
}

/// Views a list of single-key mappings (`[{"SO4": ...}, {"BC": ...}]`) as
/// key/value pairs, rejecting entries of any other shape.
pub fn single_key_entries<'a>(
    list: &'a [Value],
    context: &str,
) -> PartMcResult<Vec<(&'a str, &'a Value)>> {
    let mut entries = Vec::with_capacity(list.len());
    for item in list {
        let map = item.as_object().filter(|m| m.len() == 1).ok_or_else(|| {
            PartMcError::Schema(format!(
                "{context} must be a list of single-entry mappings"
            ))
        })?;
        let (key, value) = map.iter().next().ok_or_else(|| {
            PartMcError::Schema(format!("{context} entries must not be empty"))
        })?;
        entries.push((key.as_str(), value));
    }
    Ok(entries)
}

/// Checks that keys of a single-key-mapping list are pairwise distinct.
pub fn unique_keys(entries: &[(&str, &Value)], context: &str) -> PartMcResult<()> {
    let mut seen = BTreeSet::new();
    for (key, _) in entries {
        if !seen.insert(*key) {
            return Err(PartMcError::Schema(format!(
                "{context} keys must be unique, {key:?} appears more than once"
            )));
        }
    }
    Ok(())
}

/// Converts a JSON value into a flat f64 array.
pub fn f64_array(value: &Value, context: &str) -> PartMcResult<Vec<f64>> {
    value
        .as_array()
        .ok_or_else(|| PartMcError::Schema(format!("{context} must be a list of numbers")))?
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| PartMcError::Schema(format!("{context} must contain only numbers")))
        })
        .collect()
}

/// Parses a time profile: exactly two single-key mappings, first `time`,
/// second `value_key`, with equal-length numeric arrays.
pub fn parse_profile(
    value: &Value,
    value_key: &str,
    context: &str,
) -> PartMcResult<(Vec<f64>, Vec<f64>)> {
    let list = value.as_array().filter(|l| l.len() == 2).ok_or_else(|| {
        PartMcError::Schema(format!(
            "{context} must be a list of two single-entry mappings ('time' then {value_key:?})"
        ))
    })?;
    let entries = single_key_entries(list, context)?;
    if entries[0].0 != "time" || entries[1].0 != value_key {
        return Err(PartMcError::Schema(format!(
            "{context} must contain 'time' then {value_key:?}"
        )));
    }
    let times = f64_array(entries[0].1, context)?;
    let vals = f64_array(entries[1].1, context)?;
    if times.len() != vals.len() {
        return Err(PartMcError::Schema(format!(
            "{context}: 'time' and {value_key:?} must have the same length"
        )));
    }
    Ok((times, vals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finish_flags_unread_keys() {
        let doc = ConfigDocument::from_value(&json!({"a": 1, "typo_field": 2})).unwrap();
        let _ = doc.require("a").unwrap();
        let err = doc.finish().unwrap_err();
        match err {
            PartMcError::UnconsumedKeys(keys) => assert_eq!(keys, vec!["typo_field"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_required_key_names_the_key() {
        let doc = ConfigDocument::from_value(&json!({})).unwrap();
        let err = doc.require("mass_frac").unwrap_err();
        assert!(err.to_string().contains("mass_frac"));
    }

    #[test]
    fn single_entry_rejects_multi_key_documents() {
        let err = ConfigDocument::single_entry(&json!({"a": {}, "b": {}})).unwrap_err();
        assert!(matches!(err, PartMcError::Schema(_)));
        let (name, _) = ConfigDocument::single_entry(&json!({"dust": {}})).unwrap();
        assert_eq!(name, "dust");
    }

    #[test]
    fn unique_keys_spots_duplicates() {
        let list = [json!({"SO4": 0.5}), json!({"SO4": 0.5})];
        let entries = single_key_entries(&list, "mass_frac").unwrap();
        assert!(unique_keys(&entries, "mass_frac").is_err());
    }

    #[test]
    fn profile_lengths_must_agree() {
        let good = json!([{"time": [0.0, 1.0]}, {"temp": [290.0, 300.0]}]);
        assert!(parse_profile(&good, "temp", "temp_profile").is_ok());
        let bad = json!([{"time": [0.0, 1.0]}, {"temp": [290.0]}]);
        assert!(parse_profile(&bad, "temp", "temp_profile").is_err());
    }
}
