//! Declarative key/shape checks over a [`ConfigDocument`].
//!
//! A [`Schema`] covers the per-key part of validation (presence and JSON
//! shape); cross-field rules stay in the entity modules. Validating a key
//! marks it consumed, so [`ConfigDocument::finish`] only flags keys the
//! schema never named.

use crate::config::ConfigDocument;
use crate::errors::{PartMcError, PartMcResult};
use serde_json::Value;

/// Expected JSON shape of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Integer,
    String,
    Array,
    Object,
    Bool,
}

impl ValueKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            ValueKind::Number => value.is_f64() || value.is_i64() || value.is_u64(),
            ValueKind::Integer => value.is_i64() || value.is_u64(),
            ValueKind::String => value.is_string(),
            ValueKind::Array => value.is_array(),
            ValueKind::Object => value.is_object(),
            ValueKind::Bool => value.is_boolean(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            ValueKind::Number => "a number",
            ValueKind::Integer => "an integer",
            ValueKind::String => "a string",
            ValueKind::Array => "a list",
            ValueKind::Object => "a mapping",
            ValueKind::Bool => "a boolean",
        }
    }

    pub fn check(self, key: &str, value: &Value) -> PartMcResult<()> {
        if self.matches(value) {
            Ok(())
        } else {
            Err(PartMcError::Schema(format!(
                "key {key:?} must be {}",
                self.label()
            )))
        }
    }
}

/// Required and optional keys of one entity's configuration document.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub required: &'static [(&'static str, ValueKind)],
    pub optional: &'static [(&'static str, ValueKind)],
}

impl Schema {
    /// Checks presence and shape of every declared key. Runs before any
    /// foreign call on the construction path.
    pub fn validate(&self, doc: &ConfigDocument) -> PartMcResult<()> {
        for (key, kind) in self.required {
            kind.check(key, doc.require(key)?)?;
        }
        for (key, kind) in self.optional {
            if let Some(value) = doc.get(key) {
                kind.check(key, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: Schema = Schema {
        required: &[("t_max", ValueKind::Number)],
        optional: &[("output_prefix", ValueKind::String)],
    };

    #[test]
    fn required_key_must_be_present_and_shaped() {
        let doc = ConfigDocument::from_value(&json!({"t_max": 3600.0})).unwrap();
        SCHEMA.validate(&doc).unwrap();

        let doc = ConfigDocument::from_value(&json!({})).unwrap();
        assert!(SCHEMA.validate(&doc).is_err());

        let doc = ConfigDocument::from_value(&json!({"t_max": "soon"})).unwrap();
        assert!(SCHEMA.validate(&doc).is_err());
    }

    #[test]
    fn optional_key_checked_only_when_present() {
        let doc =
            ConfigDocument::from_value(&json!({"t_max": 1.0, "output_prefix": 7})).unwrap();
        assert!(SCHEMA.validate(&doc).is_err());
    }

    #[test]
    fn validated_keys_count_as_consumed() {
        let doc =
            ConfigDocument::from_value(&json!({"t_max": 1.0, "output_prefix": "out"})).unwrap();
        SCHEMA.validate(&doc).unwrap();
        doc.finish().unwrap();
    }
}
