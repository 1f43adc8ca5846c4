//! YAML reading helpers
//!
//! Thin utilities over `serde_yaml::Value` shared by the pipeline parser.

use crate::error::Result;
use serde_yaml::{Mapping, Sequence, Value as YamlValue};

/// YAML reader utilities
pub struct YamlReader;

impl YamlReader {
    /// Parse a YAML string into a YAML value
    pub fn parse(yaml_str: &str) -> Result<YamlValue> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Read an optional string field from a YAML object
    pub fn optional_str<'a>(obj: &'a YamlValue, field: &str) -> Option<&'a str> {
        obj.get(field).and_then(YamlValue::as_str)
    }

    /// Read an optional sequence field from a YAML object
    pub fn optional_sequence<'a>(obj: &'a YamlValue, field: &str) -> Option<&'a Sequence> {
        obj.get(field).and_then(YamlValue::as_sequence)
    }

    /// Read an optional mapping field from a YAML object
    pub fn optional_mapping<'a>(obj: &'a YamlValue, field: &str) -> Option<&'a Mapping> {
        obj.get(field).and_then(YamlValue::as_mapping)
    }
}
