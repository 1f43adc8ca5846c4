//! Transform catalog implementation

use std::collections::HashMap;

use beamforge_core::UNKNOWN_TYPE;
use serde::Deserialize;
use serde_yaml::{Mapping, Value as YamlValue};

use crate::error::{CatalogError, Result};

/// Sentinel usage text for names the catalog does not know
pub const USAGE_NOT_FOUND: &str = "Usage not found.";

/// The bundled registry of Beam YAML transforms
const BUILTIN_REGISTRY: &str = include_str!("../registry/transforms.yaml");

/// One catalog entry: a transform type name and its usage snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Transform type name, as it appears in pipeline documents
    pub name: String,

    /// Example usage snippet (a YAML mapping with `type` and `config`)
    pub usage: String,
}

/// On-disk registry document shape
#[derive(Debug, Deserialize)]
struct RegistryFile {
    transforms: Vec<RegistryEntry>,
}

#[derive(Debug, Deserialize)]
struct RegistryEntry {
    name: String,
    usage: String,
}

/// Lookup table of known transform types
///
/// Entries keep registration order; the `UNKNOWN` sentinel is always
/// present and listed first, so a type picker built from
/// [`transform_names`](TransformCatalog::transform_names) starts with the
/// blank-node type.
#[derive(Debug, Clone)]
pub struct TransformCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl TransformCatalog {
    /// Catalog with only the `UNKNOWN` sentinel
    fn empty() -> Self {
        let mut catalog = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        catalog.insert(UNKNOWN_TYPE, USAGE_NOT_FOUND);
        catalog
    }

    /// The catalog bundled with BeamForge
    pub fn builtin() -> Self {
        Self::from_yaml_str(BUILTIN_REGISTRY).expect("bundled transform registry is valid")
    }

    /// Build a catalog from a registry YAML document
    ///
    /// The document is a mapping with a `transforms` sequence of
    /// `{name, usage}` entries. A repeated name replaces the earlier
    /// usage while keeping its position.
    pub fn from_yaml_str(registry_yaml: &str) -> Result<Self> {
        let registry: RegistryFile = serde_yaml::from_str(registry_yaml)?;
        if registry.transforms.is_empty() {
            return Err(CatalogError::EmptyRegistry);
        }

        let mut catalog = Self::empty();
        for entry in registry.transforms {
            catalog.insert(&entry.name, &entry.usage);
        }
        Ok(catalog)
    }

    /// Build a catalog from explicit (name, usage) pairs
    pub fn from_entries<I, N, U>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, U)>,
        N: Into<String>,
        U: Into<String>,
    {
        let mut catalog = Self::empty();
        for (name, usage) in entries {
            catalog.insert(&name.into(), &usage.into());
        }
        catalog
    }

    fn insert(&mut self, name: &str, usage: &str) {
        match self.index.get(name) {
            Some(&idx) => self.entries[idx].usage = usage.to_string(),
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(CatalogEntry {
                    name: name.to_string(),
                    usage: usage.to_string(),
                });
            }
        }
    }

    /// Known transform names, in registration order (`UNKNOWN` first)
    pub fn transform_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Example usage for a transform name
    ///
    /// Unknown names resolve to the [`USAGE_NOT_FOUND`] sentinel rather
    /// than failing.
    pub fn usage(&self, name: &str) -> &str {
        match self.index.get(name) {
            Some(&idx) => &self.entries[idx].usage,
            None => USAGE_NOT_FOUND,
        }
    }

    /// Default configuration scaffold for a transform name
    ///
    /// Extracted from the usage snippet's `config` mapping; empty when the
    /// name is unknown or its snippet carries no config.
    pub fn default_config(&self, name: &str) -> Mapping {
        serde_yaml::from_str::<YamlValue>(self.usage(name))
            .ok()
            .and_then(|doc| doc.get("config").and_then(YamlValue::as_mapping).cloned())
            .unwrap_or_default()
    }

    /// True when the name is a known transform type
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of entries, sentinel included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the sentinel entry is always present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TransformCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
