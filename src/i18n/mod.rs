//! Localized label lookup for view records.
//!
//! A catalog maps a domain (e.g., "swap") to flat `key -> label` entries.
//! The built-in English catalog covers every key this crate uses;
//! alternative catalogs load from YAML files:
//!
//! ```yaml
//! swap:
//!   status.open: Open
//!   status.cancelled: Cancelled
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Catalog loading error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Translator resolves human-readable labels by domain and key.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Translator {
    domains: HashMap<String, HashMap<String, String>>,
}

impl Translator {
    /// Load a catalog from a YAML file at the given path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a catalog from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let translator = serde_yaml::from_str(content)?;
        Ok(translator)
    }

    /// Returns a lookup handle scoped to one domain.
    pub fn domain<'a>(&'a self, name: &str) -> DomainTranslator<'a> {
        DomainTranslator {
            entries: self.domains.get(name),
        }
    }
}

impl Default for Translator {
    /// Built-in English labels for the keys this crate uses.
    fn default() -> Self {
        let swap = [
            ("status.open", "Open"),
            ("status.matched", "Matched"),
            ("status.swapping", "Swapping"),
            ("status.completed", "Completed"),
            ("status.failed", "Failed"),
            ("status.cancelled", "Cancelled"),
        ]
        .into_iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect();

        let mut domains = HashMap::new();
        domains.insert("swap".to_string(), swap);

        Translator { domains }
    }
}

/// DomainTranslator looks up labels within a single domain.
#[derive(Debug, Clone, Copy)]
pub struct DomainTranslator<'a> {
    entries: Option<&'a HashMap<String, String>>,
}

impl<'a> DomainTranslator<'a> {
    /// Returns the label for a key, or the key itself when the domain or
    /// the entry is missing. Lookups never fail on a sparse catalog.
    pub fn get(&self, key: &'a str) -> &'a str {
        self.entries
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}
