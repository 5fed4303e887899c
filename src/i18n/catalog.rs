//! Translation catalogs: one culture's table of template to translation.
//!
//! Catalog files are JSON:
//!
//! ```json
//! {
//!   "culture": "es",
//!   "messages": {
//!     "The {0} field is required.": "El campo {0} es obligatorio."
//!   }
//! }
//! ```

use crate::error::{CatalogError, ResolveError};
use crate::i18n::{Culture, StringLocalizer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Translations for a single culture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    culture: Culture,

    #[serde(default)]
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Create an empty catalog for `culture`.
    pub fn new(culture: Culture) -> Self {
        Self {
            culture,
            messages: HashMap::new(),
        }
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            "Loaded {} messages for culture {} from {}",
            catalog.len(),
            catalog.culture,
            path.display()
        );
        Ok(catalog)
    }

    /// Culture these translations belong to.
    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace the translation for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.messages.insert(key.into(), value.into());
    }

    /// Translation for `key`. Empty translations count as missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Merge another catalog's entries into this one; `other` wins on conflicts.
    pub fn merge(&mut self, other: MessageCatalog) {
        self.messages.extend(other.messages);
    }

    /// Number of entries, including empty translations.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl StringLocalizer for MessageCatalog {
    fn lookup(&self, key: &str) -> Result<Option<String>, ResolveError> {
        Ok(self.get(key).map(str::to_string))
    }
}
