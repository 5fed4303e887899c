//! Catalog registry: all loaded catalogs, keyed by culture.
//!
//! The registry hands out a `CultureLocalizer` per request culture. Lookups
//! walk the culture's fallback chain (`es-MX`, then `es`) when parent
//! fallback is enabled.

use crate::error::{CatalogError, ResolveError};
use crate::i18n::{Culture, MessageCatalog, StringLocalizer};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Set of translation catalogs.
#[derive(Debug, Clone)]
pub struct CatalogRegistry {
    catalogs: HashMap<Culture, MessageCatalog>,
    fallback_to_parent: bool,
}

impl Default for CatalogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRegistry {
    /// Create an empty registry with parent-culture fallback enabled.
    pub fn new() -> Self {
        Self {
            catalogs: HashMap::new(),
            fallback_to_parent: true,
        }
    }

    /// Enable or disable parent-culture fallback.
    pub fn with_parent_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_parent = enabled;
        self
    }

    /// Add a catalog. Catalogs for a culture already present are merged,
    /// the newer entries winning.
    pub fn add(&mut self, catalog: MessageCatalog) {
        match self.catalogs.get_mut(catalog.culture()) {
            Some(existing) => existing.merge(catalog),
            None => {
                self.catalogs.insert(catalog.culture().clone(), catalog);
            }
        }
    }

    /// Load every `*.json` catalog in `dir`, in file-name order.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let io_error = |source| CatalogError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut registry = Self::new();
        for path in &paths {
            registry.add(MessageCatalog::load(path)?);
        }

        info!(
            "Loaded {} catalog files for {} cultures from {}",
            paths.len(),
            registry.catalogs.len(),
            dir.display()
        );
        Ok(registry)
    }

    /// Catalog for exactly this culture, without fallback.
    pub fn get_by_culture(&self, culture: &Culture) -> Option<&MessageCatalog> {
        self.catalogs.get(culture)
    }

    /// All cultures with a catalog, sorted.
    pub fn cultures(&self) -> Vec<&Culture> {
        let mut cultures: Vec<&Culture> = self.catalogs.keys().collect();
        cultures.sort();
        cultures
    }

    /// Localizer for `culture`.
    ///
    /// Cultures with no catalog anywhere in their chain get a localizer that
    /// misses on every key.
    pub fn localizer_for(&self, culture: &Culture) -> CultureLocalizer<'_> {
        let candidates = if self.fallback_to_parent {
            culture.fallback_chain()
        } else {
            vec![culture.clone()]
        };

        let chain: Vec<&MessageCatalog> = candidates
            .iter()
            .filter_map(|c| self.catalogs.get(c))
            .collect();

        debug!("Localizer for {} uses {} catalogs", culture, chain.len());

        CultureLocalizer { chain }
    }
}

/// Lookup view over the catalogs of one culture and its parents.
#[derive(Debug, Clone)]
pub struct CultureLocalizer<'a> {
    chain: Vec<&'a MessageCatalog>,
}

impl StringLocalizer for CultureLocalizer<'_> {
    fn lookup(&self, key: &str) -> Result<Option<String>, ResolveError> {
        Ok(self
            .chain
            .iter()
            .find_map(|catalog| catalog.get(key))
            .map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn culture(tag: &str) -> Culture {
        Culture::parse(tag).unwrap()
    }

    fn sample_registry() -> CatalogRegistry {
        let mut registry = CatalogRegistry::new();
        registry.add(
            MessageCatalog::new(culture("es"))
                .with("Hello", "Hola")
                .with("Bye", "Adiós"),
        );
        registry.add(MessageCatalog::new(culture("es-MX")).with("Bye", "Nos vemos"));
        registry
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_specific_culture_wins() {
        let registry = sample_registry();
        let localizer = registry.localizer_for(&culture("es-MX"));
        assert_eq!(localizer.translate("Bye", &[]).unwrap(), "Nos vemos");
    }

    #[test]
    fn test_parent_fallback() {
        let registry = sample_registry();
        let localizer = registry.localizer_for(&culture("es-MX"));
        assert_eq!(localizer.translate("Hello", &[]).unwrap(), "Hola");
    }

    #[test]
    fn test_parent_fallback_disabled() {
        let registry = sample_registry().with_parent_fallback(false);
        let localizer = registry.localizer_for(&culture("es-MX"));
        assert_eq!(localizer.translate("Hello", &[]).unwrap(), "Hello");
    }

    #[test]
    fn test_unknown_culture_misses() {
        let registry = sample_registry();
        let localizer = registry.localizer_for(&culture("fr"));
        assert_eq!(localizer.translate("Hello", &[]).unwrap(), "Hello");
    }

    // ==================== Registry Tests ====================

    #[test]
    fn test_add_merges_same_culture() {
        let mut registry = sample_registry();
        registry.add(MessageCatalog::new(culture("es")).with("Hello", "Buenas"));
        let catalog = registry.get_by_culture(&culture("es")).unwrap();
        assert_eq!(catalog.get("Hello"), Some("Buenas"));
        assert_eq!(catalog.get("Bye"), Some("Adiós"));
    }

    #[test]
    fn test_cultures_sorted() {
        let registry = sample_registry();
        let tags: Vec<&str> = registry.cultures().iter().map(|c| c.tag()).collect();
        assert_eq!(tags, vec!["es", "es-MX"]);
    }

    #[test]
    fn test_load_dir_ignores_non_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(
            temp_dir.path().join("es.json"),
            r#"{ "culture": "es", "messages": { "Hello": "Hola" } }"#,
        )
        .unwrap();
        std::fs::write(temp_dir.path().join("README.txt"), "not a catalog").unwrap();

        let registry = CatalogRegistry::load_dir(temp_dir.path()).expect("Should load");
        assert_eq!(registry.cultures().len(), 1);
    }

    #[test]
    fn test_load_dir_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = CatalogRegistry::load_dir(&temp_dir.path().join("nope"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
