use crate::i18n::Culture;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Catalogs
    pub resources_dir: Option<PathBuf>,

    // Cultures
    pub default_culture: Culture,
    pub supported_cultures: Vec<Culture>,
    pub fallback_to_parent_cultures: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// * `Ok(Config)` with defaults applied for unset variables
    /// * `Err` if a culture tag is invalid
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment in production,
    /// a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_culture = match lookup("DEFAULT_CULTURE") {
            Some(tag) => Culture::parse(&tag).context("DEFAULT_CULTURE is not a valid culture")?,
            None => Culture::parse("en")?,
        };

        let mut supported_cultures = match lookup("SUPPORTED_CULTURES") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(|tag| {
                    Culture::parse(tag).with_context(|| {
                        format!("SUPPORTED_CULTURES contains invalid culture '{}'", tag)
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };
        if !supported_cultures.contains(&default_culture) {
            supported_cultures.insert(0, default_culture.clone());
        }

        Ok(Self {
            // Catalogs
            resources_dir: lookup("LOCALIZATION_RESOURCES_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),

            // Cultures
            default_culture,
            supported_cultures,
            fallback_to_parent_cultures: lookup("FALLBACK_TO_PARENT_CULTURES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        })
    }

    /// Whether `culture` may be requested.
    pub fn is_supported(&self, culture: &Culture) -> bool {
        self.supported_cultures.contains(culture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.default_culture.tag(), "en");
        assert_eq!(config.supported_cultures.len(), 1);
        assert!(config.fallback_to_parent_cultures);
        assert!(config.resources_dir.is_none());
    }

    #[test]
    fn test_supported_cultures_include_default() {
        let config = config_from(&[
            ("DEFAULT_CULTURE", "es"),
            ("SUPPORTED_CULTURES", "fr, es-MX"),
        ])
        .unwrap();
        let tags: Vec<&str> = config.supported_cultures.iter().map(|c| c.tag()).collect();
        assert_eq!(tags, vec!["es", "fr", "es-MX"]);
        assert!(config.is_supported(&Culture::parse("fr").unwrap()));
    }

    #[test]
    fn test_invalid_culture_rejected() {
        let result = config_from(&[("SUPPORTED_CULTURES", "en,??")]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("??"));
    }

    #[test]
    fn test_parent_fallback_flag() {
        let config = config_from(&[("FALLBACK_TO_PARENT_CULTURES", "false")]).unwrap();
        assert!(!config.fallback_to_parent_cultures);
    }

    #[test]
    fn test_resources_dir() {
        let config = config_from(&[("LOCALIZATION_RESOURCES_DIR", "/srv/locales")]).unwrap();
        assert_eq!(config.resources_dir, Some(PathBuf::from("/srv/locales")));
    }
}
