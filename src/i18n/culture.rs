//! Culture type: validated, normalized language tag.
//!
//! Catalogs are keyed by culture. A culture such as `es-MX` falls back to its
//! parent `es` when the more specific catalog has no entry.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated culture tag (e.g. "en", "es-MX", "zh-Hant-TW").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Culture {
    tag: String,
}

impl Culture {
    /// Parse and normalize a culture tag.
    ///
    /// Subtags may be separated by `-` or `_`. The language subtag is
    /// lowercased, two-letter regions are uppercased and four-letter scripts
    /// are title-cased, so `ES_mx` and `es-MX` are the same culture.
    ///
    /// # Returns
    /// * `Ok(Culture)` if every subtag is 1-8 ASCII alphanumerics
    /// * `Err(CatalogError::InvalidCulture)` otherwise
    pub fn parse(tag: &str) -> Result<Culture, CatalogError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::InvalidCulture(tag.to_string()));
        }

        let mut parts = Vec::new();
        for (index, subtag) in trimmed.split(['-', '_']).enumerate() {
            let valid = !subtag.is_empty()
                && subtag.len() <= 8
                && subtag.chars().all(|c| c.is_ascii_alphanumeric());
            if !valid {
                return Err(CatalogError::InvalidCulture(tag.to_string()));
            }
            parts.push(normalize_subtag(index, subtag));
        }

        Ok(Culture {
            tag: parts.join("-"),
        })
    }

    /// The normalized tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The culture with its last subtag removed, if any.
    pub fn parent(&self) -> Option<Culture> {
        self.tag.rsplit_once('-').map(|(parent, _)| Culture {
            tag: parent.to_string(),
        })
    }

    /// This culture followed by each of its parents, most specific first.
    pub fn fallback_chain(&self) -> Vec<Culture> {
        let mut chain = vec![self.clone()];
        while let Some(parent) = chain.last().and_then(Culture::parent) {
            chain.push(parent);
        }
        chain
    }
}

fn normalize_subtag(index: usize, subtag: &str) -> String {
    if index == 0 {
        return subtag.to_ascii_lowercase();
    }
    match subtag.len() {
        2 => subtag.to_ascii_uppercase(),
        4 => {
            let lower = subtag.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => lower,
            }
        }
        _ => subtag.to_ascii_lowercase(),
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for Culture {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Culture::parse(s)
    }
}

impl TryFrom<String> for Culture {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Culture::parse(&value)
    }
}

impl From<Culture> for String {
    fn from(culture: Culture) -> Self {
        culture.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Parse Tests ====================

    #[test]
    fn test_parse_language_only() {
        let culture = Culture::parse("es").expect("Should parse");
        assert_eq!(culture.tag(), "es");
    }

    #[test]
    fn test_parse_normalizes_case_and_separator() {
        let culture = Culture::parse("ES_mx").expect("Should parse");
        assert_eq!(culture.tag(), "es-MX");
    }

    #[test]
    fn test_parse_script_title_case() {
        let culture = Culture::parse("zh-hant-tw").expect("Should parse");
        assert_eq!(culture.tag(), "zh-Hant-TW");
    }

    #[test]
    fn test_parse_empty() {
        assert!(Culture::parse("").is_err());
        assert!(Culture::parse("   ").is_err());
    }

    #[test]
    fn test_parse_invalid_characters() {
        assert!(Culture::parse("e$").is_err());
        assert!(Culture::parse("es--MX").is_err());
        assert!(Culture::parse("toolongsubtag").is_err());
    }

    // ==================== Fallback Tests ====================

    #[test]
    fn test_parent_of_region() {
        let culture = Culture::parse("es-MX").unwrap();
        assert_eq!(culture.parent().unwrap().tag(), "es");
    }

    #[test]
    fn test_parent_of_language_is_none() {
        let culture = Culture::parse("es").unwrap();
        assert!(culture.parent().is_none());
    }

    #[test]
    fn test_fallback_chain_order() {
        let culture = Culture::parse("zh-Hant-TW").unwrap();
        let chain: Vec<String> = culture
            .fallback_chain()
            .iter()
            .map(|c| c.tag().to_string())
            .collect();
        assert_eq!(chain, vec!["zh-Hant-TW", "zh-Hant", "zh"]);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_from_str_and_display() {
        let culture: Culture = "fr-ca".parse().unwrap();
        assert_eq!(culture.to_string(), "fr-CA");
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let culture: Culture = serde_json::from_str("\"pt_br\"").unwrap();
        assert_eq!(culture.tag(), "pt-BR");
        assert!(serde_json::from_str::<Culture>("\"\"").is_err());
    }
}
