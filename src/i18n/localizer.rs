//! Localization lookup: key to translated string, identity on miss.
//!
//! Implementations only answer "is there a translation for this key". The
//! provided `translate` method turns a miss into the key itself and fills
//! positional `{n}` placeholders, so callers can compare the result with the
//! key to detect a miss.

use crate::error::ResolveError;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// A source of translated message templates.
pub trait StringLocalizer: Send + Sync {
    /// Look up the translation for `key`.
    ///
    /// # Returns
    /// * `Ok(Some(template))` when a translation exists
    /// * `Ok(None)` on a miss
    /// * `Err(ResolveError::LocalizationUnavailable)` if the backend failed
    fn lookup(&self, key: &str) -> Result<Option<String>, ResolveError>;

    /// Translate `key`, formatting `args` into `{0}`, `{1}`, ... placeholders.
    ///
    /// On a miss the key itself is used as the template, so an untranslated
    /// key with no arguments comes back unchanged.
    fn translate(&self, key: &str, args: &[&str]) -> Result<String, ResolveError> {
        let template = self.lookup(key)?.unwrap_or_else(|| key.to_string());
        if args.is_empty() {
            Ok(template)
        } else {
            Ok(format_positional(&template, args))
        }
    }
}

impl<L: StringLocalizer + ?Sized> StringLocalizer for &L {
    fn lookup(&self, key: &str) -> Result<Option<String>, ResolveError> {
        (**self).lookup(key)
    }
}

impl<L: StringLocalizer + ?Sized> StringLocalizer for Arc<L> {
    fn lookup(&self, key: &str) -> Result<Option<String>, ResolveError> {
        (**self).lookup(key)
    }
}

impl<L: StringLocalizer + ?Sized> StringLocalizer for Box<L> {
    fn lookup(&self, key: &str) -> Result<Option<String>, ResolveError> {
        (**self).lookup(key)
    }
}

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Fill positional placeholders.
///
/// `{n}` becomes `args[n]`; `{{` and `}}` become literal braces. Placeholders
/// with no matching argument are left as written.
pub fn format_positional(template: &str, args: &[&str]) -> String {
    let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{\{|\}\}|\{(\d+)\}").unwrap());

    regex
        .replace_all(template, |caps: &Captures| {
            let whole = &caps[0];
            match caps.get(1) {
                Some(index) => index
                    .as_str()
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| args.get(i))
                    .map(|arg| arg.to_string())
                    .unwrap_or_else(|| whole.to_string()),
                None if whole == "{{" => "{".to_string(),
                None => "}".to_string(),
            }
        })
        .into_owned()
}

/// In-memory localizer backed by a plain map.
#[derive(Debug, Clone, Default)]
pub struct MapLocalizer {
    entries: HashMap<String, String>,
}

impl MapLocalizer {
    /// Create an empty localizer; every lookup misses until entries are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace the translation for `key`.
    ///
    /// # Arguments
    /// * `key` - The source-language message or template
    /// * `value` - Its translation, which may use `{0}`-style placeholders
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapLocalizer {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut localizer = MapLocalizer::new();
        for (key, value) in iter {
            localizer.insert(key, value);
        }
        localizer
    }
}

impl StringLocalizer for MapLocalizer {
    fn lookup(&self, key: &str) -> Result<Option<String>, ResolveError> {
        Ok(self.entries.get(key).cloned())
    }
}

/// Localizer that never translates; every key resolves to itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityLocalizer;

impl StringLocalizer for IdentityLocalizer {
    fn lookup(&self, _key: &str) -> Result<Option<String>, ResolveError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Formatting Tests ====================

    #[test]
    fn test_format_single_placeholder() {
        assert_eq!(
            format_positional("{0} es obligatorio.", &["UserName"]),
            "UserName es obligatorio."
        );
    }

    #[test]
    fn test_format_repeated_and_ordered_placeholders() {
        assert_eq!(
            format_positional("{1} then {0} then {1}", &["a", "b"]),
            "b then a then b"
        );
    }

    #[test]
    fn test_format_missing_argument_left_untouched() {
        assert_eq!(format_positional("{0} and {3}", &["x"]), "x and {3}");
    }

    #[test]
    fn test_format_escaped_braces() {
        assert_eq!(format_positional("{{0}} is {0}", &["v"]), "{0} is v");
    }

    #[test]
    fn test_format_malformed_placeholder() {
        assert_eq!(format_positional("{name} {0", &["v"]), "{name} {0");
    }

    #[test]
    fn test_format_does_not_rescan_arguments() {
        assert_eq!(format_positional("{0}", &["{0}"]), "{0}");
    }

    // ==================== Translate Tests ====================

    #[test]
    fn test_translate_hit_without_args() {
        let localizer = MapLocalizer::new().with("Hello", "Hola");
        assert_eq!(localizer.translate("Hello", &[]).unwrap(), "Hola");
    }

    #[test]
    fn test_translate_miss_returns_key() {
        let localizer = MapLocalizer::new();
        assert_eq!(localizer.translate("Hello", &[]).unwrap(), "Hello");
    }

    #[test]
    fn test_translate_miss_with_args_formats_key() {
        let localizer = MapLocalizer::new();
        assert_eq!(
            localizer
                .translate("The {0} field is required.", &["Email"])
                .unwrap(),
            "The Email field is required."
        );
    }

    #[test]
    fn test_translate_hit_without_args_keeps_placeholders() {
        let localizer = MapLocalizer::new().with("k", "{0} valor");
        assert_eq!(localizer.translate("k", &[]).unwrap(), "{0} valor");
    }

    #[test]
    fn test_identity_localizer() {
        assert_eq!(IdentityLocalizer.translate("abc", &[]).unwrap(), "abc");
    }

    #[test]
    fn test_blanket_impls_delegate() {
        let localizer = Arc::new(MapLocalizer::new().with("a", "b"));
        assert_eq!(localizer.translate("a", &[]).unwrap(), "b");
        let boxed: Box<dyn StringLocalizer> = Box::new(MapLocalizer::new().with("a", "c"));
        assert_eq!(boxed.translate("a", &[]).unwrap(), "c");
    }

    #[test]
    fn test_from_iterator() {
        let localizer: MapLocalizer = vec![("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(localizer.translate("a", &[]).unwrap(), "1");
        assert_eq!(localizer.translate("b", &[]).unwrap(), "2");
    }
}
