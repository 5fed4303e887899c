//! Localized message resolution for a single validation rule.
//!
//! A rule's message is looked up in order:
//!
//! 1. by its literal text, e.g. "The UserName field is required.", so
//!    field-specific resources win;
//! 2. by the generic template with the field name replaced by `{0}`, e.g.
//!    "The {0} field is required.", formatted with the field name.
//!
//! Default messages of rules with parameters get one more try against the
//! fully generic template ("The field {0} must be between {1} and {2}.").
//!
//! If no lookup finds a translation the message stays in the source
//! language.

use crate::error::ResolveError;
use crate::i18n::{format_positional, StringLocalizer};
use crate::validation::rule::{ValidationRule, FIELD_PLACEHOLDER};
use tracing::debug;

/// How a message was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Translated by its literal text.
    Exact(String),
    /// Translated through the parameterized template.
    Parameterized(String),
    /// No translation found; the source-language message.
    Untranslated(String),
}

impl Resolution {
    /// The resolved message, whichever lookup produced it.
    pub fn into_message(self) -> String {
        match self {
            Resolution::Exact(message)
            | Resolution::Parameterized(message)
            | Resolution::Untranslated(message) => message,
        }
    }
}

/// The message considered for translation before any fallback.
///
/// Rules without overrides use their default template filled with the field
/// name. Otherwise the fixed message is used as written. A rule that only
/// names an external resource has nothing to translate.
pub fn candidate_message(rule: &ValidationRule, field_name: &str) -> Result<String, ResolveError> {
    if rule.uses_default_message() {
        return Ok(rule.format_error_message(field_name));
    }

    rule.error_message
        .clone()
        .ok_or_else(|| ResolveError::InvalidRuleState {
            field: field_name.to_string(),
        })
}

/// Resolve the localized message for `rule` on `field_name`.
///
/// # Arguments
/// * `rule` - The rule whose message is localized; it is not modified
/// * `field_name` - The model property being validated
/// * `localizer` - Translation lookup for the request culture
///
/// # Returns
/// * `Ok(message)` - the translation, or the source message if none exists
/// * `Err(ResolveError)` - the rule has no message, or the lookup failed
pub fn resolve_message<L>(
    rule: &ValidationRule,
    field_name: &str,
    localizer: &L,
) -> Result<String, ResolveError>
where
    L: StringLocalizer + ?Sized,
{
    resolve(rule, field_name, localizer).map(Resolution::into_message)
}

/// Like [`resolve_message`], reporting which lookup produced the message.
pub fn resolve<L>(
    rule: &ValidationRule,
    field_name: &str,
    localizer: &L,
) -> Result<Resolution, ResolveError>
where
    L: StringLocalizer + ?Sized,
{
    let candidate = candidate_message(rule, field_name)?;

    let translated = localizer.translate(&candidate, &[])?;
    if translated != candidate {
        return Ok(Resolution::Exact(translated));
    }

    if field_name.is_empty() {
        return Ok(Resolution::Untranslated(candidate));
    }

    // Framework-inserted positions first, then the field name as written.
    let mut template = if rule.uses_default_message() {
        rule.parameterized_message()
    } else {
        candidate.clone()
    };
    if template == candidate {
        template = replace_identifier(&candidate, field_name, FIELD_PLACEHOLDER);
    }

    if template == candidate {
        debug!(
            "Field '{}' does not appear in message '{}'; parameterized lookup uses it unchanged",
            field_name, candidate
        );
    }

    if let Some(translation) = localizer.lookup(&template)? {
        return Ok(Resolution::Parameterized(format_positional(
            &translation,
            &[field_name],
        )));
    }

    // Rules with parameters: "The field {0} must be between {1} and {2}."
    if rule.uses_default_message() && !rule.kind.parameters().is_empty() {
        let generic = rule.error_message_template();
        if let Some(translation) = localizer.lookup(generic)? {
            return Ok(Resolution::Parameterized(
                rule.format_template(&translation, field_name),
            ));
        }
    }

    Ok(Resolution::Untranslated(candidate))
}

/// Replace every occurrence of `needle` that stands as a whole identifier,
/// i.e. is not directly preceded or followed by a letter, digit or `_`.
///
/// Single pass; the replacement is never rescanned.
pub fn replace_identifier(text: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }

    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for (start, matched) in text.match_indices(needle) {
        if start < last {
            continue;
        }
        let end = start + matched.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        if before.is_some_and(is_word) || after.is_some_and(is_word) {
            continue;
        }
        result.push_str(&text[last..start]);
        result.push_str(replacement);
        last = end;
    }

    result.push_str(&text[last..]);
    result
}
