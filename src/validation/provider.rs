//! Metadata provider: applies message resolution to every rule of a model
//! and writes the resolved messages back.

use crate::error::ResolveError;
use crate::i18n::{ResolutionMetrics, StringLocalizer};
use crate::validation::resolver::{candidate_message, resolve, Resolution};
use crate::validation::rule::ValidationRule;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A validator attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidatorMetadata {
    /// A declarative rule with a localizable message.
    Rule(ValidationRule),
    /// Any other validator; left untouched.
    Other { validator: String },
}

/// A field and its validators, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub name: String,

    #[serde(default)]
    pub validators: Vec<ValidatorMetadata>,
}

impl FieldMetadata {
    /// Create a field with no validators.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validators: Vec::new(),
        }
    }

    /// Append a declarative rule to the field's validators.
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.validators.push(ValidatorMetadata::Rule(rule));
        self
    }

    /// The declarative rules among this field's validators.
    pub fn rules(&self) -> impl Iterator<Item = &ValidationRule> {
        self.validators.iter().filter_map(|v| match v {
            ValidatorMetadata::Rule(rule) => Some(rule),
            ValidatorMetadata::Other { .. } => None,
        })
    }
}

/// A model: a named set of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<FieldMetadata>,
}

/// The per-field view handed to the provider while metadata is built.
#[derive(Debug)]
pub struct ValidationMetadataContext<'a> {
    field: &'a mut FieldMetadata,
}

impl<'a> ValidationMetadataContext<'a> {
    /// Wrap the field whose validators are being built.
    pub fn new(field: &'a mut FieldMetadata) -> Self {
        Self { field }
    }

    /// Name of the field being validated.
    pub fn field_name(&self) -> &str {
        &self.field.name
    }

    /// The field's validators, in declaration order, for in-place updates.
    pub fn validator_metadata(&mut self) -> &mut [ValidatorMetadata] {
        &mut self.field.validators
    }
}

/// Replaces the messages of validation rules with localized ones.
pub struct LocalizedValidationMetadataProvider<L> {
    localizer: L,
    metrics: ResolutionMetrics,
}

impl<L: StringLocalizer> LocalizedValidationMetadataProvider<L> {
    /// Create a provider that translates through `localizer`.
    ///
    /// # Arguments
    /// * `localizer` - Lookup used for every rule, typically a
    ///   `CultureLocalizer` for the request culture
    pub fn new(localizer: L) -> Self {
        Self {
            localizer,
            metrics: ResolutionMetrics::new(),
        }
    }

    /// Counters of how the provider's messages were resolved.
    pub fn metrics(&self) -> &ResolutionMetrics {
        &self.metrics
    }

    /// Localize the message of every rule on the context's field.
    ///
    /// A lookup failure keeps the untranslated message. A rule with nothing
    /// to translate is left as is; the remaining rules are still localized
    /// and the first such error is returned afterwards.
    pub fn create_validation_metadata(
        &self,
        context: &mut ValidationMetadataContext<'_>,
    ) -> Result<(), ResolveError> {
        let field_name = context.field_name().to_string();
        let mut first_error = None;

        for metadata in context.validator_metadata() {
            let rule = match metadata {
                ValidatorMetadata::Rule(rule) => rule,
                ValidatorMetadata::Other { validator } => {
                    debug!(
                        "Skipping non-rule validator '{}' on field '{}'",
                        validator, field_name
                    );
                    continue;
                }
            };

            match self.localize(rule, &field_name) {
                Ok(message) => rule.error_message = Some(message),
                Err(err) => {
                    warn!("Cannot localize rule on field '{}': {}", field_name, err);
                    first_error.get_or_insert(err);
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// Run `create_validation_metadata` for each field of the model.
    ///
    /// Every field is processed; the first error encountered is returned.
    pub fn apply_to_model(&self, model: &mut ModelMetadata) -> Result<(), ResolveError> {
        let mut first_error = None;
        for field in &mut model.fields {
            let mut context = ValidationMetadataContext::new(field);
            if let Err(err) = self.create_validation_metadata(&mut context) {
                first_error.get_or_insert(err);
            }
        }
        if let Some(err) = first_error {
            return Err(err);
        }

        debug!(
            "Localized validation messages for model '{}' ({} fields)",
            model.name,
            model.fields.len()
        );
        Ok(())
    }

    fn localize(&self, rule: &ValidationRule, field_name: &str) -> Result<String, ResolveError> {
        match resolve(rule, field_name, &self.localizer) {
            Ok(resolution) => {
                match &resolution {
                    Resolution::Exact(_) => self.metrics.record_exact_hit(),
                    Resolution::Parameterized(_) => self.metrics.record_parameterized_hit(),
                    Resolution::Untranslated(_) => self.metrics.record_miss(),
                }
                Ok(resolution.into_message())
            }
            Err(ResolveError::LocalizationUnavailable { reason }) => {
                self.metrics.record_lookup_failure();
                warn!(
                    "Localization unavailable for field '{}', keeping source message: {}",
                    field_name, reason
                );
                candidate_message(rule, field_name)
            }
            Err(err) => Err(err),
        }
    }
}
