//! Validation rules and localization of their error messages.
//!
//! - `rule`: Rule kinds and their default English templates
//! - `resolver`: Exact, then parameterized, message lookup for one rule
//! - `provider`: Applies the resolver across fields and models

mod provider;
mod resolver;
mod rule;

pub use provider::{
    FieldMetadata, LocalizedValidationMetadataProvider, ModelMetadata, ValidationMetadataContext,
    ValidatorMetadata,
};
pub use resolver::{candidate_message, replace_identifier, resolve, resolve_message, Resolution};
pub use rule::{RuleKind, ValidationRule, FIELD_PLACEHOLDER};
