pub mod config;
pub mod error;
pub mod i18n;
pub mod validation;

pub use error::{CatalogError, ResolveError};
pub use i18n::{CatalogRegistry, Culture, MapLocalizer, MessageCatalog, StringLocalizer};
pub use validation::{
    resolve_message, FieldMetadata, LocalizedValidationMetadataProvider, ModelMetadata, RuleKind,
    ValidationMetadataContext, ValidationRule, ValidatorMetadata,
};
