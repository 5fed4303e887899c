use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while resolving a rule's localized message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The rule carries a resource-name override but no message to translate.
    #[error("validation rule for field '{field}' has no error message to localize")]
    InvalidRuleState { field: String },

    /// The localization backend could not answer the lookup.
    #[error("localization lookup unavailable: {reason}")]
    LocalizationUnavailable { reason: String },
}

/// Errors raised while loading translation catalogs.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid culture tag: '{0}'")]
    InvalidCulture(String),
}
