//! Internationalization (i18n) module: translation lookup and catalogs.
//!
//! # Architecture
//!
//! - `localizer`: `StringLocalizer` trait with identity-on-miss translation
//! - `culture`: Validated culture tags with parent fallback
//! - `catalog`: One culture's translation table, loadable from JSON
//! - `registry`: All catalogs, handing out per-culture localizers
//! - `metrics`: Counters for how messages were resolved
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{CatalogRegistry, Culture, StringLocalizer};
//!
//! let registry = CatalogRegistry::load_dir(Path::new("resources"))?;
//! let localizer = registry.localizer_for(&Culture::parse("es-MX")?);
//! let message = localizer.translate("The {0} field is required.", &["Email"])?;
//! ```

mod catalog;
mod culture;
mod localizer;
mod metrics;
mod registry;

pub use catalog::MessageCatalog;
pub use culture::Culture;
pub use localizer::{format_positional, IdentityLocalizer, MapLocalizer, StringLocalizer};
pub use metrics::{MetricsReport, ResolutionMetrics};
pub use registry::{CatalogRegistry, CultureLocalizer};
