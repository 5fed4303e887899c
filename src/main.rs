use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};
use validation_localizer::config::Config;
use validation_localizer::i18n::{CatalogRegistry, Culture};
use validation_localizer::validation::{LocalizedValidationMetadataProvider, ModelMetadata};

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout stays valid JSON)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("validation_localizer=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(model_path) = args.next().map(PathBuf::from) else {
        bail!("Usage: localize-rules <model.json> [culture]");
    };

    let config = Config::from_env()?;

    let culture = match args.next() {
        Some(tag) => Culture::parse(&tag).with_context(|| format!("Invalid culture '{}'", tag))?,
        None => config.default_culture.clone(),
    };
    if !config.is_supported(&culture) {
        warn!("Culture {} is not in SUPPORTED_CULTURES", culture);
    }

    let registry = match &config.resources_dir {
        Some(dir) => CatalogRegistry::load_dir(dir)
            .with_context(|| format!("Failed to load catalogs from {}", dir.display()))?,
        None => {
            info!("LOCALIZATION_RESOURCES_DIR not set, messages stay untranslated");
            CatalogRegistry::new()
        }
    }
    .with_parent_fallback(config.fallback_to_parent_cultures);

    let content = std::fs::read_to_string(&model_path)
        .with_context(|| format!("Failed to read model {}", model_path.display()))?;
    let mut model: ModelMetadata = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse model {}", model_path.display()))?;

    info!("Localizing model '{}' for culture {}", model.name, culture);

    let provider = LocalizedValidationMetadataProvider::new(registry.localizer_for(&culture));
    provider.apply_to_model(&mut model)?;

    let report = provider.metrics().report();
    info!(
        "Resolved {} exact, {} parameterized, {} untranslated ({:.1}% hit rate)",
        report.exact_hits, report.parameterized_hits, report.misses, report.hit_rate
    );

    println!("{}", serde_json::to_string_pretty(&model)?);
    Ok(())
}
