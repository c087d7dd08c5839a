//! `stubsmith generate`

use crate::Preset;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use stubsmith_codegen::{Config, Generator};
use stubsmith_core::Schema;
use tracing::{debug, info};

/// Configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "stubsmith.toml";

/// Arguments of the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub schema: PathBuf,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub preset: Option<Preset>,
}

/// Generate resolver stubs.
pub fn run(options: &GenerateOptions) -> Result<()> {
    let mut config = load_config(options.config.as_deref(), options.preset)?;
    if let Some(output) = &options.output {
        config.generator.output = output.clone();
    }

    let schema = load_schema(&options.schema)?;
    let generator = Generator::new(config).context("Invalid generator configuration")?;

    if options.stdout {
        let rendered = generator
            .render(&schema)
            .context("Failed to render resolver stubs")?;
        print!("{rendered}");
        return Ok(());
    }

    let report = generator.generate(&schema).with_context(|| {
        format!(
            "Failed to generate {}",
            generator.config().output.display()
        )
    })?;

    println!(
        "Generated {} resolver stub(s) for {} object(s) in {}",
        report.resolvers,
        report.objects,
        report.output.display()
    );
    for name in &report.unresolved {
        println!("  warning: no binding for `{name}`; rendered as ()");
    }

    Ok(())
}

/// Load configuration, falling back to defaults when the default file is absent.
///
/// Preset bindings are applied first so configured bindings override them.
pub fn load_config(path: Option<&Path>, preset: Option<Preset>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG).exists() => Config::from_file(DEFAULT_CONFIG)
            .with_context(|| format!("Failed to load configuration {DEFAULT_CONFIG}"))?,
        None => {
            info!("no {DEFAULT_CONFIG} found; using default configuration");
            Config::default()
        }
    };

    if let Some(preset) = preset {
        debug!(?preset, "applying binding preset");
        config.bindings = preset.bindings().merge(config.bindings);
    }

    Ok(config)
}

/// Load the schema JSON.
pub fn load_schema(path: &Path) -> Result<Schema> {
    Schema::from_file(path).with_context(|| format!("Failed to load schema {}", path.display()))
}
