//! `stubsmith check`

use crate::Preset;
use crate::generate::{load_config, load_schema};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use stubsmith_codegen::{GenerationReport, Generator};

/// Validate configuration and schema and print what a run would generate.
pub fn run(schema: &Path, config: Option<PathBuf>, preset: Option<Preset>) -> Result<()> {
    println!("Checking schema: {}", schema.display());

    let config = load_config(config.as_deref(), preset)?;
    let schema = load_schema(schema)?;
    let generator = Generator::new(config).context("Invalid generator configuration")?;
    let report = generator
        .check(&schema)
        .context("Failed to render resolver stubs")?;

    print!("{}", summarize(&report));
    Ok(())
}

/// Human-readable summary of a check.
pub fn summarize(report: &GenerationReport) -> String {
    let mut summary = format!(
        "✓ Output: {}\n✓ Root objects: {}\n✓ Resolver stubs: {}\n",
        report.output.display(),
        report.objects,
        report.resolvers
    );

    if report.preserved {
        summary.push_str("✓ Hand-written code after the marker will be kept\n");
    }

    if report.unresolved.is_empty() {
        summary.push_str("\nAll types resolved!\n");
    } else {
        summary.push_str(&format!(
            "\n! Types without a binding (rendered as ()): {}\n",
            report.unresolved.join(", ")
        ));
    }

    summary
}
