//! Generation entry point.
//!
//! A [`Generator`] owns everything one run needs: validated options, the
//! binding table and the template body. Nothing is shared between runs, so
//! independent generators can run side by side.

use crate::classify::Classifier;
use crate::config::{Config, GeneratorConfig};
use crate::emit::{Emitter, PRESERVE_MARKER, extract_remaining_source, write_atomic};
use crate::error::CodegenResult;
use crate::index::TypeIndex;
use crate::model::{EmissionModel, ModelBuilder};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use stubsmith_core::{Schema, TypeBindingTable};
use tracing::{debug, info, warn};

/// Summary of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Destination of the generated file.
    pub output: PathBuf,
    /// Number of root objects.
    pub objects: usize,
    /// Number of resolver stubs.
    pub resolvers: usize,
    /// Schema types rendered as the placeholder type.
    pub unresolved: Vec<String>,
    /// Whether hand-written code was carried over.
    pub preserved: bool,
}

impl GenerationReport {
    fn from_model(output: &Path, model: &EmissionModel<'_>) -> Self {
        Self {
            output: output.to_path_buf(),
            objects: model.objects().len(),
            resolvers: model.resolvers().len(),
            unresolved: model.unresolved().to_vec(),
            preserved: model.remaining_source().is_some(),
        }
    }
}

/// Resolver stub generator.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    bindings: TypeBindingTable,
    template: String,
}

impl Generator {
    /// Create a generator from a loaded configuration.
    ///
    /// Validates the options and reads the template before any schema is
    /// looked at.
    pub fn new(config: Config) -> CodegenResult<Self> {
        config.validate()?;
        let template = config.generator.load_template()?;
        Ok(Self {
            config: config.generator,
            bindings: config.bindings,
            template,
        })
    }

    /// Create a generator from explicit parts.
    pub fn from_parts(
        config: GeneratorConfig,
        bindings: TypeBindingTable,
        template: impl Into<String>,
    ) -> CodegenResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            bindings,
            template: template.into(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn bindings(&self) -> &TypeBindingTable {
        &self.bindings
    }

    /// Classify `schema` and build the emission model.
    pub fn build_model<'s>(
        &self,
        schema: &'s Schema,
        remaining_source: Option<String>,
    ) -> EmissionModel<'s> {
        let mut index = TypeIndex::for_config(schema, &self.bindings, &self.config);
        let classification = Classifier::new(&self.bindings).classify(schema, &mut index);
        debug!(
            objects = classification.objects.len(),
            resolvers = classification.resolvers.len(),
            "classified schema"
        );

        ModelBuilder::new(&self.config)
            .with_remaining_source(remaining_source)
            .build(classification, index)
    }

    /// Render the output file without writing it.
    ///
    /// Hand-written code from an existing output file is included.
    pub fn render(&self, schema: &Schema) -> CodegenResult<String> {
        let remaining = self.read_remaining_source()?;
        let model = self.build_model(schema, remaining);
        Emitter::new(&self.template).render(&model, &self.config.output)
    }

    /// Classify and render without writing, returning what a run would do.
    pub fn check(&self, schema: &Schema) -> CodegenResult<GenerationReport> {
        let remaining = self.read_remaining_source()?;
        let model = self.build_model(schema, remaining);
        Emitter::new(&self.template).render(&model, &self.config.output)?;
        Ok(GenerationReport::from_model(&self.config.output, &model))
    }

    /// Render and write the output file.
    ///
    /// Either the whole file is written or nothing is.
    pub fn generate(&self, schema: &Schema) -> CodegenResult<GenerationReport> {
        let remaining = self.read_remaining_source()?;
        let model = self.build_model(schema, remaining);
        let rendered = Emitter::new(&self.template).render(&model, &self.config.output)?;

        write_atomic(&self.config.output, &rendered)?;

        let report = GenerationReport::from_model(&self.config.output, &model);
        info!(
            output = %report.output.display(),
            objects = report.objects,
            resolvers = report.resolvers,
            unresolved = report.unresolved.len(),
            "wrote resolver stubs"
        );
        Ok(report)
    }

    fn read_remaining_source(&self) -> CodegenResult<Option<String>> {
        let output = &self.config.output;
        let existing = match std::fs::read_to_string(output) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if !existing.contains(PRESERVE_MARKER) {
            warn!(
                output = %output.display(),
                "existing output has no preservation marker; it will be replaced entirely"
            );
            return Ok(None);
        }

        Ok(extract_remaining_source(&existing))
    }
}
