//! Generator configuration (`stubsmith.toml`).
//!
//! ```toml
//! [generator]
//! package = "main"
//! resolver_type = "Resolver"
//! output = "src/resolvers.rs"
//! context_type = "crate::Context"
//! error_type = "anyhow::Error"
//! models_module = "crate::models"
//!
//! [bindings.Filesystem]
//! type = "dagger_sdk::Filesystem"
//! fields.exec = { resolver = false }
//! ```
//!
//! Every key has a default, so an empty file is a valid configuration.
//! Relative `output` and `template` paths are resolved against the directory
//! containing the configuration file.

use crate::emit::DEFAULT_TEMPLATE;
use crate::error::{CodegenError, CodegenResult};
use crate::naming::is_identifier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stubsmith_core::TypeBindingTable;

/// Complete configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub bindings: TypeBindingTable,
}

/// Options for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Package (module) the generated file belongs to.
    #[serde(default = "default_package")]
    pub package: String,

    /// Name of the root resolver type.
    #[serde(default = "default_resolver_type")]
    pub resolver_type: String,

    /// Destination of the generated file.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Path of the context type every resolver receives.
    #[serde(default = "default_context_type")]
    pub context_type: String,

    /// Path of the error type resolvers return.
    #[serde(default = "default_error_type")]
    pub error_type: String,

    /// Module holding generated model types; unbound schema types are
    /// imported from here. When unset they are assumed to be in scope.
    #[serde(default)]
    pub models_module: Option<String>,

    /// Template replacing the built-in one.
    #[serde(default)]
    pub template: Option<PathBuf>,
}

fn default_package() -> String {
    "main".to_string()
}

fn default_resolver_type() -> String {
    "Resolver".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("resolvers.rs")
}

fn default_context_type() -> String {
    "crate::Context".to_string()
}

fn default_error_type() -> String {
    "anyhow::Error".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            resolver_type: default_resolver_type(),
            output: default_output(),
            context_type: default_context_type(),
            error_type: default_error_type(),
            models_module: None,
            template: None,
        }
    }
}

impl Config {
    /// Load configuration from a file, resolving relative paths against its
    /// directory.
    pub fn from_file(path: impl AsRef<Path>) -> CodegenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CodegenError::config(format!("failed to read {}: {e}", path.display()))
        })?;

        let mut config = Self::from_str(&content)?;
        if let Some(base) = path.parent() {
            config.generator.rebase(base);
        }
        Ok(config)
    }

    /// Parse configuration from TOML.
    #[allow(clippy::should_implement_trait)] // Mirrors from_file; errors are CodegenError
    pub fn from_str(content: &str) -> CodegenResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> CodegenResult<()> {
        self.generator.validate()
    }
}

impl GeneratorConfig {
    /// Validate options before any classification happens.
    pub fn validate(&self) -> CodegenResult<()> {
        if self.package.trim().is_empty() {
            return Err(CodegenError::config("package name cannot be empty"));
        }

        if !is_identifier(&self.resolver_type) {
            return Err(CodegenError::config(format!(
                "resolver type '{}' is not a valid identifier",
                self.resolver_type
            )));
        }

        if self.output.file_name().is_none() {
            return Err(CodegenError::config(format!(
                "output path '{}' does not name a file",
                self.output.display()
            )));
        }

        if self.context_type.trim().is_empty() {
            return Err(CodegenError::config("context type cannot be empty"));
        }

        if self.error_type.trim().is_empty() {
            return Err(CodegenError::config("error type cannot be empty"));
        }

        Ok(())
    }

    /// Read the configured template, or the built-in one.
    pub fn load_template(&self) -> CodegenResult<String> {
        match &self.template {
            Some(path) => std::fs::read_to_string(path).map_err(|e| {
                CodegenError::config(format!("failed to read template {}: {e}", path.display()))
            }),
            None => Ok(DEFAULT_TEMPLATE.to_string()),
        }
    }

    fn rebase(&mut self, base: &Path) {
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
        if let Some(template) = self.template.as_mut().filter(|t| t.is_relative()) {
            *template = base.join(&*template);
        }
    }
}
