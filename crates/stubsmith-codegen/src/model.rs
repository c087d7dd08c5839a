//! Emission model.
//!
//! The [`EmissionModel`] is the single value handed to the emission pass. It
//! bundles the classification result, the populated [`TypeIndex`], and the
//! values of the rendering contract (package, root resolver type, context
//! and error types). It is read-only once built.

use crate::classify::Classification;
use crate::config::GeneratorConfig;
use crate::index::TypeIndex;
use stubsmith_core::{Field, SchemaObject};

/// A field that needs custom logic, and its stub.
#[derive(Debug, Clone)]
pub struct Resolver<'s> {
    object: &'s SchemaObject,
    field: &'s Field,
    comment: String,
    implementation: &'static str,
}

impl<'s> Resolver<'s> {
    /// Create a resolver whose body is `implementation`.
    pub fn new(object: &'s SchemaObject, field: &'s Field, implementation: &'static str) -> Self {
        Self {
            object,
            field,
            comment: field.description.clone().unwrap_or_default(),
            implementation,
        }
    }

    pub fn object(&self) -> &'s SchemaObject {
        self.object
    }

    pub fn field(&self) -> &'s Field {
        self.field
    }

    /// Field description carried into the stub's doc comment.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn implementation(&self) -> &'static str {
        self.implementation
    }
}

/// Everything the emission pass needs, in declaration order.
#[derive(Debug, Clone)]
pub struct EmissionModel<'s> {
    objects: Vec<&'s SchemaObject>,
    resolvers: Vec<Resolver<'s>>,
    index: TypeIndex,
    package_name: String,
    resolver_type: String,
    has_root: bool,
    context_type: String,
    error_type: String,
    remaining_source: Option<String>,
}

impl<'s> EmissionModel<'s> {
    /// Root objects.
    pub fn objects(&self) -> &[&'s SchemaObject] {
        &self.objects
    }

    pub fn resolvers(&self) -> &[Resolver<'s>] {
        &self.resolvers
    }

    /// Resolvers belonging to `object`, in field order.
    pub fn resolvers_for<'m>(
        &'m self,
        object: &'m SchemaObject,
    ) -> impl Iterator<Item = &'m Resolver<'s>> + 'm {
        self.resolvers
            .iter()
            .filter(move |r| std::ptr::eq(r.object(), object))
    }

    pub fn index(&self) -> &TypeIndex {
        &self.index
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Name of the root resolver type.
    pub fn resolver_type(&self) -> &str {
        &self.resolver_type
    }

    /// Whether the root resolver gets accessor methods.
    pub fn has_root(&self) -> bool {
        self.has_root
    }

    /// Short name of the context type.
    pub fn context_type(&self) -> &str {
        &self.context_type
    }

    /// Short name of the error type.
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// Hand-written code carried over from the previous output.
    pub fn remaining_source(&self) -> Option<&str> {
        self.remaining_source.as_deref()
    }

    /// Schema types that fell back to the placeholder type.
    pub fn unresolved(&self) -> &[String] {
        self.index.unresolved()
    }
}

/// Assembles an [`EmissionModel`] from a classification.
pub struct ModelBuilder<'c> {
    config: &'c GeneratorConfig,
    remaining_source: Option<String>,
}

impl<'c> ModelBuilder<'c> {
    pub fn new(config: &'c GeneratorConfig) -> Self {
        Self {
            config,
            remaining_source: None,
        }
    }

    /// Carry hand-written code into the model.
    pub fn with_remaining_source(mut self, source: Option<String>) -> Self {
        self.remaining_source = source.filter(|s| !s.trim().is_empty());
        self
    }

    /// Aggregate the classification and the index into the model.
    pub fn build<'s>(self, classification: Classification<'s>, mut index: TypeIndex) -> EmissionModel<'s> {
        let context_type = index.register_path(&self.config.context_type);
        let error_type = index.register_path(&self.config.error_type);
        let has_root = !classification.is_empty();

        EmissionModel {
            objects: classification.objects,
            resolvers: classification.resolvers,
            index,
            package_name: self.config.package.clone(),
            resolver_type: self.config.resolver_type.clone(),
            has_root,
            context_type,
            error_type,
            remaining_source: self.remaining_source,
        }
    }
}
