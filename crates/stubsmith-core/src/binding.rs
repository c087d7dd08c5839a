//! Type binding table.
//!
//! Maps schema type names onto Rust types that already exist, so the
//! generator references them instead of expecting a generated model. A bound
//! object may also list fields the existing type already satisfies natively
//! (`resolver = false`); those never get a stub.
//!
//! In `stubsmith.toml`:
//!
//! ```toml
//! [bindings.Filesystem]
//! type = "dagger_sdk::Filesystem"
//!
//! [bindings.Filesystem.fields]
//! exec = { resolver = false }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema type name to existing-type bindings. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeBindingTable {
    bindings: BTreeMap<String, TypeBinding>,
}

/// Binding of one schema type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBinding {
    /// Fully-qualified Rust path of the existing type.
    #[serde(rename = "type")]
    pub target: String,

    /// Per-field resolver overrides.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, FieldOverride>,
}

/// Field-level override on a bound type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOverride {
    /// Whether the field still gets a generated resolver.
    #[serde(default = "default_resolver")]
    pub resolver: bool,
}

fn default_resolver() -> bool {
    true
}

impl TypeBindingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings for the core Dagger API types.
    ///
    /// `Filesystem` and `Exec` are implemented natively by the SDK, so their
    /// argument-taking fields do not need resolvers.
    pub fn dagger_core() -> Self {
        Self::new()
            .with_binding("SecretID", TypeBinding::new("dagger_sdk::SecretID"))
            .with_binding("FSID", TypeBinding::new("dagger_sdk::FSID"))
            .with_binding(
                "Filesystem",
                TypeBinding::new("dagger_sdk::Filesystem")
                    .with_field("exec", false)
                    .with_field("dockerbuild", false)
                    .with_field("file", false),
            )
            .with_binding(
                "Exec",
                TypeBinding::new("dagger_sdk::Exec")
                    .with_field("fs", false)
                    .with_field("stdout", false)
                    .with_field("stderr", false)
                    .with_field("exitcode", false)
                    .with_field("mount", false),
            )
    }

    /// Add or replace a binding.
    pub fn with_binding(mut self, schema_type: impl Into<String>, binding: TypeBinding) -> Self {
        self.insert(schema_type, binding);
        self
    }

    /// Add or replace a binding.
    pub fn insert(&mut self, schema_type: impl Into<String>, binding: TypeBinding) {
        self.bindings.insert(schema_type.into(), binding);
    }

    /// Merge `other` into this table; entries in `other` win.
    pub fn merge(mut self, other: TypeBindingTable) -> Self {
        self.bindings.extend(other.bindings);
        self
    }

    /// Look up the binding for a schema type. `None` means "not bound".
    pub fn lookup(&self, schema_type: &str) -> Option<&TypeBinding> {
        self.bindings.get(schema_type)
    }

    /// Whether `field` on `schema_type` should get a generated resolver as
    /// far as the bindings are concerned.
    ///
    /// Only an explicit `resolver = false` on a bound type says no.
    pub fn field_needs_resolver(&self, schema_type: &str, field: &str) -> bool {
        self.lookup(schema_type)
            .and_then(|binding| binding.resolver_override(field))
            .unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate bindings ordered by schema type name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeBinding)> {
        self.bindings.iter().map(|(name, b)| (name.as_str(), b))
    }
}

impl TypeBinding {
    /// Bind to an existing type path.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field override.
    pub fn with_field(mut self, field: impl Into<String>, resolver: bool) -> Self {
        self.fields.insert(field.into(), FieldOverride { resolver });
        self
    }

    /// The configured override for a field, if any.
    pub fn resolver_override(&self, field: &str) -> Option<bool> {
        self.fields.get(field).map(|o| o.resolver)
    }
}
