//! Schema model consumed by the generator.
//!
//! The schema is produced upstream (for example by introspecting a running
//! API) and handed to stubsmith as JSON:
//!
//! ```json
//! {
//!   "objects": [
//!     {
//!       "name": "Box",
//!       "description": "A lockable box.",
//!       "fields": [
//!         { "name": "open", "ty": "Boolean", "args": [{ "name": "code", "ty": "Int" }] },
//!         { "name": "label", "ty": "String" }
//!       ]
//!     }
//!   ],
//!   "types": [{ "name": "Color", "kind": "enum" }]
//! }
//! ```
//!
//! The schema is assumed to be well-formed; nothing here validates it.

use crate::RESERVED_PREFIX;
use crate::error::SchemaResult;
use crate::type_ref::TypeRef;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete schema: objects plus the other named types it declares.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Object types, in declaration order.
    #[serde(default)]
    pub objects: Vec<SchemaObject>,

    /// Enums, input objects, and custom scalars.
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// An object type with fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaObject {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Provided by the schema language itself (e.g. `Query` helpers, scalars).
    #[serde(default)]
    pub builtin: bool,

    /// Framework-internal; never generated.
    #[serde(default)]
    pub reserved: bool,
}

/// A field on an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Arguments in declaration order.
    #[serde(default)]
    pub args: Vec<Argument>,

    /// Return type.
    pub ty: TypeRef,

    #[serde(default)]
    pub reserved: bool,
}

/// A field argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,

    pub ty: TypeRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Default value in schema notation, documentation only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// A non-object named type declared by the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeDeclKind,
}

/// Kind of a non-object named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeDeclKind {
    Enum,
    Input,
    Scalar,
}

impl Schema {
    /// Load a schema from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a schema from JSON.
    pub fn from_json(content: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Find an object by name.
    pub fn object(&self, name: &str) -> Option<&SchemaObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Returns true if `name` is a type the generated models define: an
    /// object, enum, or input object.
    ///
    /// Custom scalars are excluded; they only resolve through a binding.
    pub fn defines_model(&self, name: &str) -> bool {
        self.object(name).is_some()
            || self
                .types
                .iter()
                .any(|t| t.name == name && t.kind != TypeDeclKind::Scalar)
    }
}

impl SchemaObject {
    /// Create an object with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            builtin: false,
            reserved: false,
        }
    }

    /// Append a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the object as builtin.
    pub fn builtin(mut self) -> Self {
        self.builtin = true;
        self
    }

    /// Mark the object as reserved.
    pub fn reserved(mut self) -> Self {
        self.reserved = true;
        self
    }

    /// Reserved by flag or by the `__` name prefix.
    pub fn is_reserved(&self) -> bool {
        self.reserved || self.name.starts_with(RESERVED_PREFIX)
    }

    /// The object's own type reference.
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::named(self.name.clone())
    }
}

impl Field {
    /// Create a field without arguments.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            args: Vec::new(),
            ty,
            reserved: false,
        }
    }

    /// Append an argument.
    pub fn with_arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the field as reserved.
    pub fn reserved(mut self) -> Self {
        self.reserved = true;
        self
    }

    /// Reserved by flag or by the `__` name prefix.
    pub fn is_reserved(&self) -> bool {
        self.reserved || self.name.starts_with(RESERVED_PREFIX)
    }

    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }
}

impl Argument {
    /// Create an argument.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            default_value: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the documented default value.
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}
