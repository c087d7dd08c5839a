//! Schema type references.
//!
//! A [`TypeRef`] names a schema type and the wrappers around it. The textual
//! notation is compact and is also the serde representation:
//!
//! | Notation     | Meaning                          | Rust rendering      |
//! |--------------|----------------------------------|---------------------|
//! | `Int`        | named type                       | `i32`               |
//! | `Box?`       | optional (pointer-to) `Box`      | `Option<Box>`       |
//! | `[String]`   | list of `String`                 | `Vec<String>`       |
//! | `[Exec?]?`   | optional list of optional `Exec` | `Option<Vec<Option<Exec>>>` |

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reference to a schema type, possibly wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    /// A schema type by name.
    Named(String),

    /// Optional value of the inner type; the "pointer-to" wrapper.
    Pointer(Box<TypeRef>),

    /// List of the inner type.
    List(Box<TypeRef>),
}

impl TypeRef {
    /// Create a reference to a named type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wrap a reference in the optional (pointer-to) wrapper.
    pub fn pointer(inner: TypeRef) -> Self {
        TypeRef::Pointer(Box::new(inner))
    }

    /// Wrap a reference in a list.
    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// The type one pointer level down, if this is a pointer.
    pub fn pointee(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Pointer(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{name}"),
            TypeRef::Pointer(inner) => write!(f, "{inner}?"),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
        }
    }
}

impl FromStr for TypeRef {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type_ref(s.trim()).ok_or_else(|| SchemaError::InvalidTypeRef(s.to_string()))
    }
}

impl TryFrom<String> for TypeRef {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

fn parse_type_ref(s: &str) -> Option<TypeRef> {
    if let Some(inner) = s.strip_suffix('?') {
        return parse_type_ref(inner).map(TypeRef::pointer);
    }

    if let Some(rest) = s.strip_prefix('[') {
        let inner = rest.strip_suffix(']')?;
        return parse_type_ref(inner).map(TypeRef::list);
    }

    is_type_name(s).then(|| TypeRef::named(s))
}

fn is_type_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "type_ref/type_ref_tests.rs"]
mod type_ref_tests;
