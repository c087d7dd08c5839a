//! stubsmith-core - Schema model, type references, and type bindings
//!
//! This crate provides the foundational types the generator works on:
//! - [`Schema`], [`SchemaObject`], [`Field`] and [`Argument`] describing the input schema
//! - [`TypeRef`] for schema type references (named, optional, list)
//! - [`TypeBindingTable`] mapping schema types onto existing Rust types
//! - [`SchemaError`] for error handling

mod binding;
mod error;
mod schema;
mod type_ref;

pub use binding::{FieldOverride, TypeBinding, TypeBindingTable};
pub use error::{SchemaError, SchemaResult};
pub use schema::{Argument, Field, Schema, SchemaObject, TypeDecl, TypeDeclKind};
pub use type_ref::TypeRef;

/// Prefix the schema language reserves for introspection types and fields.
pub const RESERVED_PREFIX: &str = "__";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Argument, Field, Schema, SchemaError, SchemaObject, SchemaResult, TypeBinding,
        TypeBindingTable, TypeRef,
    };
}
