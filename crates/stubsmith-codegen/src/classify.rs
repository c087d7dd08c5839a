//! Schema classification.
//!
//! Decides which objects need generated scaffolding and which of their fields
//! need a resolver stub. Each object goes through two passes:
//!
//! 1. **Scan**: does any field need a resolver? If not, the object is skipped
//!    entirely; its argument-less fields are served by plain field access.
//! 2. **Build**: the object becomes a generation root and every qualifying
//!    field gets a [`Resolver`] with the placeholder body.
//!
//! A field needs a resolver when it is not reserved, takes at least one
//! argument, and the binding table does not override it with
//! `resolver = false`.

use crate::index::TypeIndex;
use crate::model::Resolver;
use stubsmith_core::{Field, Schema, SchemaObject, TypeBindingTable};
use tracing::debug;

/// Body of every generated resolver.
pub const NOT_IMPLEMENTED: &str = "unimplemented!()";

/// Output of classification, in schema declaration order.
#[derive(Debug, Clone)]
pub struct Classification<'s> {
    /// Objects selected as generation roots.
    pub objects: Vec<&'s SchemaObject>,

    /// One resolver per field needing custom logic.
    pub resolvers: Vec<Resolver<'s>>,
}

impl Classification<'_> {
    /// Whether nothing in the schema needs a resolver.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Classifies schema objects against a binding table.
pub struct Classifier<'b> {
    bindings: &'b TypeBindingTable,
}

impl<'b> Classifier<'b> {
    pub fn new(bindings: &'b TypeBindingTable) -> Self {
        Self { bindings }
    }

    /// Classify every object, registering touched type references in `index`.
    pub fn classify<'s>(&self, schema: &'s Schema, index: &mut TypeIndex) -> Classification<'s> {
        let mut classification = Classification {
            objects: Vec::new(),
            resolvers: Vec::new(),
        };

        for object in &schema.objects {
            if object.builtin || object.is_reserved() {
                debug!(object = %object.name, "skipping builtin or reserved object");
                continue;
            }

            if !self.has_resolvers(object) {
                debug!(object = %object.name, "no field needs a resolver; skipping object");
                continue;
            }

            self.build_object(object, index, &mut classification);
        }

        classification
    }

    /// Scan pass.
    pub fn has_resolvers(&self, object: &SchemaObject) -> bool {
        object
            .fields
            .iter()
            .any(|field| self.needs_resolver(object, field))
    }

    /// Whether `field` on `object` gets a resolver stub.
    pub fn needs_resolver(&self, object: &SchemaObject, field: &Field) -> bool {
        !field.is_reserved()
            && field.has_args()
            && self.bindings.field_needs_resolver(&object.name, &field.name)
    }

    /// Build pass.
    fn build_object<'s>(
        &self,
        object: &'s SchemaObject,
        index: &mut TypeIndex,
        classification: &mut Classification<'s>,
    ) {
        debug!(object = %object.name, "object is a generation root");
        classification.objects.push(object);
        index.register(&object.type_ref());

        for field in &object.fields {
            if !self.needs_resolver(object, field) {
                continue;
            }

            for arg in &field.args {
                index.register(&arg.ty);
            }
            index.register(&field.ty);

            debug!(object = %object.name, field = %field.name, "generating resolver stub");
            classification
                .resolvers
                .push(Resolver::new(object, field, NOT_IMPLEMENTED));
        }
    }
}
