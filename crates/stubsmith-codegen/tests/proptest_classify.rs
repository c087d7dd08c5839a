//! Property-based tests for classification and type resolution
//!
//! Tests that object selection and resolver creation follow the argument and
//! override rules for any schema, and that resolution and rendering are
//! deterministic.

use proptest::prelude::*;
use stubsmith_codegen::{
    Classifier, DEFAULT_TEMPLATE, Emitter, GeneratorConfig, ModelBuilder, NOT_IMPLEMENTED,
    TypeIndex,
};
use stubsmith_core::{
    Argument, Field, Schema, SchemaObject, TypeBinding, TypeBindingTable, TypeRef,
};

#[derive(Debug, Clone)]
struct FieldShape {
    args: usize,
    reserved: bool,
    suppressed: bool,
}

#[derive(Debug, Clone)]
struct ObjectShape {
    builtin: bool,
    reserved: bool,
    fields: Vec<FieldShape>,
}

// Strategy: field shapes
fn arb_field() -> impl Strategy<Value = FieldShape> {
    (0usize..3, any::<bool>(), any::<bool>()).prop_map(|(args, reserved, suppressed)| FieldShape {
        args,
        reserved: reserved && args % 2 == 0,
        suppressed,
    })
}

// Strategy: object shapes
fn arb_object() -> impl Strategy<Value = ObjectShape> {
    (
        proptest::bool::weighted(0.1),
        proptest::bool::weighted(0.1),
        prop::collection::vec(arb_field(), 0..5),
    )
        .prop_map(|(builtin, reserved, fields)| ObjectShape {
            builtin,
            reserved,
            fields,
        })
}

// Strategy: scalar and object type references
fn arb_type_ref() -> impl Strategy<Value = TypeRef> {
    let named = prop_oneof![
        Just("Int"),
        Just("String"),
        Just("Obj0"),
        Just("Bound"),
        Just("Missing"),
    ]
    .prop_map(TypeRef::named);
    named.prop_recursive(3, 6, 1, |inner| {
        prop_oneof![
            inner.clone().prop_map(TypeRef::pointer),
            inner.prop_map(TypeRef::list),
        ]
    })
}

fn build(shapes: &[ObjectShape]) -> (Schema, TypeBindingTable) {
    let mut bindings = TypeBindingTable::new();
    let objects = shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let name = format!("Obj{i}");
            let mut binding = TypeBinding::new(format!("bound::Obj{i}"));
            let mut object = SchemaObject::new(&name);
            object.builtin = shape.builtin;
            object.reserved = shape.reserved;

            for (j, field_shape) in shape.fields.iter().enumerate() {
                let field_name = format!("field{j}");
                let mut field = Field::new(&field_name, TypeRef::named("Int"));
                for k in 0..field_shape.args {
                    field = field.with_arg(Argument::new(format!("arg{k}"), TypeRef::named("String")));
                }
                field.reserved = field_shape.reserved;
                if field_shape.suppressed {
                    binding = binding.with_field(field_name, false);
                }
                object = object.with_field(field);
            }

            bindings.insert(name, binding);
            object
        })
        .collect();

    (
        Schema {
            objects,
            types: Vec::new(),
        },
        bindings,
    )
}

fn qualifies(field: &FieldShape) -> bool {
    !field.reserved && field.args > 0 && !field.suppressed
}

proptest! {
    /// Property: an object is a root iff it is not builtin/reserved and has a qualifying field
    #[test]
    fn proptest_classify_object_selection(shapes in prop::collection::vec(arb_object(), 0..6)) {
        let (schema, bindings) = build(&shapes);
        let mut index = TypeIndex::new(&schema, &bindings, None);

        let classification = Classifier::new(&bindings).classify(&schema, &mut index);

        let expected: Vec<String> = shapes
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.builtin && !s.reserved && s.fields.iter().any(qualifies))
            .map(|(i, _)| format!("Obj{i}"))
            .collect();
        let actual: Vec<String> = classification.objects.iter().map(|o| o.name.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: exactly one placeholder resolver per qualifying field on a root, in order
    #[test]
    fn proptest_classify_resolvers(shapes in prop::collection::vec(arb_object(), 0..6)) {
        let (schema, bindings) = build(&shapes);
        let mut index = TypeIndex::new(&schema, &bindings, None);

        let classification = Classifier::new(&bindings).classify(&schema, &mut index);

        let mut expected = Vec::new();
        for (i, shape) in shapes.iter().enumerate() {
            if shape.builtin || shape.reserved {
                continue;
            }
            for (j, field) in shape.fields.iter().enumerate() {
                if qualifies(field) {
                    expected.push(format!("Obj{i}.field{j}"));
                }
            }
        }
        let actual: Vec<String> = classification
            .resolvers
            .iter()
            .map(|r| format!("{}.{}", r.object().name, r.field().name))
            .collect();
        prop_assert_eq!(actual, expected);
        for resolver in &classification.resolvers {
            prop_assert_eq!(resolver.implementation(), NOT_IMPLEMENTED);
            prop_assert!(resolver.field().has_args());
        }
    }

    /// Property: rendering the same schema twice gives identical output
    #[test]
    fn proptest_render_deterministic(shapes in prop::collection::vec(arb_object(), 0..6)) {
        let (schema, bindings) = build(&shapes);
        let config = GeneratorConfig::default();

        let render = || {
            let mut index = TypeIndex::for_config(&schema, &bindings, &config);
            let classification = Classifier::new(&bindings).classify(&schema, &mut index);
            let model = ModelBuilder::new(&config).build(classification, index);
            Emitter::new(DEFAULT_TEMPLATE)
                .render(&model, std::path::Path::new("resolvers.rs"))
                .expect("default template should render")
        };

        prop_assert_eq!(render(), render());
    }

    /// Property: registering a reference twice yields the same short name
    #[test]
    fn proptest_register_idempotent(refs in prop::collection::vec(arb_type_ref(), 1..10)) {
        let schema = Schema {
            objects: vec![SchemaObject::new("Obj0")],
            types: Vec::new(),
        };
        let bindings = TypeBindingTable::new().with_binding("Bound", TypeBinding::new("ext::Bound"));
        let mut index = TypeIndex::new(&schema, &bindings, None);

        let first: Vec<String> = refs.iter().map(|r| index.register(r)).collect();
        let imports = index.imports().len();
        let second: Vec<String> = refs.iter().map(|r| index.register(r)).collect();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(index.imports().len(), imports);
        for (r, name) in refs.iter().zip(&first) {
            prop_assert_eq!(index.resolve_short_name(r), name.clone());
        }
    }

    /// Property: pointed-to resolution is defined exactly for pointers
    #[test]
    fn proptest_pointed_to_only_for_pointers(ty in arb_type_ref()) {
        let schema = Schema::default();
        let bindings = TypeBindingTable::new();
        let mut index = TypeIndex::new(&schema, &bindings, None);
        index.register(&ty);

        let pointed = index.resolve_pointed_to_short_name(&ty);

        prop_assert_eq!(pointed.is_some(), matches!(ty, TypeRef::Pointer(_)));
        if let TypeRef::Pointer(inner) = &ty {
            prop_assert_eq!(pointed, Some(index.resolve_short_name(inner)));
        }
    }
}
