#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("Int", TypeRef::named("Int"))]
#[test_case("Box?", TypeRef::pointer(TypeRef::named("Box")))]
#[test_case("[String]", TypeRef::list(TypeRef::named("String")))]
#[test_case("[Exec?]?", TypeRef::pointer(TypeRef::list(TypeRef::pointer(TypeRef::named("Exec")))))]
#[test_case("  FSID  ", TypeRef::named("FSID"))]
fn TypeRef___parse___builds_expected_shape(notation: &str, expected: TypeRef) {
    let parsed: TypeRef = notation.parse().unwrap();

    assert_eq!(parsed, expected);
}

#[test_case("")]
#[test_case("[Int")]
#[test_case("Int]")]
#[test_case("?")]
#[test_case("1Int")]
#[test_case("Foo Bar")]
fn TypeRef___parse_malformed___returns_invalid_type_ref(notation: &str) {
    let result = notation.parse::<TypeRef>();

    assert!(matches!(result, Err(SchemaError::InvalidTypeRef(_))));
}

#[test]
fn TypeRef___display___uses_compact_notation() {
    let ty = TypeRef::pointer(TypeRef::list(TypeRef::named("Exec")));

    assert_eq!(ty.to_string(), "[Exec]?");
}

#[test]
fn TypeRef___pointee_of_pointer___returns_inner() {
    let ty = TypeRef::pointer(TypeRef::named("Box"));

    assert_eq!(ty.pointee(), Some(&TypeRef::named("Box")));
}

#[test]
fn TypeRef___pointee_of_list___returns_none() {
    let ty = TypeRef::list(TypeRef::named("Box"));

    assert_eq!(ty.pointee(), None);
}

#[test]
fn TypeRef___deserialize___accepts_notation_string() {
    let ty: TypeRef = serde_json::from_str(r#""[Int]?""#).unwrap();

    assert_eq!(ty, TypeRef::pointer(TypeRef::list(TypeRef::named("Int"))));
}

#[test]
fn TypeRef___deserialize_malformed___fails() {
    let result = serde_json::from_str::<TypeRef>(r#""[Int""#);

    assert!(result.is_err());
}

#[test]
fn TypeRef___serialize___writes_notation_string() {
    let json = serde_json::to_string(&TypeRef::pointer(TypeRef::named("Box"))).unwrap();

    assert_eq!(json, r#""Box?""#);
}
