#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// to_snake_case tests

#[test_case("dockerBuild", "docker_build")]
#[test_case("exitCode", "exit_code")]
#[test_case("withEnvVariable", "with_env_variable")]
#[test_case("HTTPServer", "http_server")]
#[test_case("FSID", "fsid")]
#[test_case("Filesystem", "filesystem")]
#[test_case("sha256Sum", "sha256_sum")]
#[test_case("kebab-case", "kebab_case")]
#[test_case("already_snake", "already_snake")]
#[test_case("", "")]
fn to_snake_case___converts(input: &str, expected: &str) {
    assert_eq!(to_snake_case(input), expected);
}

#[test]
fn to_snake_case___underscore_before_capital___no_double_underscore() {
    assert_eq!(to_snake_case("my_Field"), "my_field");
}

// to_pascal_case tests

#[test]
fn to_pascal_case___snake_case___converts() {
    assert_eq!(to_pascal_case("my_plugin"), "MyPlugin");
}

#[test]
fn to_pascal_case___kebab_case___converts() {
    assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
}

#[test]
fn to_pascal_case___already_pascal___unchanged() {
    assert_eq!(to_pascal_case("Filesystem"), "Filesystem");
}

#[test]
fn to_pascal_case___empty___returns_empty() {
    assert_eq!(to_pascal_case(""), "");
}

// capitalize tests

#[test]
fn capitalize___capitalizes_first_letter() {
    assert_eq!(capitalize("hello"), "Hello");
    assert_eq!(capitalize("a"), "A");
    assert_eq!(capitalize(""), "");
}

// escape_ident tests

#[test_case("type", "r#type")]
#[test_case("box", "r#box")]
#[test_case("async", "r#async")]
#[test_case("self", "self_")]
#[test_case("Self", "Self_")]
#[test_case("crate", "crate_")]
#[test_case("open", "open")]
fn escape_ident___escapes_keywords(input: &str, expected: &str) {
    assert_eq!(escape_ident(input), expected);
}

// to_method_name tests

#[test]
fn to_method_name___camel_case_keyword___converts_then_escapes() {
    assert_eq!(to_method_name("Type"), "r#type");
    assert_eq!(to_method_name("dockerBuild"), "docker_build");
}

// is_identifier tests

#[test_case("Resolver", true)]
#[test_case("_private", true)]
#[test_case("Resolver2", true)]
#[test_case("", false)]
#[test_case("2Resolver", false)]
#[test_case("my-resolver", false)]
#[test_case("struct", false)]
#[test_case("Self", false)]
fn is_identifier___validates(input: &str, expected: bool) {
    assert_eq!(is_identifier(input), expected);
}

// resolver_struct_name tests

#[test_case("Box", "BoxResolver")]
#[test_case("git_repository", "GitRepositoryResolver")]
fn resolver_struct_name___appends_suffix(input: &str, expected: &str) {
    assert_eq!(resolver_struct_name(input), expected);
}

// NameScope tests

#[test]
fn NameScope___repeated_name___gets_numbered_suffix() {
    let mut scope = NameScope::default();

    assert_eq!(scope.claim("exit_code".to_string()), "exit_code");
    assert_eq!(scope.claim("exit_code".to_string()), "exit_code1");
    assert_eq!(scope.claim("exit_code".to_string()), "exit_code2");
}

#[test]
fn NameScope___suffix_already_taken___skips_it() {
    let mut scope = NameScope::with_taken(["n", "n1"]);

    assert_eq!(scope.claim("n".to_string()), "n2");
}

#[test]
fn NameScope___raw_identifier___suffixed_without_prefix() {
    let mut scope = NameScope::default();
    scope.claim("r#type".to_string());

    assert_eq!(scope.claim("r#type".to_string()), "type1");
}
