//! Naming convention utilities for code generation.
//!
//! Schema names follow GraphQL conventions (`camelCase` fields, `PascalCase`
//! types); generated Rust follows Rust conventions.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `camelCase` | [`to_snake_case`] | `camel_case` |
//! | `snake_case` | [`to_pascal_case`] | `SnakeCase` |
//! | `word` | [`capitalize`] | `Word` |
//! | `type` | [`escape_ident`] | `r#type` |
//! | `dockerBuild` | [`to_method_name`] | `docker_build` |
//! | `Box` | [`resolver_struct_name`] | `BoxResolver` |

use std::collections::HashSet;

/// Strict and reserved keywords that need a raw identifier.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Convert camelCase, PascalCase, or kebab-case to snake_case.
///
/// Acronyms stay together: `HTTPServer` becomes `http_server`.
///
/// # Examples
///
/// ```
/// use stubsmith_codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("dockerBuild"), "docker_build");
/// assert_eq!(to_snake_case("exitCode"), "exit_code");
/// assert_eq!(to_snake_case("FSID"), "fsid");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            result.push('_');
            continue;
        }

        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let starts_word = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if starts_word && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert a string to PascalCase.
///
/// Handles snake_case, kebab-case, and already-capitalized input.
///
/// # Examples
///
/// ```
/// use stubsmith_codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
/// assert_eq!(to_pascal_case("Filesystem"), "Filesystem");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_']).map(capitalize).collect()
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Make an identifier safe to emit.
///
/// Keywords become raw identifiers (`r#type`); the few keywords that cannot
/// be raw get a trailing underscore (`self_`).
pub fn escape_ident(ident: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&ident) {
        format!("{ident}_")
    } else if RAW_KEYWORDS.contains(&ident) {
        format!("r#{ident}")
    } else {
        ident.to_string()
    }
}

/// Convert a schema field or argument name to a Rust method/parameter name.
pub fn to_method_name(name: &str) -> String {
    escape_ident(&to_snake_case(name))
}

/// Name of the per-object resolver struct for a schema object.
pub fn resolver_struct_name(object: &str) -> String {
    format!("{}Resolver", to_pascal_case(object))
}

/// Identifiers already used in one generated scope (an `impl` block or a
/// parameter list).
#[derive(Debug, Clone, Default)]
pub struct NameScope {
    taken: HashSet<String>,
}

impl NameScope {
    /// A scope in which `names` are already taken.
    pub fn with_taken<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            taken: names.into_iter().map(str::to_string).collect(),
        }
    }

    /// Claim `ident`, or the first free numbered variant of it (`exit_code1`).
    pub fn claim(&mut self, ident: String) -> String {
        if self.taken.insert(ident.clone()) {
            return ident;
        }

        let base = ident.strip_prefix("r#").unwrap_or(&ident);
        let mut suffix = 1;
        loop {
            let candidate = format!("{base}{suffix}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

/// Returns true if `s` is a plain (non-raw) Rust identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

    valid_start
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RAW_KEYWORDS.contains(&s)
        && !NON_RAW_KEYWORDS.contains(&s)
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
