//! Type reference index.
//!
//! Collects every schema type reference the classifier touches and resolves
//! each one, once, to the short name the generated code uses. Resolution of a
//! named type tries, in order:
//!
//! 1. the [`TypeBindingTable`] (imported from its bound path),
//! 2. built-in scalars (`Int`, `Float`, `String`, `Boolean`, `ID`),
//! 3. types the schema defines as models (imported from the models module
//!    when one is configured),
//!
//! and otherwise falls back to [`PLACEHOLDER_TYPE`]. Fallbacks are logged and
//! recorded, never fatal.
//!
//! Imports are collected in an [`ImportSet`]; a path whose last segment
//! collides with an earlier import or with a type the generated file declares
//! itself is aliased (`use other::Exec as Exec1;`).

use crate::config::GeneratorConfig;
use crate::naming::resolver_struct_name;
use std::collections::{BTreeSet, HashMap};
use stubsmith_core::{Schema, TypeBindingTable, TypeRef};
use tracing::{debug, warn};

/// Short name used for references that cannot be resolved.
pub const PLACEHOLDER_TYPE: &str = "()";

/// Registry of resolved type references.
#[derive(Debug, Clone)]
pub struct TypeIndex {
    bound: HashMap<String, String>,
    models: BTreeSet<String>,
    models_module: Option<String>,
    names: HashMap<TypeRef, String>,
    imports: ImportSet,
    unresolved: Vec<String>,
}

impl TypeIndex {
    /// Create an empty index for one generation run.
    ///
    /// The per-object resolver struct names are reserved up front so no
    /// import can shadow them.
    pub fn new(schema: &Schema, bindings: &TypeBindingTable, models_module: Option<&str>) -> Self {
        let bound = bindings
            .iter()
            .map(|(name, binding)| (name.to_string(), binding.target.clone()))
            .collect();

        let models = schema
            .objects
            .iter()
            .map(|o| o.name.as_str())
            .chain(schema.types.iter().map(|t| t.name.as_str()))
            .filter(|name| schema.defines_model(name))
            .map(str::to_string)
            .collect();

        let mut imports = ImportSet::default();
        for object in &schema.objects {
            imports.reserve(&resolver_struct_name(&object.name));
        }

        Self {
            bound,
            models,
            models_module: models_module.map(str::to_string),
            names: HashMap::new(),
            imports,
            unresolved: Vec::new(),
        }
    }

    /// Create an index for a run with `config`, reserving its root resolver
    /// type name as well.
    pub fn for_config(schema: &Schema, bindings: &TypeBindingTable, config: &GeneratorConfig) -> Self {
        let mut index = Self::new(schema, bindings, config.models_module.as_deref());
        index.reserve(&config.resolver_type);
        index
    }

    /// Keep imports from taking `name`, a type the generated file declares.
    pub fn reserve(&mut self, name: &str) {
        self.imports.reserve(name);
    }

    /// Record a type reference, resolving it the first time it is seen.
    ///
    /// Returns the short name. Registering the same reference again returns
    /// the same name without touching the imports.
    pub fn register(&mut self, ty: &TypeRef) -> String {
        if let Some(existing) = self.names.get(ty) {
            return existing.clone();
        }

        let short = match ty {
            TypeRef::Named(name) => self.resolve_named(name),
            TypeRef::Pointer(inner) => format!("Option<{}>", self.register(inner)),
            TypeRef::List(inner) => format!("Vec<{}>", self.register(inner)),
        };

        debug!(type_ref = %ty, short_name = %short, "registered type reference");
        self.names.insert(ty.clone(), short.clone());
        short
    }

    /// Import a Rust path that does not come from the schema (context and
    /// error types) and return its short name.
    pub fn register_path(&mut self, path: &str) -> String {
        self.imports.add(path)
    }

    /// Short name of a registered reference.
    ///
    /// An unregistered reference resolves to [`PLACEHOLDER_TYPE`].
    pub fn resolve_short_name(&self, ty: &TypeRef) -> String {
        match self.names.get(ty) {
            Some(name) => name.clone(),
            None => {
                warn!(type_ref = %ty, "type reference was never registered; using placeholder");
                PLACEHOLDER_TYPE.to_string()
            }
        }
    }

    /// Short name of the type one pointer level down.
    ///
    /// Returns `None` when `ty` is not a pointer.
    pub fn resolve_pointed_to_short_name(&self, ty: &TypeRef) -> Option<String> {
        ty.pointee().map(|inner| self.resolve_short_name(inner))
    }

    /// Schema type names that fell back to the placeholder, in first-seen order.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    fn resolve_named(&mut self, name: &str) -> String {
        if let Some(target) = self.bound.get(name) {
            let target = target.clone();
            return self.imports.add(&target);
        }

        if let Some(scalar) = builtin_scalar(name) {
            return scalar.to_string();
        }

        if self.models.contains(name) {
            return match &self.models_module {
                Some(module) => {
                    let path = format!("{module}::{name}");
                    self.imports.add(&path)
                }
                None => {
                    if self.imports.is_reserved(name) {
                        warn!(
                            type_name = name,
                            "model type shares its name with a generated type; set models_module to import it"
                        );
                    }
                    name.to_string()
                }
            };
        }

        warn!(
            type_name = name,
            placeholder = PLACEHOLDER_TYPE,
            "no binding or model for schema type; using placeholder"
        );
        self.unresolved.push(name.to_string());
        PLACEHOLDER_TYPE.to_string()
    }
}

/// Rust type for a built-in schema scalar.
pub fn builtin_scalar(name: &str) -> Option<&'static str> {
    match name {
        "Int" => Some("i32"),
        "Float" => Some("f64"),
        "String" | "ID" => Some("String"),
        "Boolean" | "Bool" => Some("bool"),
        _ => None,
    }
}

/// `use` declarations needed by the generated file.
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    imports: Vec<Import>,
    reserved: BTreeSet<String>,
}

/// One `use` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub path: String,
    pub alias: Option<String>,
}

impl Import {
    /// Name the import is referred to by.
    pub fn short_name(&self) -> &str {
        self.alias
            .as_deref()
            .unwrap_or_else(|| last_segment(&self.path))
    }
}

impl std::fmt::Display for Import {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} as {alias}", self.path),
            None => write!(f, "{}", self.path),
        }
    }
}

impl ImportSet {
    /// Import `path` and return the name to refer to it by.
    ///
    /// Paths without `::` (primitives, prelude types) and generic paths are
    /// used verbatim and not imported.
    pub fn add(&mut self, path: &str) -> String {
        if !path.contains("::") || path.contains('<') {
            return path.to_string();
        }

        if let Some(existing) = self.imports.iter().find(|i| i.path == path) {
            return existing.short_name().to_string();
        }

        let base = last_segment(path);
        let mut short = base.to_string();
        let mut suffix = 0;
        while self.is_taken(&short) {
            suffix += 1;
            short = format!("{base}{suffix}");
        }

        let alias = (short != base).then(|| short.clone());
        self.imports.push(Import {
            path: path.to_string(),
            alias,
        });
        short
    }

    /// Keep `name` from being used as an import's short name.
    pub fn reserve(&mut self, name: &str) {
        self.reserved.insert(name.to_string());
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    fn is_taken(&self, name: &str) -> bool {
        self.is_reserved(name) || self.imports.iter().any(|i| i.short_name() == name)
    }

    /// Imports sorted by path.
    pub fn sorted(&self) -> Vec<&Import> {
        let mut imports: Vec<&Import> = self.imports.iter().collect();
        imports.sort_by(|a, b| a.path.cmp(&b.path));
        imports
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
