//! Emission pass.
//!
//! Renders an [`EmissionModel`] through a `tinytemplate` template. The model
//! is first flattened into a serializable view in which every name is
//! already resolved, so templates only interpolate strings and iterate lists.
//!
//! # Template context
//!
//! | Key | Description |
//! |-----|-------------|
//! | `package_name` | Package the output belongs to |
//! | `destination` | File name of the output |
//! | `resolver_type` | Root resolver type name |
//! | `has_root` | Whether any object was classified |
//! | `imports` | `use` paths, sorted |
//! | `objects` | One entry per root object (see [`ObjectView`]) |
//! | `marker` | Preservation marker line |
//! | `remaining_source` | Hand-written code carried over, if any |

use crate::error::{CodegenError, CodegenResult};
use crate::model::{EmissionModel, Resolver};
use crate::naming::{NameScope, resolver_struct_name, to_method_name};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use stubsmith_core::{Argument, SchemaObject};
use tinytemplate::{TinyTemplate, format_unescaped};

/// Built-in template for Rust resolver stubs.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/resolvers.rs.tmpl");

/// Line separating generated code from preserved hand-written code.
pub const PRESERVE_MARKER: &str =
    "// ---- stubsmith: code below this line is preserved on regeneration ----";

const TEMPLATE_NAME: &str = "resolvers";

/// Names the generated method signature uses for its fixed parameters.
const RESERVED_PARAMS: &[&str] = &["ctx", "obj"];

/// Renders emission models with one template.
pub struct Emitter<'t> {
    template: &'t str,
}

impl<'t> Emitter<'t> {
    pub fn new(template: &'t str) -> Self {
        Self { template }
    }

    /// Render `model` for the file at `destination`.
    pub fn render(&self, model: &EmissionModel<'_>, destination: &Path) -> CodegenResult<String> {
        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&format_unescaped);
        tt.add_template(TEMPLATE_NAME, self.template)?;

        let view = FileView::new(model, destination);
        Ok(tt.render(TEMPLATE_NAME, &view)?)
    }
}

/// Template context for one output file.
#[derive(Debug, Serialize)]
pub struct FileView {
    pub package_name: String,
    pub destination: String,
    pub resolver_type: String,
    pub has_root: bool,
    pub imports: Vec<String>,
    pub objects: Vec<ObjectView>,
    pub marker: &'static str,
    pub remaining_source: Option<String>,
}

/// Template context for one root object.
#[derive(Debug, Serialize)]
pub struct ObjectView {
    /// Schema name.
    pub name: String,
    /// Accessor method on the root resolver.
    pub accessor: String,
    /// Per-object resolver struct (`BoxResolver`).
    pub resolver_name: String,
    /// Root resolver type the per-object struct borrows.
    pub root_type: String,
    /// Rust type the object resolves to.
    pub obj_type: String,
    pub doc_lines: Vec<String>,
    pub resolvers: Vec<ResolverView>,
}

/// Template context for one resolver stub.
#[derive(Debug, Serialize)]
pub struct ResolverView {
    pub field: String,
    pub method: String,
    pub doc_lines: Vec<String>,
    pub context_type: String,
    pub error_type: String,
    pub obj_type: String,
    pub args: Vec<ArgView>,
    pub return_type: String,
    pub implementation: String,
}

/// Template context for one stub parameter.
#[derive(Debug, Serialize)]
pub struct ArgView {
    pub name: String,
    pub ty: String,
}

impl FileView {
    pub fn new(model: &EmissionModel<'_>, destination: &Path) -> Self {
        let destination = destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let imports = model
            .index()
            .imports()
            .sorted()
            .iter()
            .map(ToString::to_string)
            .collect();

        let objects = model
            .objects()
            .iter()
            .map(|object| ObjectView::new(model, object))
            .collect();

        Self {
            package_name: model.package_name().to_string(),
            destination,
            resolver_type: model.resolver_type().to_string(),
            has_root: model.has_root(),
            imports,
            objects,
            marker: PRESERVE_MARKER,
            remaining_source: model.remaining_source().map(str::to_string),
        }
    }
}

impl ObjectView {
    fn new(model: &EmissionModel<'_>, object: &SchemaObject) -> Self {
        let obj_type = model.index().resolve_short_name(&object.type_ref());
        let mut methods = NameScope::default();
        let resolvers = model
            .resolvers_for(object)
            .map(|resolver| {
                let method = methods.claim(to_method_name(&resolver.field().name));
                ResolverView::new(model, resolver, method, &obj_type)
            })
            .collect();

        Self {
            name: object.name.clone(),
            accessor: to_method_name(&object.name),
            resolver_name: resolver_struct_name(&object.name),
            root_type: model.resolver_type().to_string(),
            obj_type,
            doc_lines: doc_lines(object.description.as_deref()),
            resolvers,
        }
    }
}

impl ResolverView {
    fn new(
        model: &EmissionModel<'_>,
        resolver: &Resolver<'_>,
        method: String,
        obj_type: &str,
    ) -> Self {
        let field = resolver.field();
        let mut params = NameScope::with_taken(RESERVED_PARAMS.iter().copied());
        let names: Vec<String> = field
            .args
            .iter()
            .map(|arg| params.claim(param_name(&arg.name)))
            .collect();

        let args = field
            .args
            .iter()
            .zip(&names)
            .map(|(arg, name)| ArgView {
                name: name.clone(),
                ty: model.index().resolve_short_name(&arg.ty),
            })
            .collect();

        let mut docs = doc_lines(Some(resolver.comment()));
        docs.extend(argument_docs(&field.args, &names));

        Self {
            field: field.name.clone(),
            method,
            doc_lines: docs,
            context_type: model.context_type().to_string(),
            error_type: model.error_type().to_string(),
            obj_type: obj_type.to_string(),
            args,
            return_type: model.index().resolve_short_name(&field.ty),
            implementation: resolver.implementation().to_string(),
        }
    }
}

/// Doc comment lines for a description, `///` prefix included.
fn doc_lines(description: Option<&str>) -> Vec<String> {
    description
        .unwrap_or_default()
        .trim()
        .lines()
        .map(doc_line)
        .collect()
}

fn doc_line(text: &str) -> String {
    let text = text.trim_end();
    if text.is_empty() {
        "///".to_string()
    } else {
        format!("/// {text}")
    }
}

/// `# Arguments` section for arguments that carry a description or default.
///
/// `names` holds the emitted parameter name of each argument.
fn argument_docs(args: &[Argument], names: &[String]) -> Vec<String> {
    let documented: Vec<(&Argument, &String)> = args
        .iter()
        .zip(names)
        .filter(|(a, _)| a.description.is_some() || a.default_value.is_some())
        .collect();
    if documented.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![
        "///".to_string(),
        "/// # Arguments".to_string(),
        "///".to_string(),
    ];
    for (arg, name) in documented {
        let mut line = format!("/// * `{name}`");
        if let Some(description) = &arg.description {
            line.push_str(" - ");
            line.push_str(description.split_whitespace().collect::<Vec<_>>().join(" ").as_str());
        }
        if let Some(default) = &arg.default_value {
            line.push_str(&format!(" (default: `{default}`)"));
        }
        lines.push(line);
    }
    lines
}

/// Parameter name for a schema argument, clear of the fixed parameters.
fn param_name(name: &str) -> String {
    let param = to_method_name(name);
    if RESERVED_PARAMS.contains(&param.as_str()) {
        format!("{param}_")
    } else {
        param
    }
}

/// Hand-written code following the preservation marker in `existing`.
///
/// Returns `None` when the marker is absent or nothing follows it.
pub fn extract_remaining_source(existing: &str) -> Option<String> {
    let (_, after) = existing.split_once(PRESERVE_MARKER)?;
    let remaining = after.trim_start_matches(['\r', '\n']).trim_end();
    (!remaining.is_empty()).then(|| remaining.to_string())
}

/// Write `contents` to `path` through a temporary file in the same directory.
///
/// The destination is either fully replaced or left untouched; the temporary
/// file is removed on failure.
pub fn write_atomic(path: &Path, contents: &str) -> CodegenResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| CodegenError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
