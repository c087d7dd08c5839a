//! stubsmith-codegen - Resolver stub generation
//!
//! Turns a [`Schema`](stubsmith_core::Schema) into a Rust source file holding
//! one resolver stub per field that needs custom logic.
//!
//! # Architecture
//!
//! ```text
//! Schema + TypeBindingTable
//!     ↓
//!  [Classifier]  ──registers types──→  [TypeIndex]
//!     ↓                                     ↓
//!  Classification ──────[ModelBuilder]──────┘
//!     ↓
//!  EmissionModel
//!     ↓
//!  [Emitter] (tinytemplate) → resolvers.rs
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use stubsmith_codegen::{Config, Generator};
//! use stubsmith_core::Schema;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_file("stubsmith.toml")?;
//! let schema = Schema::from_file("schema.json")?;
//!
//! let report = Generator::new(config)?.generate(&schema)?;
//! println!("{} stubs written to {}", report.resolvers, report.output.display());
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod config;
pub mod emit;
mod error;
pub mod generator;
pub mod index;
pub mod model;
pub mod naming;

pub use classify::{Classification, Classifier, NOT_IMPLEMENTED};
pub use config::{Config, GeneratorConfig};
pub use emit::{DEFAULT_TEMPLATE, Emitter, PRESERVE_MARKER};
pub use error::{CodegenError, CodegenResult};
pub use generator::{GenerationReport, Generator};
pub use index::{PLACEHOLDER_TYPE, TypeIndex};
pub use model::{EmissionModel, ModelBuilder, Resolver};
