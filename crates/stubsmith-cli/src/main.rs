//! stubsmith CLI - Resolver stub generator
//!
//! Commands:
//! - `stubsmith generate` - Generate resolver stubs from a schema
//! - `stubsmith check` - Validate configuration and schema, print what would be generated

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stubsmith_core::TypeBindingTable;

mod check;
mod generate;
mod logging;

use logging::LogLevel;

#[derive(Parser)]
#[command(name = "stubsmith")]
#[command(author, version, about = "Resolver stub generator", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate resolver stubs
    Generate {
        /// Path to the schema JSON file
        #[arg(short, long)]
        schema: PathBuf,

        /// Path to stubsmith.toml (default: ./stubsmith.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file, overriding the configured one
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the generated file instead of writing it
        #[arg(long)]
        stdout: bool,

        /// Built-in bindings applied under the configured ones
        #[arg(long, value_enum)]
        preset: Option<Preset>,
    },

    /// Validate configuration and schema without writing anything
    Check {
        /// Path to the schema JSON file
        #[arg(short, long)]
        schema: PathBuf,

        /// Path to stubsmith.toml (default: ./stubsmith.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Built-in bindings applied under the configured ones
        #[arg(long, value_enum)]
        preset: Option<Preset>,
    },
}

/// Built-in binding tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Filesystem, Exec, FSID and SecretID core types
    DaggerCore,
}

impl Preset {
    pub fn bindings(self) -> TypeBindingTable {
        match self {
            Preset::DaggerCore => TypeBindingTable::dagger_core(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level);

    match cli.command {
        Commands::Generate {
            schema,
            config,
            output,
            stdout,
            preset,
        } => {
            let options = generate::GenerateOptions {
                schema,
                config,
                output,
                stdout,
                preset,
            };
            generate::run(&options)?;
        }
        Commands::Check {
            schema,
            config,
            preset,
        } => {
            check::run(&schema, config, preset)?;
        }
    }

    Ok(())
}
