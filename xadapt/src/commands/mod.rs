mod apply;
mod check;

use std::path::PathBuf;

use apply::ApplyCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use xadapt_config::{AdapterSpec, AdaptersManifest, parse_specs_with_source};

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for xadapt_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Gather adapter specifications from the manifest and the inline option,
/// in that order, so inline registrations win under the registry's
/// last-wins rule.
///
/// Fails closed: any malformed entry aborts before a single specification
/// is handed to the registry.
pub(crate) fn collect_specs(
    manifest: Option<&PathBuf>,
    adapters: Option<&str>,
) -> xadapt_config::Result<Vec<AdapterSpec>> {
    let mut specs = Vec::new();
    if let Some(path) = manifest {
        specs.extend(AdaptersManifest::from_file(path)?.into_specs());
    }
    if let Some(src) = adapters {
        specs.extend(parse_specs_with_source(src, "--adapters")?);
    }
    Ok(specs)
}

#[derive(Parser)]
#[command(name = "xadapt")]
#[command(version)]
#[command(about = "Rewrite schema-generated class models to expose adapter value types")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Apply(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Apply configured adapters to a class model
    Apply(ApplyCommand),

    /// Validate adapter specifications without touching a model
    Check(CheckCommand),
}
