use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use xadapt_core::AdapterRegistry;

use super::{UnwrapOrExit, collect_specs};

#[derive(Args)]
pub struct CheckCommand {
    /// Inline adapter specifications: whitespace-separated
    /// 'adapterType,boundType,valueType' tokens
    #[arg(short, long)]
    pub adapters: Option<String>,

    /// Path to an xadapt.toml adapter manifest
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        if self.adapters.is_none() && self.manifest.is_none() {
            bail!("no adapter specifications given; pass --adapters and/or --manifest");
        }

        let specs = collect_specs(self.manifest.as_ref(), self.adapters.as_deref()).unwrap_or_exit();

        let mut diagnostics = Vec::new();
        let registry = AdapterRegistry::from_specs(&specs, &mut diagnostics);

        for diag in &diagnostics {
            eprintln!("{diag}");
        }

        println!("Adapters ({}):", registry.len());
        for (bound, binding) in registry.iter() {
            println!("  {} -> {} (via {})", bound, binding.value, binding.adapter);
        }

        Ok(())
    }
}
