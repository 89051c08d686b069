use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use xadapt_core::{AdapterRegistry, RewritePass, Severity};
use xadapt_ir::ClassModel;

use super::{UnwrapOrExit, collect_specs};

#[derive(Args)]
pub struct ApplyCommand {
    /// Path to the class model JSON produced by the binding compiler
    #[arg(short, long)]
    pub model: PathBuf,

    /// Inline adapter specifications: whitespace-separated
    /// 'adapterType,boundType,valueType' tokens
    #[arg(short, long)]
    pub adapters: Option<String>,

    /// Path to an xadapt.toml adapter manifest
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Where to write the rewritten model (defaults to rewriting in place)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress warnings and the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Print informational diagnostics
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl ApplyCommand {
    /// Run the apply command
    pub fn run(&self) -> Result<()> {
        if self.adapters.is_none() && self.manifest.is_none() {
            bail!("no adapter specifications given; pass --adapters and/or --manifest");
        }

        // Configuration is resolved before the model is even read, so a bad
        // specification can never leave a half-rewritten model behind.
        let specs = collect_specs(self.manifest.as_ref(), self.adapters.as_deref()).unwrap_or_exit();

        let mut diagnostics = Vec::new();
        let registry = AdapterRegistry::from_specs(&specs, &mut diagnostics);

        let content = std::fs::read_to_string(&self.model)
            .wrap_err_with(|| format!("failed to read model '{}'", self.model.display()))?;
        let mut model: ClassModel = serde_json::from_str(&content)
            .wrap_err_with(|| format!("failed to parse model '{}'", self.model.display()))?;

        let pass = RewritePass::new(registry);
        let outcome = pass.run(&mut model);
        diagnostics.extend(outcome.diagnostics.iter().cloned());

        for diag in &diagnostics {
            match diag.severity {
                Severity::Error => eprintln!("{diag}"),
                Severity::Warning if !self.quiet => eprintln!("{diag}"),
                Severity::Info if self.verbose => println!("{diag}"),
                _ => {}
            }
        }

        let target = self.output.as_ref().unwrap_or(&self.model);
        let json = serde_json::to_string_pretty(&model).wrap_err("failed to serialize model")?;
        std::fs::write(target, json)
            .wrap_err_with(|| format!("failed to write model '{}'", target.display()))?;

        if !self.quiet {
            println!(
                "Rewrote {} field(s) across {} class(es) -> {}",
                outcome.fields_rewritten,
                outcome.classes_visited,
                target.display()
            );
        }

        // Skipped fields were reported above; unrelated rewrites are kept,
        // but the run still signals failure.
        if outcome.has_errors() {
            std::process::exit(1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use xadapt_ir::{ClassDef, Field, Method};

    use super::*;

    fn flag_model() -> ClassModel {
        let mut class = ClassDef::new("pkg.Document");
        class.fields.push(Field::new("flag", "pkg.TTrueFalse"));
        class
            .methods
            .push(Method::getter("isFlag", "pkg.TTrueFalse"));

        let mut model = ClassModel::new();
        model.classes.push(class);
        model
    }

    fn write_model(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("model.json");
        let json = serde_json::to_string_pretty(&flag_model()).unwrap();
        std::fs::write(&path, json).unwrap();
        path
    }

    fn read_model(path: &std::path::Path) -> ClassModel {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    fn command(model: PathBuf) -> ApplyCommand {
        ApplyCommand {
            model,
            adapters: Some("pkg.BoolAdapter,pkg.TTrueFalse,bool".to_string()),
            manifest: None,
            output: None,
            quiet: true,
            verbose: false,
        }
    }

    #[test]
    fn test_apply_rewrites_model_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let model_path = write_model(&dir);

        command(model_path.clone()).run().unwrap();

        let model = read_model(&model_path);
        assert_eq!(model.classes[0].fields[0].ty.full_name(), "bool");
        assert_eq!(model.classes[0].fields[0].annotations.len(), 1);
    }

    #[test]
    fn test_apply_writes_to_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let model_path = write_model(&dir);
        let out_path = dir.path().join("rewritten.json");

        let mut cmd = command(model_path.clone());
        cmd.output = Some(out_path.clone());
        cmd.run().unwrap();

        // The input model stays as the compiler produced it; the rewrite
        // lands in the output file.
        let original = read_model(&model_path);
        assert_eq!(
            original.classes[0].fields[0].ty.full_name(),
            "pkg.TTrueFalse"
        );

        let rewritten = read_model(&out_path);
        assert_eq!(rewritten.classes[0].fields[0].ty.full_name(), "bool");
    }

    #[test]
    fn test_apply_reads_manifest_file() {
        let dir = tempfile::tempdir().unwrap();
        let model_path = write_model(&dir);
        let manifest_path = dir.path().join("xadapt.toml");
        std::fs::write(
            &manifest_path,
            r#"
            [[adapters]]
            class = "pkg.BoolAdapter"
            bound = "pkg.TTrueFalse"
            value = "bool"
            "#,
        )
        .unwrap();

        let mut cmd = command(model_path.clone());
        cmd.adapters = None;
        cmd.manifest = Some(manifest_path);
        cmd.run().unwrap();

        let model = read_model(&model_path);
        assert_eq!(model.classes[0].fields[0].ty.full_name(), "bool");
    }

    #[test]
    fn test_apply_without_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmd = command(dir.path().join("model.json"));
        cmd.adapters = None;

        assert!(cmd.run().is_err());
    }
}
