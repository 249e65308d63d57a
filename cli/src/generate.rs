#![deny(missing_docs)]

//! # Generate Command
//!
//! Resolves settings, discovers model files and writes the generated interfaces.

use std::path::{Path, PathBuf};

use jaxrs_gen_core::{write_sources, CodegenInfo, Generator, GeneratorSettings};
use walkdir::WalkDir;

use crate::error::{CliError, CliResult};

/// Directory searched for models when neither `--spec` nor `--input-base-dir` is given.
const DEFAULT_INPUT_BASE_DIR: &str = "src/main/openapi";

/// Arguments for the generate command.
///
/// Flags override values read from `--config`.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Settings file (YAML or JSON).
    #[clap(long, env = "JAXRS_GEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Model file to generate from. Relative paths resolve against the input base dir.
    #[clap(long, env = "JAXRS_GEN_SPEC")]
    pub spec: Option<PathBuf>,

    /// Directory searched for model files when no spec is given.
    #[clap(long, env = "JAXRS_GEN_INPUT_BASE_DIR")]
    pub input_base_dir: Option<PathBuf>,

    /// Root namespace for generated types.
    #[clap(long, env = "JAXRS_GEN_BASE_PACKAGE")]
    pub base_package: Option<String>,

    /// Wrap return types in an asynchronous result by default.
    #[clap(long, env = "JAXRS_GEN_REACTIVE")]
    pub reactive: Option<bool>,

    /// Use Mutiny `Uni` instead of `CompletionStage`.
    #[clap(long, env = "JAXRS_GEN_MUTINY")]
    pub mutiny: Option<bool>,

    /// Wrap return types in a response envelope.
    #[clap(long, env = "JAXRS_GEN_RETURN_RESPONSE")]
    pub return_response: Option<bool>,

    /// Output root for generated sources.
    #[clap(long, short, default_value = "target/generated-sources/jaxrs")]
    pub output_dir: PathBuf,
}

/// Merges the settings file (if any) with command line overrides.
pub fn resolve_settings(args: &GenerateArgs) -> CliResult<GeneratorSettings> {
    let mut settings = match &args.config {
        Some(path) => GeneratorSettings::load(path)?,
        None => GeneratorSettings::default(),
    };

    if let Some(spec) = &args.spec {
        settings.spec = Some(spec.clone());
    }
    if let Some(dir) = &args.input_base_dir {
        settings.input_base_dir = Some(dir.clone());
    }
    if let Some(package) = &args.base_package {
        settings.base_package = package.clone();
    }
    if let Some(reactive) = args.reactive {
        settings.reactive = reactive;
    }
    if let Some(mutiny) = args.mutiny {
        settings = settings.with_mutiny(mutiny);
    }
    if let Some(return_response) = args.return_response {
        settings.return_response = return_response;
    }

    settings.validate()?;
    Ok(settings)
}

/// Lists the model files to process, in a stable order.
pub fn discover_specs(settings: &GeneratorSettings) -> CliResult<Vec<PathBuf>> {
    if let Some(spec) = settings.resolved_spec() {
        if !spec.is_file() {
            return Err(CliError::General(format!(
                "Model file not found: {}",
                spec.display()
            )));
        }
        return Ok(vec![spec]);
    }

    let base = settings
        .input_base_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_BASE_DIR));
    if !base.is_dir() {
        return Err(CliError::General(format!(
            "Input base directory not found: {}",
            base.display()
        )));
    }

    let mut specs = Vec::new();
    for entry in WalkDir::new(&base).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_model_file(entry.path()) {
            specs.push(entry.into_path());
        }
    }
    Ok(specs)
}

fn is_model_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| matches!(ext, "json" | "yaml" | "yml"))
}

/// Executes the generation.
///
/// Every model is rendered before any file is written.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let settings = resolve_settings(args)?;
    let specs = discover_specs(&settings)?;
    if specs.is_empty() {
        tracing::warn!("No model files found, nothing to generate");
        return Ok(());
    }

    let generator = Generator::new(&settings);
    let mut sources = Vec::new();
    for spec in &specs {
        tracing::info!(spec = %spec.display(), "Loading model");
        let info = CodegenInfo::load(spec)?;
        sources.extend(generator.generate(&info)?);
    }

    let written = write_sources(&args.output_dir, &sources)?;
    tracing::info!(
        count = written.len(),
        output = %args.output_dir.display(),
        "Generation finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const MODEL: &str = r##"
name: petstore
contextRoot: /api
interfaces:
  - package: org.acme.api
    name: pets
    path: /pets
    methods:
      - name: getPetById
        path: /{petId}
        method: get
        arguments:
          - name: petId
            in: path
            required: true
            schema:
              type: integer
              format: int64
        return:
          schema:
            $ref: "#/components/schemas/Pet"
"##;

    fn args(output_dir: PathBuf) -> GenerateArgs {
        GenerateArgs {
            config: None,
            spec: None,
            input_base_dir: None,
            base_package: None,
            reactive: None,
            mutiny: None,
            return_response: None,
            output_dir,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("settings.yaml");
        fs::write(&config, "reactive: true\nbase-package: org.file\n").unwrap();

        let mut a = args(dir.path().join("out"));
        a.config = Some(config);
        a.base_package = Some("org.flag".into());
        a.mutiny = Some(true);

        let settings = resolve_settings(&a).unwrap();
        assert!(settings.reactive);
        assert_eq!(settings.base_package, "org.flag");
        assert_eq!(
            settings.reactive_implementation.wrapper_type(),
            "io.smallrye.mutiny.Uni"
        );
    }

    #[test]
    fn test_invalid_package_rejected() {
        let dir = tempdir().unwrap();
        let mut a = args(dir.path().join("out"));
        a.base_package = Some("not a package".into());
        assert!(resolve_settings(&a).is_err());
    }

    #[test]
    fn test_discover_specs_in_base_dir() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.yaml"), MODEL).unwrap();
        fs::write(dir.path().join("nested/a.json"), "{}").unwrap();
        fs::write(dir.path().join("README.md"), "ignored").unwrap();

        let settings = GeneratorSettings {
            input_base_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let specs = discover_specs(&settings).unwrap();
        assert_eq!(specs.len(), 2);
        assert!(specs.iter().all(|p| is_model_file(p)));
    }

    #[test]
    fn test_missing_spec_fails() {
        let dir = tempdir().unwrap();
        let settings = GeneratorSettings {
            spec: Some(PathBuf::from("missing.yaml")),
            input_base_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(discover_specs(&settings).is_err());
    }

    #[test]
    fn test_execute_writes_interfaces() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("petstore.yaml"), MODEL).unwrap();

        let mut a = args(dir.path().join("out"));
        a.spec = Some(PathBuf::from("petstore.yaml"));
        a.input_base_dir = Some(dir.path().to_path_buf());
        a.reactive = Some(true);
        a.base_package = Some("org.acme".into());

        execute(&a).unwrap();

        let generated =
            fs::read_to_string(dir.path().join("out/org/acme/api/Pets.java")).unwrap();
        assert!(generated.contains(
            "    CompletionStage<Pet> getPetById(@PathParam(\"petId\") long petId);"
        ));
        assert!(generated.contains("import org.acme.beans.Pet;"));
    }
}
