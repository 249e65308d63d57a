#![deny(missing_docs)]

//! # Generator Pipeline
//!
//! Runs synthesis and emission for every resource of a model and persists the results.
//!
//! Every resource is rendered in memory before anything touches the filesystem,
//! so a render failure leaves the output directory untouched.

use crate::emitter::Emitter;
use crate::error::AppResult;
use crate::model::{CodegenInfo, ResourceInterface};
use crate::settings::GeneratorSettings;
use crate::strategies::{JaxRsBinding, TargetBinding};
use crate::synthesizer::InterfaceSynthesizer;
use std::fs;
use std::path::{Path, PathBuf};

/// One rendered compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Fully qualified interface name.
    pub qualified_name: String,
    /// Path relative to the output root (`org/acme/api/Pets.java`).
    pub relative_path: PathBuf,
    /// Java source text.
    pub content: String,
}

/// Generates Java sources from a normalized model.
pub struct Generator<'a, B: TargetBinding = JaxRsBinding> {
    settings: &'a GeneratorSettings,
    binding: B,
}

impl<'a> Generator<'a> {
    /// Creates a JAX-RS generator for the configured namespace.
    pub fn new(settings: &'a GeneratorSettings) -> Self {
        Self {
            settings,
            binding: JaxRsBinding::new(settings.namespace),
        }
    }
}

impl<'a, B: TargetBinding> Generator<'a, B> {
    /// Creates a generator with a custom target binding.
    pub fn with_binding(settings: &'a GeneratorSettings, binding: B) -> Self {
        Self { settings, binding }
    }

    /// Renders a single resource.
    pub fn generate_resource(
        &self,
        info: &CodegenInfo,
        resource: &ResourceInterface,
    ) -> AppResult<GeneratedSource> {
        let model = InterfaceSynthesizer::new(self.settings).synthesize(&info.context_root, resource)?;
        let content = Emitter::new(&self.binding, &self.settings.formatter).emit(&model)?;

        let mut relative_path: PathBuf = model.package.split('.').filter(|s| !s.is_empty()).collect();
        relative_path.push(format!("{}.java", model.name));

        let qualified_name = if model.package.is_empty() {
            model.name.clone()
        } else {
            format!("{}.{}", model.package, model.name)
        };

        Ok(GeneratedSource {
            qualified_name,
            relative_path,
            content,
        })
    }

    /// Renders every resource of `info`, in model order. Fails on the first broken resource.
    pub fn generate(&self, info: &CodegenInfo) -> AppResult<Vec<GeneratedSource>> {
        self.settings.validate()?;
        tracing::debug!(
            project = %info.name,
            resources = info.interfaces.len(),
            reactive = self.settings.reactive,
            return_response = self.settings.return_response,
            "Generating interfaces"
        );

        info.interfaces
            .iter()
            .map(|resource| {
                self.generate_resource(info, resource).inspect_err(|e| {
                    tracing::error!(resource = %resource.name, error = %e, "Generation failed");
                })
            })
            .collect()
    }
}

/// Writes rendered sources below `out_dir`, creating package directories as needed.
pub fn write_sources(out_dir: &Path, sources: &[GeneratedSource]) -> AppResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let path = out_dir.join(&source.relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &source.content)?;
        tracing::info!(interface = %source.qualified_name, path = %path.display(), "Wrote interface");
        written.push(path);
    }
    Ok(written)
}
