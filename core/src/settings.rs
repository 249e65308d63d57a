#![deny(missing_docs)]

//! # Generator Settings
//!
//! Process-wide options resolved once before generation and passed explicitly
//! into the type mapper, the synthesizer and the emitter.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default root namespace for generated types.
pub const DEFAULT_BASE_PACKAGE: &str = "org.openapi.quarkus";

/// All generation options.
///
/// Deserialization goes through [`SettingsFile`], which also accepts the `mutiny` switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "SettingsFile")]
pub struct GeneratorSettings {
    /// Wrap return types in an asynchronous result by default.
    pub reactive: bool,
    /// Which asynchronous wrapper to use.
    pub reactive_implementation: ReactiveImplementation,
    /// Wrap return types in a response envelope.
    pub return_response: bool,
    /// Root namespace for generated types.
    pub base_package: String,
    /// Package of generated beans. Defaults to `<base-package>.beans`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bean_package: Option<String>,
    /// Model file to generate from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<PathBuf>,
    /// Directory searched for model files; also the base of a relative `spec`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_base_dir: Option<PathBuf>,
    /// Top-level JAX-RS namespace.
    pub namespace: Namespace,
    /// Naming convention options.
    pub naming: NamingConvention,
    /// Options handed to the emitter unchanged.
    pub formatter: FormatterOptions,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            reactive: false,
            reactive_implementation: ReactiveImplementation::default(),
            return_response: false,
            base_package: DEFAULT_BASE_PACKAGE.to_string(),
            bean_package: None,
            spec: None,
            input_base_dir: None,
            namespace: Namespace::default(),
            naming: NamingConvention::default(),
            formatter: FormatterOptions::default(),
        }
    }
}

/// Settings as written in a file. `mutiny`, when present, overrides
/// `reactive-implementation`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
struct SettingsFile {
    mutiny: Option<bool>,
    reactive: bool,
    reactive_implementation: ReactiveImplementation,
    return_response: bool,
    base_package: String,
    bean_package: Option<String>,
    spec: Option<PathBuf>,
    input_base_dir: Option<PathBuf>,
    namespace: Namespace,
    naming: NamingConvention,
    formatter: FormatterOptions,
}

impl Default for SettingsFile {
    fn default() -> Self {
        let d = GeneratorSettings::default();
        Self {
            mutiny: None,
            reactive: d.reactive,
            reactive_implementation: d.reactive_implementation,
            return_response: d.return_response,
            base_package: d.base_package,
            bean_package: d.bean_package,
            spec: d.spec,
            input_base_dir: d.input_base_dir,
            namespace: d.namespace,
            naming: d.naming,
            formatter: d.formatter,
        }
    }
}

impl From<SettingsFile> for GeneratorSettings {
    fn from(file: SettingsFile) -> Self {
        let settings = Self {
            reactive: file.reactive,
            reactive_implementation: file.reactive_implementation,
            return_response: file.return_response,
            base_package: file.base_package,
            bean_package: file.bean_package,
            spec: file.spec,
            input_base_dir: file.input_base_dir,
            namespace: file.namespace,
            naming: file.naming,
            formatter: file.formatter,
        };
        match file.mutiny {
            Some(mutiny) => settings.with_mutiny(mutiny),
            None => settings,
        }
    }
}

impl GeneratorSettings {
    /// Loads settings from a `.json`, `.yaml` or `.yml` file.
    /// Missing keys keep their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => {
                return Err(AppError::Config(format!(
                    "Unsupported settings file extension: {}",
                    path.display()
                )))
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the settings for values generation cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if !is_package_name(&self.base_package) {
            return Err(AppError::Config(format!(
                "Invalid base-package: '{}'",
                self.base_package
            )));
        }
        if let Some(beans) = &self.bean_package {
            if !is_package_name(beans) {
                return Err(AppError::Config(format!("Invalid bean-package: '{}'", beans)));
            }
        }
        if self.formatter.indent_size == 0 && !self.formatter.use_tabs {
            return Err(AppError::Config("formatter.indent-size must be positive".into()));
        }
        Ok(())
    }

    /// Switches between the Mutiny and CompletionStage wrappers.
    pub fn with_mutiny(mut self, mutiny: bool) -> Self {
        self.reactive_implementation = if mutiny {
            ReactiveImplementation::Mutiny
        } else {
            ReactiveImplementation::CompletionStage
        };
        self
    }

    /// Package that generated bean classes live in.
    pub fn bean_package(&self) -> String {
        self.bean_package
            .clone()
            .unwrap_or_else(|| format!("{}.beans", self.base_package))
    }

    /// The configured model file, resolved against `input-base-dir` when relative.
    pub fn resolved_spec(&self) -> Option<PathBuf> {
        let spec = self.spec.as_ref()?;
        match &self.input_base_dir {
            Some(base) if spec.is_relative() => Some(base.join(spec)),
            _ => Some(spec.clone()),
        }
    }
}

fn is_package_name(s: &str) -> bool {
    !s.is_empty()
        && s.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

/// Asynchronous result wrapper implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReactiveImplementation {
    /// `java.util.concurrent.CompletionStage<T>`
    #[default]
    CompletionStage,
    /// `io.smallrye.mutiny.Uni<T>`
    Mutiny,
}

impl ReactiveImplementation {
    /// Fully qualified name of the wrapper type.
    pub fn wrapper_type(&self) -> &'static str {
        match self {
            Self::CompletionStage => "java.util.concurrent.CompletionStage",
            Self::Mutiny => "io.smallrye.mutiny.Uni",
        }
    }
}

/// Top-level package of the JAX-RS API (`jakarta.ws.rs` vs `javax.ws.rs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Namespace {
    /// Jakarta EE 9+
    #[default]
    Jakarta,
    /// Java EE 8 and earlier
    Javax,
}

impl Namespace {
    /// The root package segment.
    pub fn root(&self) -> &'static str {
        match self {
            Self::Jakarta => "jakarta",
            Self::Javax => "javax",
        }
    }
}

/// Naming convention options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct NamingConvention {
    /// Appended to every generated interface name (e.g. "Resource").
    pub interface_suffix: String,
}

/// Whitespace options for rendered sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FormatterOptions {
    /// Spaces per indentation level.
    pub indent_size: usize,
    /// Indent with tabs instead of spaces.
    pub use_tabs: bool,
    /// Line separator.
    pub line_ending: LineEnding,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            indent_size: 4,
            use_tabs: false,
            line_ending: LineEnding::Lf,
        }
    }
}

impl FormatterOptions {
    /// One indentation level.
    pub fn indent(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_size)
        }
    }

    /// The line separator string.
    pub fn newline(&self) -> &'static str {
        match self.line_ending {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Line separator choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = GeneratorSettings::default();
        assert!(!s.reactive);
        assert!(!s.return_response);
        assert_eq!(s.bean_package(), "org.openapi.quarkus.beans");
        assert_eq!(s.namespace.root(), "jakarta");
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_settings() {
        let yaml = r#"
reactive: true
reactive-implementation: mutiny
base-package: org.acme
formatter:
  indent-size: 2
"#;
        let s: GeneratorSettings = serde_yaml::from_str(yaml).unwrap();
        assert!(s.reactive);
        assert_eq!(s.reactive_implementation, ReactiveImplementation::Mutiny);
        assert_eq!(s.base_package, "org.acme");
        assert_eq!(s.formatter.indent(), "  ");
        assert_eq!(s.formatter.newline(), "\n");
        assert!(!s.return_response);
    }

    #[test]
    fn test_mutiny_key_in_file() {
        let s: GeneratorSettings = serde_yaml::from_str("reactive: true\nmutiny: true\n").unwrap();
        assert!(s.reactive);
        assert_eq!(s.reactive_implementation.wrapper_type(), "io.smallrye.mutiny.Uni");

        let s: GeneratorSettings =
            serde_json::from_str(r#"{ "reactive-implementation": "mutiny", "mutiny": false }"#)
                .unwrap();
        assert_eq!(s.reactive_implementation, ReactiveImplementation::CompletionStage);

        let s: GeneratorSettings = serde_yaml::from_str("reactive: true\n").unwrap();
        assert_eq!(s.reactive_implementation, ReactiveImplementation::CompletionStage);
    }

    #[test]
    fn test_with_mutiny_switch() {
        let s = GeneratorSettings::default().with_mutiny(true);
        assert_eq!(s.reactive_implementation.wrapper_type(), "io.smallrye.mutiny.Uni");
        let s = s.with_mutiny(false);
        assert_eq!(
            s.reactive_implementation.wrapper_type(),
            "java.util.concurrent.CompletionStage"
        );
    }

    #[test]
    fn test_validate_rejects_bad_package() {
        let s = GeneratorSettings {
            base_package: "org..acme".into(),
            ..Default::default()
        };
        assert!(matches!(s.validate(), Err(AppError::Config(_))));

        let s = GeneratorSettings {
            base_package: "1org".into(),
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_resolved_spec() {
        let s = GeneratorSettings {
            spec: Some(PathBuf::from("petstore.yaml")),
            input_base_dir: Some(PathBuf::from("/srv/openapi")),
            ..Default::default()
        };
        assert_eq!(
            s.resolved_spec(),
            Some(PathBuf::from("/srv/openapi/petstore.yaml"))
        );

        let s = GeneratorSettings::default();
        assert_eq!(s.resolved_spec(), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "return-response": true, "namespace": "javax" }"#).unwrap();
        let s = GeneratorSettings::load(&path).unwrap();
        assert!(s.return_response);
        assert_eq!(s.namespace, Namespace::Javax);
    }
}
