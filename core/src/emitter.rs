#![deny(missing_docs)]

//! # Java Emitter
//!
//! Renders an `InterfaceModel` into Java source text.
//!
//! This module handles:
//! - Model validation (identifiers, qualified names). A malformed model is a render error.
//! - Import collection: `java.lang` and same-package types stay unimported, colliding
//!   simple names stay fully qualified, and the import list is sorted case-insensitively.
//! - Annotation and javadoc rendering through a `TargetBinding`.
//! - Whitespace according to `FormatterOptions`.

use crate::error::{AppError, AppResult};
use crate::interface::{InterfaceModel, MethodModel, ParameterModel};
use crate::model::AnnotationDirective;
use crate::naming::is_reserved_word;
use crate::settings::FormatterOptions;
use crate::strategies::TargetBinding;
use crate::type_mapping::JavaType;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::OnceLock;

/// Renders interface models for one target binding.
pub struct Emitter<'a, B: TargetBinding> {
    binding: &'a B,
    options: &'a FormatterOptions,
}

/// A method with every marker already resolved to an annotation.
struct ResolvedMethod<'m> {
    method: &'m MethodModel,
    annotations: Vec<AnnotationDirective>,
    parameters: Vec<(&'m ParameterModel, Vec<AnnotationDirective>)>,
}

impl<'a, B: TargetBinding> Emitter<'a, B> {
    /// Creates an emitter. `options` are used exactly as given.
    pub fn new(binding: &'a B, options: &'a FormatterOptions) -> Self {
        Self { binding, options }
    }

    /// Renders `model` as a complete compilation unit.
    pub fn emit(&self, model: &InterfaceModel) -> AppResult<String> {
        validate(model)?;

        let interface_path = self.binding.path(&model.path);
        let methods: Vec<ResolvedMethod> = model.methods.iter().map(|m| self.resolve(m)).collect();

        // Collect every referenced class before deciding on imports.
        let mut classes = BTreeSet::new();
        let mut annotations = vec![&interface_path];
        for resolved in &methods {
            resolved.method.return_type.for_each_class(&mut |c: &str| {
                classes.insert(c.to_string());
            });
            annotations.extend(resolved.annotations.iter());
            for (param, param_annotations) in &resolved.parameters {
                param.ty.for_each_class(&mut |c: &str| {
                    classes.insert(c.to_string());
                });
                annotations.extend(param_annotations.iter());
            }
        }
        for annotation in &annotations {
            if !is_qualified_name(&annotation.name) {
                return Err(AppError::Render(format!(
                    "Invalid annotation name: '{}'",
                    annotation.name
                )));
            }
            classes.insert(annotation.name.clone());
        }
        for class in &classes {
            if !is_qualified_name(class) {
                return Err(AppError::Render(format!("Invalid type name: '{}'", class)));
            }
        }

        let imports = ImportTable::new(&model.package, &model.name, &classes);
        let indent = self.options.indent();
        let mut lines: Vec<String> = Vec::new();

        if !model.package.is_empty() {
            lines.push(format!("package {};", model.package));
            lines.push(String::new());
        }
        if !imports.imports.is_empty() {
            for import in &imports.imports {
                lines.push(format!("import {};", import));
            }
            lines.push(String::new());
        }

        push_javadoc(&mut lines, "", self.binding.interface_doc());
        lines.push(render_annotation(&interface_path, &imports));
        lines.push(format!("public interface {} {{", model.name));

        for resolved in &methods {
            lines.push(String::new());
            if let Some(doc) = &resolved.method.doc {
                push_javadoc(&mut lines, &indent, doc);
            }
            for annotation in &resolved.annotations {
                lines.push(format!("{}{}", indent, render_annotation(annotation, &imports)));
            }
            let params: Vec<String> = resolved
                .parameters
                .iter()
                .map(|(param, param_annotations)| {
                    let mut parts: Vec<String> = param_annotations
                        .iter()
                        .map(|a| render_annotation(a, &imports))
                        .collect();
                    parts.push(imports.render_type(&param.ty));
                    parts.push(param.name.clone());
                    parts.join(" ")
                })
                .collect();
            lines.push(format!(
                "{}{} {}({});",
                indent,
                imports.render_type(&resolved.method.return_type),
                resolved.method.name,
                params.join(", ")
            ));
        }
        lines.push("}".to_string());

        let newline = self.options.newline();
        let mut out = lines.join(newline);
        out.push_str(newline);
        Ok(out)
    }

    fn resolve<'m>(&self, method: &'m MethodModel) -> ResolvedMethod<'m> {
        let mut annotations = Vec::new();
        if let Some(path) = &method.path {
            annotations.push(self.binding.path(path));
        }
        annotations.push(self.binding.http_method(method.http_method));
        if !method.produces.is_empty() {
            annotations.push(self.binding.produces(&method.produces));
        }
        if !method.consumes.is_empty() {
            annotations.push(self.binding.consumes(&method.consumes));
        }

        let parameters = method
            .parameters
            .iter()
            .map(|param| {
                let mut param_annotations: Vec<AnnotationDirective> =
                    self.binding.binding(&param.binding).into_iter().collect();
                param_annotations.extend(param.validations.iter().map(|v| self.binding.validation(v)));
                param_annotations.extend(param.annotations.iter().cloned());
                (param, param_annotations)
            })
            .collect();

        ResolvedMethod {
            method,
            annotations,
            parameters,
        }
    }
}

/// Decides which classes are imported and how each class is spelled in the source.
struct ImportTable {
    imports: Vec<String>,
    names: BTreeMap<String, String>,
}

impl ImportTable {
    fn new(package: &str, interface_name: &str, classes: &BTreeSet<String>) -> Self {
        let mut names = BTreeMap::new();
        let mut taken: HashSet<String> = HashSet::new();
        taken.insert(interface_name.to_string());

        // Same-package types shadow java.lang; neither needs an import.
        let mut implicit = Vec::new();
        let mut java_lang = Vec::new();
        let mut candidates = Vec::new();
        for class in classes {
            match split_qualified(class).0 {
                owner if owner.is_empty() || owner == package => implicit.push(class.clone()),
                "java.lang" => java_lang.push(class.clone()),
                _ => candidates.push(class.clone()),
            }
        }

        for class in implicit.into_iter().chain(java_lang) {
            let (_, simple) = split_qualified(&class);
            if taken.insert(simple.to_string()) {
                names.insert(class.clone(), simple.to_string());
            } else {
                names.insert(class.clone(), class.clone());
            }
        }

        candidates.sort_by_key(|c| (c.to_lowercase(), c.clone()));

        let mut imports = Vec::new();
        for class in candidates {
            let (_, simple) = split_qualified(&class);
            if taken.insert(simple.to_string()) {
                names.insert(class.clone(), simple.to_string());
                imports.push(class);
            } else {
                names.insert(class.clone(), class.clone());
            }
        }

        Self { imports, names }
    }

    fn name_of(&self, class: &str) -> String {
        self.names
            .get(class)
            .cloned()
            .unwrap_or_else(|| class.to_string())
    }

    fn render_type(&self, ty: &JavaType) -> String {
        ty.render_with(&|name: &str| self.name_of(name))
    }
}

fn split_qualified(class: &str) -> (&str, &str) {
    match class.rsplit_once('.') {
        Some((owner, simple)) => (owner, simple),
        None => ("", class),
    }
}

fn render_annotation(annotation: &AnnotationDirective, imports: &ImportTable) -> String {
    let name = imports.name_of(&annotation.name);
    match annotation.values.as_slice() {
        [] => format!("@{}", name),
        [only] if only.name == "value" => format!("@{}({})", name, only.literal),
        values => {
            let rendered: Vec<String> = values
                .iter()
                .map(|v| format!("{} = {}", v.name, v.literal))
                .collect();
            format!("@{}({})", name, rendered.join(", "))
        }
    }
}

fn push_javadoc(lines: &mut Vec<String>, indent: &str, text: &str) {
    lines.push(format!("{}/**", indent));
    for line in text.trim().replace("*/", "*&#47;").lines() {
        let line = line.trim_end();
        if line.is_empty() {
            lines.push(format!("{} *", indent));
        } else {
            lines.push(format!("{} * {}", indent, line));
        }
    }
    lines.push(format!("{} */", indent));
}

fn identifier_re() -> &'static Regex {
    static IDENT_RE: OnceLock<Regex> = OnceLock::new();
    IDENT_RE.get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Invalid regex"))
}

fn is_identifier(s: &str) -> bool {
    identifier_re().is_match(s) && !is_reserved_word(s)
}

fn is_qualified_name(s: &str) -> bool {
    s.split('.').all(is_identifier)
}

fn validate(model: &InterfaceModel) -> AppResult<()> {
    if !model.package.is_empty() && !is_qualified_name(&model.package) {
        return Err(AppError::Render(format!("Invalid package name: '{}'", model.package)));
    }
    if !is_identifier(&model.name) {
        return Err(AppError::Render(format!("Invalid interface name: '{}'", model.name)));
    }
    for method in &model.methods {
        if !is_identifier(&method.name) {
            return Err(AppError::Render(format!(
                "Invalid method name '{}' in interface {}",
                method.name, model.name
            )));
        }
        for param in &method.parameters {
            if !is_identifier(&param.name) {
                return Err(AppError::Render(format!(
                    "Invalid parameter name '{}' in method {}",
                    param.name, method.name
                )));
            }
            if param.ty.is_void() {
                return Err(AppError::Render(format!(
                    "Parameter '{}' of method {} cannot be void",
                    param.name, method.name
                )));
            }
        }
    }
    Ok(())
}
