#![deny(missing_docs)]

//! # JAX-RS Binding
//!
//! Implementation of the `TargetBinding` trait for JAX-RS and Bean Validation.

use crate::interface::{BindingMarker, HttpMethod, ValidationMarker};
use crate::model::{AnnotationDirective, AnnotationValue};
use crate::settings::Namespace;
use crate::strategies::traits::TargetBinding;

/// JAX-RS annotations under the `jakarta` or `javax` namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaxRsBinding {
    namespace: Namespace,
}

impl JaxRsBinding {
    /// Creates a binding for `namespace`.
    pub fn new(namespace: Namespace) -> Self {
        Self { namespace }
    }

    fn ws_rs(&self, simple: &str) -> String {
        format!("{}.ws.rs.{}", self.namespace.root(), simple)
    }

    fn constraint(&self, simple: &str) -> String {
        format!("{}.validation.constraints.{}", self.namespace.root(), simple)
    }
}

/// Quotes and escapes `s` as a Java string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Renders `{"a", "b"}`.
pub fn string_array_literal(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| string_literal(v)).collect();
    format!("{{{}}}", items.join(", "))
}

fn annotation(name: String) -> AnnotationDirective {
    AnnotationDirective {
        name,
        values: Vec::new(),
    }
}

fn with_value(name: String, literal: String) -> AnnotationDirective {
    with_named(name, vec![("value", literal)])
}

fn with_named(name: String, values: Vec<(&str, String)>) -> AnnotationDirective {
    AnnotationDirective {
        name,
        values: values
            .into_iter()
            .map(|(name, literal)| AnnotationValue {
                name: name.to_string(),
                literal,
            })
            .collect(),
    }
}

impl TargetBinding for JaxRsBinding {
    fn interface_doc(&self) -> &str {
        "A JAX-RS interface. An implementation of this interface must be provided."
    }

    fn path(&self, path: &str) -> AnnotationDirective {
        with_value(self.ws_rs("Path"), string_literal(path))
    }

    fn http_method(&self, method: HttpMethod) -> AnnotationDirective {
        annotation(self.ws_rs(&method.to_string()))
    }

    fn produces(&self, media_types: &[String]) -> AnnotationDirective {
        with_value(self.ws_rs("Produces"), string_array_literal(media_types))
    }

    fn consumes(&self, media_types: &[String]) -> AnnotationDirective {
        with_value(self.ws_rs("Consumes"), string_array_literal(media_types))
    }

    fn binding(&self, marker: &BindingMarker) -> Option<AnnotationDirective> {
        let (simple, name) = match marker {
            BindingMarker::Path(name) => ("PathParam", name),
            BindingMarker::Query(name) => ("QueryParam", name),
            BindingMarker::Header(name) => ("HeaderParam", name),
            BindingMarker::Cookie(name) => ("CookieParam", name),
            BindingMarker::NoBinding => return None,
        };
        Some(with_value(self.ws_rs(simple), string_literal(name)))
    }

    fn validation(&self, marker: &ValidationMarker) -> AnnotationDirective {
        match marker {
            ValidationMarker::NotNull => annotation(self.constraint("NotNull")),
            ValidationMarker::Min(v) => with_value(self.constraint("Min"), v.to_string()),
            ValidationMarker::Max(v) => with_value(self.constraint("Max"), v.to_string()),
            ValidationMarker::DecimalMin(v) => {
                with_value(self.constraint("DecimalMin"), string_literal(v))
            }
            ValidationMarker::DecimalMax(v) => {
                with_value(self.constraint("DecimalMax"), string_literal(v))
            }
            ValidationMarker::Size { min, max } => {
                let mut values = Vec::new();
                if let Some(min) = min {
                    values.push(("min", min.to_string()));
                }
                if let Some(max) = max {
                    values.push(("max", max.to_string()));
                }
                with_named(self.constraint("Size"), values)
            }
            ValidationMarker::Pattern(regex) => {
                with_named(self.constraint("Pattern"), vec![("regexp", string_literal(regex))])
            }
        }
    }
}
