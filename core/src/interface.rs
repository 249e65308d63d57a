#![deny(missing_docs)]

//! # Interface Models
//!
//! Framework-agnostic description of a synthesized interface.
//!
//! The synthesizer fills these structs; the emitter asks a `TargetBinding`
//! how each marker looks in the target framework.

use crate::error::AppError;
use crate::model::AnnotationDirective;
use crate::type_mapping::JavaType;
use std::fmt;
use std::str::FromStr;

/// One synthesized interface.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceModel {
    /// Java package.
    pub package: String,
    /// Interface (class) name.
    pub name: String,
    /// Full resource path (context root + resource path).
    pub path: String,
    /// Operations, in document order.
    pub methods: Vec<MethodModel>,
}

/// One interface method, derived from an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodModel {
    /// Method name.
    pub name: String,
    /// Rendered HTML documentation.
    pub doc: Option<String>,
    /// Sub-path override.
    pub path: Option<String>,
    /// HTTP verb marker.
    pub http_method: HttpMethod,
    /// Response media types; no marker when empty.
    pub produces: Vec<String>,
    /// Request media types; no marker when empty.
    pub consumes: Vec<String>,
    /// Fully wrapped return type.
    pub return_type: JavaType,
    /// Parameters, in document order.
    pub parameters: Vec<ParameterModel>,
}

/// One method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterModel {
    /// Java argument name.
    pub name: String,
    /// Resolved type.
    pub ty: JavaType,
    /// Where the value is read from.
    pub binding: BindingMarker,
    /// Bean validation markers.
    pub validations: Vec<ValidationMarker>,
    /// Extra annotations, attached verbatim after everything else.
    pub annotations: Vec<AnnotationDirective>,
}

/// Per-parameter request binding. Carries the OpenAPI parameter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingMarker {
    /// Path template variable.
    Path(String),
    /// Query string parameter.
    Query(String),
    /// Request header.
    Header(String),
    /// Cookie.
    Cookie(String),
    /// Bound positionally (request body) or unclassified.
    NoBinding,
}

/// Bean validation constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationMarker {
    /// Value must be present.
    NotNull,
    /// Integer lower bound.
    Min(i64),
    /// Integer upper bound.
    Max(i64),
    /// Decimal lower bound, as a literal.
    DecimalMin(String),
    /// Decimal upper bound, as a literal.
    DecimalMax(String),
    /// Length or item count bounds.
    Size {
        /// Lower bound.
        min: Option<usize>,
        /// Upper bound.
        max: Option<usize>,
    },
    /// Regular expression the value must match.
    Pattern(String),
}

/// HTTP verbs with a JAX-RS method annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
    /// PATCH
    Patch,
}

impl FromStr for HttpMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            "PATCH" => Ok(Self::Patch),
            _ => Err(AppError::Render(format!("Unsupported HTTP method: '{}'", s))),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Patch => "PATCH",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_parsing() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("Patch".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");

        let err = "trace".parse::<HttpMethod>().unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
    }
}
