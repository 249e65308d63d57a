#![deny(missing_docs)]

//! # Codegen Models
//!
//! Intermediate Representation (IR) of the normalized OpenAPI model that drives generation.
//!
//! The model is produced by an external reader and handed over as JSON or YAML.
//! Type descriptors are plain OpenAPI schemas (`utoipa::openapi` types), so a reader
//! can copy them straight out of the source document.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use utoipa::openapi::schema::Schema;
use utoipa::openapi::RefOr;

/// An OpenAPI schema describing the type of an argument or a response.
pub type TypeDescriptor = RefOr<Schema>;

/// Root of a normalized model: everything needed to generate one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenInfo {
    /// Project (API) name, informational.
    #[serde(default)]
    pub name: String,
    /// API version, informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Path prefix prepended to every resource path (e.g. "/api").
    #[serde(default)]
    pub context_root: String,
    /// Resource interfaces, in generation order.
    #[serde(default)]
    pub interfaces: Vec<ResourceInterface>,
}

impl CodegenInfo {
    /// Loads a model from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            _ => Err(AppError::General(format!(
                "Unsupported model file extension: {}",
                path.display()
            ))),
        }
    }
}

/// One generated interface, typically one OpenAPI tag or path group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInterface {
    /// Java package of the generated interface.
    pub package: String,
    /// Raw interface name; converted with the naming convention.
    pub name: String,
    /// Resource path, appended to the context root.
    #[serde(default)]
    pub path: String,
    /// Operations in document order.
    #[serde(default)]
    pub methods: Vec<Operation>,
}

/// A single API endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Java method name (usually the operationId).
    pub name: String,
    /// Sub-path relative to the resource path (e.g. "/{petId}").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// HTTP method, case-insensitive ("get", "POST", ...).
    pub method: String,
    /// Markdown description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Response media types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
    /// Request media types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,
    /// Explicit async override. `None` inherits the project default.
    #[serde(default, rename = "async", skip_serializing_if = "Option::is_none")]
    pub async_: Option<bool>,
    /// Parameters in document order.
    #[serde(default)]
    pub arguments: Vec<Argument>,
    /// Success response; absent means "no content".
    #[serde(default, rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_: Option<ReturnDescriptor>,
}

/// One operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    /// OpenAPI parameter name (used verbatim in binding markers).
    pub name: String,
    /// Where the value comes from.
    #[serde(rename = "in")]
    pub location: ArgumentLocation,
    /// Whether the parameter is mandatory.
    #[serde(default)]
    pub required: bool,
    /// Type descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<TypeDescriptor>,
    /// Reserved: signature of a reusable named data type. Accepted and ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_signature: Option<serde_json::Value>,
    /// Extra annotations supplied by OpenAPI extensions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationDirective>,
}

/// Success response descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnDescriptor {
    /// Response body type; `None` resolves to the return fallback type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<TypeDescriptor>,
}

/// Source of an argument in the HTTP request.
///
/// Unknown strings are kept as `Unclassified` instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArgumentLocation {
    /// Path template variable.
    Path,
    /// Query string parameter.
    Query,
    /// Request header.
    Header,
    /// Cookie.
    Cookie,
    /// Request body (bound positionally).
    Body,
    /// Anything else, e.g. `formData`.
    Unclassified(String),
}

impl From<String> for ArgumentLocation {
    fn from(value: String) -> Self {
        match value.as_str() {
            "path" => Self::Path,
            "query" => Self::Query,
            "header" => Self::Header,
            "cookie" => Self::Cookie,
            "body" => Self::Body,
            _ => Self::Unclassified(value),
        }
    }
}

impl From<ArgumentLocation> for String {
    fn from(value: ArgumentLocation) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ArgumentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path => write!(f, "path"),
            Self::Query => write!(f, "query"),
            Self::Header => write!(f, "header"),
            Self::Cookie => write!(f, "cookie"),
            Self::Body => write!(f, "body"),
            Self::Unclassified(other) => write!(f, "{}", other),
        }
    }
}

/// An extra annotation attached verbatim to a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationDirective {
    /// Fully qualified annotation type (e.g. `org.acme.Trimmed`).
    pub name: String,
    /// Named literal values, rendered in the given order.
    #[serde(default)]
    pub values: Vec<AnnotationValue>,
}

/// A single `name = literal` pair of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationValue {
    /// Attribute name.
    pub name: String,
    /// Java literal, inserted as-is (quotes included for strings).
    pub literal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parsing() {
        assert_eq!(ArgumentLocation::from("path".to_string()), ArgumentLocation::Path);
        assert_eq!(ArgumentLocation::from("body".to_string()), ArgumentLocation::Body);
        assert_eq!(
            ArgumentLocation::from("formData".to_string()),
            ArgumentLocation::Unclassified("formData".into())
        );
        assert_eq!(
            ArgumentLocation::Unclassified("formData".into()).to_string(),
            "formData"
        );
    }

    #[test]
    fn test_operation_from_json() {
        let json = r##"{
            "name": "getPetById",
            "path": "/{petId}",
            "method": "get",
            "async": false,
            "produces": ["application/json"],
            "arguments": [
                { "name": "petId", "in": "path", "required": true,
                  "schema": { "type": "integer", "format": "int64" } },
                { "name": "trace", "in": "matrix" }
            ],
            "return": { "schema": { "$ref": "#/components/schemas/Pet" } }
        }"##;

        let op: Operation = serde_json::from_str(json).unwrap();
        assert_eq!(op.name, "getPetById");
        assert_eq!(op.async_, Some(false));
        assert_eq!(op.arguments.len(), 2);
        assert_eq!(op.arguments[0].location, ArgumentLocation::Path);
        assert!(op.arguments[0].required);
        assert!(!op.arguments[1].required);
        assert_eq!(
            op.arguments[1].location,
            ArgumentLocation::Unclassified("matrix".into())
        );
        assert!(matches!(
            op.return_.and_then(|r| r.schema),
            Some(RefOr::Ref(_))
        ));
    }

    #[test]
    fn test_missing_optional_fields() {
        let yaml = "name: addPet\nmethod: post\n";
        let op: Operation = serde_yaml::from_str(yaml).unwrap();
        assert!(op.description.is_none());
        assert!(op.produces.is_none());
        assert!(op.return_.is_none());
        assert!(op.async_.is_none());
        assert!(op.arguments.is_empty());
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.txt");
        std::fs::write(&path, "{}").unwrap();
        let err = CodegenInfo::load(&path).unwrap_err();
        assert!(format!("{}", err).contains("Unsupported model file extension"));
    }
}
