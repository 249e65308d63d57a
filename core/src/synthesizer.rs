#![deny(missing_docs)]

//! # Interface Synthesizer
//!
//! Turns one `ResourceInterface` of the normalized model into an `InterfaceModel`:
//! one method per operation, with binding and validation markers per argument and the
//! return type wrapped according to the reactive and envelope settings.
//!
//! Operations and arguments keep document order so that output is deterministic.

use crate::error::AppResult;
use crate::interface::{
    BindingMarker, HttpMethod, InterfaceModel, MethodModel, ParameterModel, ValidationMarker,
};
use crate::markdown::{CommonMarkRenderer, MarkdownRenderer};
use crate::model::{Argument, ArgumentLocation, Operation, ResourceInterface, TypeDescriptor};
use crate::naming::{to_class_name, ArgNameAllocator};
use crate::settings::GeneratorSettings;
use crate::type_mapping::{
    effective_reactive, primary_type, response_type, wrap_return_type, JavaType, JavaTypeMapper,
    TypeMapper, INPUT_STREAM, OBJECT,
};
use serde_json::Value;
use utoipa::openapi::schema::{Schema, Type};
use utoipa::openapi::RefOr;

/// Builds interface models from resource descriptors.
pub struct InterfaceSynthesizer<'a, M = JavaTypeMapper, R = CommonMarkRenderer> {
    settings: &'a GeneratorSettings,
    mapper: M,
    markdown: R,
}

impl<'a> InterfaceSynthesizer<'a> {
    /// Creates a synthesizer with the standard type mapper and CommonMark renderer.
    pub fn new(settings: &'a GeneratorSettings) -> Self {
        Self {
            settings,
            mapper: JavaTypeMapper::from_settings(settings),
            markdown: CommonMarkRenderer,
        }
    }
}

impl<'a, M: TypeMapper, R: MarkdownRenderer> InterfaceSynthesizer<'a, M, R> {
    /// Creates a synthesizer with custom collaborators.
    pub fn with_components(settings: &'a GeneratorSettings, mapper: M, markdown: R) -> Self {
        Self {
            settings,
            mapper,
            markdown,
        }
    }

    /// Synthesizes the interface for `resource`, rooted at `context_root`.
    pub fn synthesize(
        &self,
        context_root: &str,
        resource: &ResourceInterface,
    ) -> AppResult<InterfaceModel> {
        let name = format!(
            "{}{}",
            to_class_name(&resource.name),
            self.settings.naming.interface_suffix
        );
        tracing::debug!(
            interface = %name,
            operations = resource.methods.len(),
            "Synthesizing interface"
        );

        let methods = resource
            .methods
            .iter()
            .map(|op| self.synthesize_method(op))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(InterfaceModel {
            package: resource.package.clone(),
            name,
            path: format!("{}{}", context_root, resource.path),
            methods,
        })
    }

    fn synthesize_method(&self, op: &Operation) -> AppResult<MethodModel> {
        let http_method: HttpMethod = op.method.parse()?;
        let reactive = effective_reactive(self.settings.reactive, op.async_);

        let core = match &op.return_ {
            Some(rt) => self.mapper.resolve_type(
                rt.schema.as_ref(),
                true,
                &response_type(self.settings),
            ),
            None => JavaType::Void,
        };
        let return_type = wrap_return_type(core, reactive, self.settings);

        tracing::debug!(
            operation = %op.name,
            method = %http_method,
            reactive,
            return_type = %return_type,
            "Synthesizing method"
        );

        let mut names = ArgNameAllocator::new();
        let parameters = op
            .arguments
            .iter()
            .map(|arg| self.synthesize_parameter(arg, &mut names))
            .collect();

        Ok(MethodModel {
            name: op.name.clone(),
            doc: op.description.as_deref().map(|d| self.markdown.render(d)),
            path: op.path.clone(),
            http_method,
            produces: op.produces.clone().unwrap_or_default(),
            consumes: op.consumes.clone().unwrap_or_default(),
            return_type,
            parameters,
        })
    }

    fn synthesize_parameter(&self, arg: &Argument, names: &mut ArgNameAllocator) -> ParameterModel {
        // Untyped bodies are raw streams (Swagger 2.0 shape).
        let fallback = match arg.location {
            ArgumentLocation::Body => JavaType::class(INPUT_STREAM),
            _ => JavaType::class(OBJECT),
        };
        let ty = self
            .mapper
            .resolve_type(arg.schema.as_ref(), arg.required, &fallback);

        let binding = match &arg.location {
            ArgumentLocation::Path => BindingMarker::Path(arg.name.clone()),
            ArgumentLocation::Query => BindingMarker::Query(arg.name.clone()),
            ArgumentLocation::Header => BindingMarker::Header(arg.name.clone()),
            ArgumentLocation::Cookie => BindingMarker::Cookie(arg.name.clone()),
            ArgumentLocation::Body | ArgumentLocation::Unclassified(_) => BindingMarker::NoBinding,
        };

        let skip_not_null =
            ty.is_primitive() || arg.location == ArgumentLocation::Path || !arg.required;

        let mut validations = Vec::new();
        if !skip_not_null {
            validations.push(ValidationMarker::NotNull);
        }
        validations.extend(schema_constraints(arg.schema.as_ref()));

        ParameterModel {
            name: names.allocate(&arg.name),
            ty,
            binding,
            validations,
            annotations: arg.annotations.clone(),
        }
    }
}

/// Bean validation constraints implied by a schema's bounds, lengths and pattern.
pub fn schema_constraints(schema: Option<&TypeDescriptor>) -> Vec<ValidationMarker> {
    let mut markers = Vec::new();
    match schema {
        Some(RefOr::T(Schema::Object(obj))) => {
            let integral = matches!(primary_type(&obj.schema_type), Some(Type::Integer));
            if let Some(min) = obj.minimum.as_ref().and_then(|n| serde_json::to_value(n).ok()) {
                markers.extend(bound(
                    &min,
                    integral,
                    ValidationMarker::Min,
                    ValidationMarker::DecimalMin,
                ));
            }
            if let Some(max) = obj.maximum.as_ref().and_then(|n| serde_json::to_value(n).ok()) {
                markers.extend(bound(
                    &max,
                    integral,
                    ValidationMarker::Max,
                    ValidationMarker::DecimalMax,
                ));
            }
            if obj.min_length.is_some() || obj.max_length.is_some() {
                markers.push(ValidationMarker::Size {
                    min: obj.min_length,
                    max: obj.max_length,
                });
            }
            if let Some(pattern) = &obj.pattern {
                markers.push(ValidationMarker::Pattern(pattern.clone()));
            }
        }
        Some(RefOr::T(Schema::Array(arr))) => {
            if arr.min_items.is_some() || arr.max_items.is_some() {
                markers.push(ValidationMarker::Size {
                    min: arr.min_items,
                    max: arr.max_items,
                });
            }
        }
        _ => {}
    }
    markers
}

fn bound(
    value: &Value,
    integral: bool,
    int_marker: fn(i64) -> ValidationMarker,
    decimal_marker: fn(String) -> ValidationMarker,
) -> Option<ValidationMarker> {
    let Value::Number(n) = value else {
        return None;
    };
    match n.as_i64() {
        Some(i) if integral => Some(int_marker(i)),
        _ => Some(decimal_marker(n.to_string())),
    }
}
