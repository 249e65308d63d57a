#![deny(missing_docs)]

//! # jaxrs-gen Core
//!
//! Core library for the OpenAPI to JAX-RS interface generator.
//!
//! A normalized OpenAPI model (`model`) is mapped to Java types (`type_mapping`),
//! synthesized into framework-agnostic interface models (`synthesizer`), and rendered
//! through a target binding (`strategies`) by the `emitter`.

/// Shared error types.
pub mod error;

/// Normalized input model.
pub mod model;

/// Generator settings.
pub mod settings;

/// Type mapping logic (OpenAPI -> Java).
pub mod type_mapping;

/// Java naming rules.
pub mod naming;

/// Markdown to HTML rendering.
pub mod markdown;

/// Synthesized interface models.
pub mod interface;

/// Strategy Pattern Interfaces.
pub mod strategies;

/// Interface synthesis.
pub mod synthesizer;

/// Java source rendering.
pub mod emitter;

/// End-to-end generation pipeline.
pub mod generator;

/// Client authentication request filters.
pub mod auth;

pub use auth::{
    basic_auth_access_token, AuthProvidersConfig, BasicAuthenticationProvider,
    ClientRequestFilter,
};
pub use emitter::Emitter;
pub use error::{AppError, AppResult};
pub use generator::{write_sources, GeneratedSource, Generator};
pub use interface::{
    BindingMarker, HttpMethod, InterfaceModel, MethodModel, ParameterModel, ValidationMarker,
};
pub use model::{
    AnnotationDirective, AnnotationValue, Argument, ArgumentLocation, CodegenInfo, Operation,
    ResourceInterface, ReturnDescriptor, TypeDescriptor,
};
pub use settings::{GeneratorSettings, Namespace, ReactiveImplementation};
pub use strategies::{JaxRsBinding, TargetBinding};
pub use synthesizer::InterfaceSynthesizer;
pub use type_mapping::{effective_reactive, wrap_return_type, JavaType, JavaTypeMapper, TypeMapper};
