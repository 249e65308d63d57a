#![deny(missing_docs)]

//! # Target Binding Trait
//!
//! Defines how framework-agnostic markers turn into concrete annotations
//! for a specific web framework.

use crate::interface::{BindingMarker, HttpMethod, ValidationMarker};
use crate::model::AnnotationDirective;

/// A strategy trait for decoupling framework-specific annotations from synthesis.
///
/// Every method returns a fully qualified annotation; the emitter takes care of imports
/// and literal rendering.
pub trait TargetBinding {
    /// Javadoc attached to every generated interface.
    fn interface_doc(&self) -> &str;

    /// Annotation carrying a resource or method path.
    fn path(&self, path: &str) -> AnnotationDirective;

    /// The HTTP method annotation.
    fn http_method(&self, method: HttpMethod) -> AnnotationDirective;

    /// Annotation listing response media types.
    fn produces(&self, media_types: &[String]) -> AnnotationDirective;

    /// Annotation listing request media types.
    fn consumes(&self, media_types: &[String]) -> AnnotationDirective;

    /// The parameter binding annotation, `None` for `NoBinding`.
    fn binding(&self, marker: &BindingMarker) -> Option<AnnotationDirective>;

    /// A bean validation annotation.
    fn validation(&self, marker: &ValidationMarker) -> AnnotationDirective;
}
