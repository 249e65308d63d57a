#![deny(missing_docs)]

//! # Strategies
//!
//! This module defines the architecture for pluggable target frameworks.
//!
//! - **traits**: Defines `TargetBinding` for describing a framework's markers.
//! - **jaxrs**: The default implementation for JAX-RS (Jakarta or javax).

pub mod jaxrs;
pub mod traits;

// Re-export for easier access downstream
pub use jaxrs::JaxRsBinding;
pub use traits::TargetBinding;
