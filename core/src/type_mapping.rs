#![deny(missing_docs)]

//! # Type Mapping
//!
//! Converts OpenAPI schemas into Java types and decides how operation results are wrapped.
//! Handles primitives vs. boxed types (driven by `required`), collections, bean references,
//! the reactive wrapper and the response envelope.

use crate::model::TypeDescriptor;
use crate::naming::to_class_name;
use crate::settings::GeneratorSettings;
use std::fmt;
use utoipa::openapi::schema::{ArrayItems, Schema, SchemaFormat, SchemaType, Type};
use utoipa::openapi::RefOr;

/// `java.lang.Object`, the default for untyped parameters.
pub const OBJECT: &str = "java.lang.Object";
/// `java.io.InputStream`, the default for untyped body parameters.
pub const INPUT_STREAM: &str = "java.io.InputStream";
/// Envelope type parameterized by the response value.
pub const REST_RESPONSE: &str = "org.jboss.resteasy.reactive.RestResponse";

/// Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `boolean`
    Boolean,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
}

impl Primitive {
    fn keyword(&self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    fn boxed(&self) -> &'static str {
        match self {
            Primitive::Boolean => "java.lang.Boolean",
            Primitive::Int => "java.lang.Integer",
            Primitive::Long => "java.lang.Long",
            Primitive::Float => "java.lang.Float",
            Primitive::Double => "java.lang.Double",
        }
    }
}

/// A resolved Java type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    /// A primitive such as `int`.
    Primitive(Primitive),
    /// The `void` keyword.
    Void,
    /// A class, optionally with type arguments. `name` is fully qualified.
    Class {
        /// Fully qualified class name.
        name: String,
        /// Type arguments.
        args: Vec<JavaType>,
    },
}

impl JavaType {
    /// A non-generic class.
    pub fn class(name: impl Into<String>) -> Self {
        JavaType::Class {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A generic class instantiation.
    pub fn generic(name: impl Into<String>, args: Vec<JavaType>) -> Self {
        JavaType::Class {
            name: name.into(),
            args,
        }
    }

    /// Whether the type cannot represent absence (primitives, `void`).
    pub fn is_primitive(&self) -> bool {
        matches!(self, JavaType::Primitive(_) | JavaType::Void)
    }

    /// Whether this is the `void` keyword.
    pub fn is_void(&self) -> bool {
        matches!(self, JavaType::Void)
    }

    /// The reference type usable as a type argument (`int` -> `Integer`, `void` -> `Void`).
    pub fn boxed(self) -> Self {
        match self {
            JavaType::Primitive(p) => JavaType::class(p.boxed()),
            JavaType::Void => JavaType::class("java.lang.Void"),
            other => other,
        }
    }

    /// Calls `f` with every fully qualified class name referenced by this type.
    pub fn for_each_class<F: FnMut(&str)>(&self, f: &mut F) {
        if let JavaType::Class { name, args } = self {
            f(name);
            for arg in args {
                arg.for_each_class(f);
            }
        }
    }

    /// Renders the type, naming classes through `name_of`.
    pub fn render_with<F: Fn(&str) -> String>(&self, name_of: &F) -> String {
        match self {
            JavaType::Primitive(p) => p.keyword().to_string(),
            JavaType::Void => "void".to_string(),
            JavaType::Class { name, args } if args.is_empty() => name_of(name),
            JavaType::Class { name, args } => {
                let rendered: Vec<String> = args.iter().map(|a| a.render_with(name_of)).collect();
                format!("{}<{}>", name_of(name), rendered.join(", "))
            }
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_with(&|name: &str| name.to_string()))
    }
}

/// Trait for converting type descriptors into Java types.
pub trait TypeMapper {
    /// Resolves a type descriptor.
    ///
    /// # Arguments
    ///
    /// * `schema` - The descriptor, if any.
    /// * `required` - Required values may use primitives.
    /// * `fallback` - Used when the descriptor gives no usable type.
    fn resolve_type(
        &self,
        schema: Option<&TypeDescriptor>,
        required: bool,
        fallback: &JavaType,
    ) -> JavaType;
}

/// The standard OpenAPI -> Java mapper.
pub struct JavaTypeMapper {
    bean_package: String,
}

impl JavaTypeMapper {
    /// Creates a mapper that resolves `$ref`s into `bean_package`.
    pub fn new(bean_package: impl Into<String>) -> Self {
        Self {
            bean_package: bean_package.into(),
        }
    }

    /// Creates a mapper from the generator settings.
    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self::new(settings.bean_package())
    }

    fn map(&self, schema: &TypeDescriptor, required: bool) -> Option<JavaType> {
        match schema {
            RefOr::Ref(r) => {
                let name = r.ref_location.rsplit('/').next().unwrap_or_default();
                let class = to_class_name(name);
                if class.is_empty() {
                    None
                } else {
                    Some(JavaType::class(format!("{}.{}", self.bean_package, class)))
                }
            }
            RefOr::T(Schema::Object(obj)) => {
                let format = format_name(obj.format.as_ref());
                map_scalar(primary_type(&obj.schema_type)?, format.as_deref(), required)
            }
            RefOr::T(Schema::Array(arr)) => match &arr.items {
                ArrayItems::RefOrSchema(items) => {
                    let inner = self
                        .map(items, false)
                        .unwrap_or_else(|| JavaType::class(OBJECT));
                    Some(JavaType::generic("java.util.List", vec![inner.boxed()]))
                }
                ArrayItems::False => None,
            },
            // Composites need a named bean, which the model does not carry.
            _ => None,
        }
    }
}

impl TypeMapper for JavaTypeMapper {
    fn resolve_type(
        &self,
        schema: Option<&TypeDescriptor>,
        required: bool,
        fallback: &JavaType,
    ) -> JavaType {
        schema
            .and_then(|s| self.map(s, required))
            .unwrap_or_else(|| fallback.clone())
    }
}

/// First non-null type of a schema (`["string", "null"]` -> `string`).
pub(crate) fn primary_type(schema_type: &SchemaType) -> Option<&Type> {
    match schema_type {
        SchemaType::Type(t) => Some(t),
        SchemaType::Array(types) => types.iter().find(|t| !matches!(t, Type::Null)),
        _ => None,
    }
}

/// The wire name of a format (`int64`, `date-time`, custom strings as-is).
fn format_name(format: Option<&SchemaFormat>) -> Option<String> {
    let value = serde_json::to_value(format?).ok()?;
    value.as_str().map(str::to_owned)
}

fn map_scalar(ty: &Type, format: Option<&str>, required: bool) -> Option<JavaType> {
    let primitive = |p: Primitive| {
        if required {
            JavaType::Primitive(p)
        } else {
            JavaType::Primitive(p).boxed()
        }
    };

    let mapped = match ty {
        Type::Integer => match format {
            Some("int64") => primitive(Primitive::Long),
            _ => primitive(Primitive::Int),
        },
        Type::Number => match format {
            Some("float") => primitive(Primitive::Float),
            Some("double") => primitive(Primitive::Double),
            _ => JavaType::class("java.math.BigDecimal"),
        },
        Type::Boolean => primitive(Primitive::Boolean),
        Type::String => match format {
            Some("date") => JavaType::class("java.time.LocalDate"),
            Some("date-time") => JavaType::class("java.time.OffsetDateTime"),
            Some("uuid") => JavaType::class("java.util.UUID"),
            Some("binary") => JavaType::class(INPUT_STREAM),
            _ => JavaType::class("java.lang.String"),
        },
        // Untyped objects, bare arrays and nulls carry no usable type.
        _ => return None,
    };
    Some(mapped)
}

/// Decides whether an operation's result is asynchronous.
///
/// Reactive projects may opt single operations out with `async: false`;
/// synchronous projects may opt single operations in with `async: true`.
pub fn effective_reactive(reactive_mode: bool, async_flag: Option<bool>) -> bool {
    if reactive_mode {
        async_flag != Some(false)
    } else {
        async_flag == Some(true)
    }
}

/// Applies the response envelope and the asynchronous wrapper to a core return type.
///
/// `core` is `JavaType::Void` for operations without a return descriptor.
pub fn wrap_return_type(core: JavaType, reactive: bool, settings: &GeneratorSettings) -> JavaType {
    let envelope = if !settings.return_response {
        core
    } else if core.is_void() {
        response_type(settings)
    } else {
        JavaType::generic(REST_RESPONSE, vec![core.boxed()])
    };

    if reactive {
        JavaType::generic(
            settings.reactive_implementation.wrapper_type(),
            vec![envelope.boxed()],
        )
    } else {
        envelope
    }
}

/// The namespace's bare `Response` type.
pub fn response_type(settings: &GeneratorSettings) -> JavaType {
    JavaType::class(format!("{}.ws.rs.core.Response", settings.namespace.root()))
}
