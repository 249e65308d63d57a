#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving Java-safe class and parameter names from OpenAPI names.

use heck::ToUpperCamelCase;
use std::collections::HashSet;

/// Java keywords and literals that cannot be used as identifiers.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "_",
];

/// Whether `s` is a Java keyword or reserved literal.
pub fn is_reserved_word(s: &str) -> bool {
    RESERVED_WORDS.contains(&s)
}

/// Converts an OpenAPI name into an UpperCamelCase class name.
///
/// e.g. `pet-store` -> `PetStore`, `v2_orders` -> `V2Orders`
pub fn to_class_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    let class = cleaned.to_upper_camel_case();
    match class.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{}", class),
        _ => class,
    }
}

/// Converts an OpenAPI parameter name into a Java argument name.
///
/// Invalid characters become `_`, a leading digit or a reserved word gets a `_` prefix.
/// e.g. `X-Request-ID` -> `X_Request_ID`, `class` -> `_class`
pub fn param_name_to_java_arg_name(name: &str) -> String {
    let mut java: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();

    if java.is_empty() {
        return "_arg".to_string();
    }
    if java.starts_with(|c: char| c.is_ascii_digit()) || is_reserved_word(&java) {
        java.insert(0, '_');
    }
    java
}

/// Hands out argument names that are unique within one method.
#[derive(Debug, Default)]
pub struct ArgNameAllocator {
    used: HashSet<String>,
}

impl ArgNameAllocator {
    /// Creates an empty allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the Java name for `spec_name`, suffixed with a counter on collision.
    /// e.g. `pet-id` and `pet_id` -> `pet_id`, `pet_id2`
    pub fn allocate(&mut self, spec_name: &str) -> String {
        let base = param_name_to_java_arg_name(spec_name);
        let mut candidate = base.clone();
        let mut counter = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{}{}", base, counter);
            counter += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(to_class_name("pets"), "Pets");
        assert_eq!(to_class_name("pet-store"), "PetStore");
        assert_eq!(to_class_name("Pet"), "Pet");
        assert_eq!(to_class_name("2fa"), "_2fa");
        assert_eq!(to_class_name(""), "");
    }

    #[test]
    fn test_arg_names() {
        assert_eq!(param_name_to_java_arg_name("petId"), "petId");
        assert_eq!(param_name_to_java_arg_name("X-Request-ID"), "X_Request_ID");
        assert_eq!(param_name_to_java_arg_name("page.size"), "page_size");
        assert_eq!(param_name_to_java_arg_name("class"), "_class");
        assert_eq!(param_name_to_java_arg_name("1st"), "_1st");
        assert_eq!(param_name_to_java_arg_name(""), "_arg");
    }

    #[test]
    fn test_allocator_resolves_collisions() {
        let mut names = ArgNameAllocator::new();
        assert_eq!(names.allocate("pet-id"), "pet_id");
        assert_eq!(names.allocate("pet_id"), "pet_id2");
        assert_eq!(names.allocate("pet.id"), "pet_id3");
        assert_eq!(names.allocate("status"), "status");
    }
}
