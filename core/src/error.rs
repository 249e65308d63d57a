//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Malformed JSON model or settings document.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Malformed YAML model or settings document.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// Invalid or inconsistent generator settings.
    #[from(ignore)]
    #[display("Config Error: {_0}")]
    Config(String),

    /// The synthesized interface model cannot be rendered.
    /// Aborts generation of the affected resource.
    #[from(ignore)]
    #[display("Render Error: {_0}")]
    Render(String),

    /// Failure while preparing an outgoing request (e.g. an invalid header value).
    #[from(ignore)]
    #[display("Transport Error: {_0}")]
    Transport(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String defaults to General, never Render or Config
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_json_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::Json(_)));
        assert!(format!("{}", app_err).starts_with("JSON Error"));
    }

    #[test]
    fn test_render_manual_creation() {
        let app_err = AppError::Render("bad method".into());
        assert_eq!(format!("{}", app_err), "Render Error: bad method");
    }
}
