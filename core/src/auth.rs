#![deny(missing_docs)]

//! # Authentication Providers
//!
//! Request filters used by generated clients. Credentials are looked up at request time
//! from an `AuthProvidersConfig`, keyed by `<provider>/username` and `<provider>/password`.

use crate::error::{AppError, AppResult};
use base64::Engine;
use http::header::{HeaderValue, AUTHORIZATION};
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Runtime credential store for authentication providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthProvidersConfig {
    /// Flat map of `<provider>/<key>` to value.
    #[serde(default)]
    pub auth: BTreeMap<String, String>,
}

impl AuthProvidersConfig {
    /// Creates a config from `(key, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            auth: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Loads a config from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            _ => Err(AppError::Config(format!(
                "Unsupported auth config file extension: {}",
                path.display()
            ))),
        }
    }

    /// Returns the value for `provider/key`, or an empty string.
    pub fn get_or_default(&self, provider: &str, key: &str) -> &str {
        self.auth
            .get(&format!("{}/{}", provider, key))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Interceptor applied to every outgoing client request.
pub trait ClientRequestFilter: Send + Sync {
    /// Mutates the outgoing request headers.
    fn filter(&self, headers: &mut HeaderMap) -> AppResult<()>;
}

/// Computes the value of a Basic-Authentication header.
pub fn basic_auth_access_token(username: &str, password: &str) -> String {
    let credentials =
        base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", username, password));
    format!("Basic {}", credentials)
}

/// Adds `Authorization: Basic ...` from the provider's configured credentials.
#[derive(Debug, Clone)]
pub struct BasicAuthenticationProvider {
    name: String,
    config: Arc<AuthProvidersConfig>,
}

impl BasicAuthenticationProvider {
    /// Creates a provider reading credentials for `name`.
    pub fn new(name: impl Into<String>, config: Arc<AuthProvidersConfig>) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    /// Provider name.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn username(&self) -> &str {
        self.config.get_or_default(&self.name, "username")
    }

    fn password(&self) -> &str {
        self.config.get_or_default(&self.name, "password")
    }

    /// The header value for the current credentials.
    pub fn header_value(&self) -> AppResult<HeaderValue> {
        let token = basic_auth_access_token(self.username(), self.password());
        HeaderValue::from_str(&token).map_err(|e| {
            AppError::Transport(format!(
                "Invalid Authorization header for provider '{}': {}",
                self.name, e
            ))
        })
    }
}

impl ClientRequestFilter for BasicAuthenticationProvider {
    fn filter(&self, headers: &mut HeaderMap) -> AppResult<()> {
        let value = self.header_value()?;
        tracing::trace!(provider = %self.name, "Attaching basic auth header");
        headers.append(AUTHORIZATION, value);
        Ok(())
    }
}
