#![deny(missing_docs)]

//! # Auth Header Command
//!
//! Prints the `Authorization` header a generated client sends for a provider.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use jaxrs_gen_core::{AuthProvidersConfig, BasicAuthenticationProvider};

use crate::error::{CliError, CliResult};

/// Arguments for the auth-header command.
#[derive(clap::Args, Debug, Clone)]
pub struct AuthHeaderArgs {
    /// Provider name, e.g. `petstore`.
    #[clap(long)]
    pub provider: String,

    /// Credentials file (YAML or JSON) with an `auth` map.
    #[clap(long, env = "JAXRS_GEN_AUTH_CONFIG")]
    pub config: PathBuf,
}

/// Computes the header line for `args.provider`.
pub fn header_line(args: &AuthHeaderArgs) -> CliResult<String> {
    let config = Arc::new(AuthProvidersConfig::load(&args.config)?);
    let provider = BasicAuthenticationProvider::new(args.provider.clone(), config);
    let value = provider.header_value()?;
    let value = value
        .to_str()
        .map_err(|e| CliError::General(format!("Header is not printable: {}", e)))?;
    Ok(format!("Authorization: {}", value))
}

/// Writes the header line to `out`.
pub fn write_header<W: Write>(out: &mut W, args: &AuthHeaderArgs) -> CliResult<()> {
    writeln!(out, "{}", header_line(args)?)?;
    Ok(())
}

/// Executes the command.
pub fn execute(args: &AuthHeaderArgs) -> CliResult<()> {
    write_header(&mut std::io::stdout().lock(), args)
}
