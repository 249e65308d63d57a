#![deny(missing_docs)]

//! # jaxrs-gen CLI
//!
//! Command Line Interface for the OpenAPI to JAX-RS generator.
//!
//! Supported Commands:
//! - `generate`: Renders JAX-RS interfaces from normalized OpenAPI models.
//! - `auth-header`: Prints the Basic-Auth header a generated client would send.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod auth_header;
mod error;
mod generate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI to JAX-RS interface generator")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate JAX-RS interfaces from a normalized OpenAPI model.
    Generate(generate::GenerateArgs),
    /// Print the Basic-Auth header for a configured provider.
    AuthHeader(auth_header::AuthHeaderArgs),
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
        Commands::AuthHeader(args) => auth_header::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "jaxrs-gen",
            "generate",
            "--spec",
            "petstore.yaml",
            "--reactive",
            "true",
            "--output-dir",
            "out",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.reactive, Some(true));
                assert_eq!(args.output_dir, std::path::PathBuf::from("out"));
            }
            _ => panic!("expected generate"),
        }
    }
}
