//! smenv - Resolve secrets into environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use smenv::cli::output;
use smenv::cli::{execute, Cli};
use smenv::core::constants::LOG_ENV;
use smenv::error::{ConfigError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // SMENV_LOG takes precedence over --verbose
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("smenv=debug")
        } else {
            EnvFilter::new("smenv=warn")
        }
    });

    // stdout is reserved for NAME=VALUE output
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotFound(_)) => {
                Some("create .smenv.toml or pass --config with an existing file")
            }
            Error::Store(StoreError::Connect(_)) => {
                Some("check AWS credentials and region: --profile, --region, AWS_PROFILE, AWS_REGION")
            }
            Error::Resolution(_) => Some("rerun without --strict to continue with the secrets that resolved"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
