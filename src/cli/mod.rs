//! Command-line interface.

pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::core::config::Config;
use crate::core::domain::{Category, EnvAssignment};
use crate::core::{resolver, store};
use crate::error::Result;

/// smenv - Resolve secrets into environment variables.
#[derive(Parser, Debug)]
#[command(
    name = "smenv",
    about = "Resolve secrets from AWS Secrets Manager into environment variables",
    version,
    after_help = "Without a command, prints one NAME=VALUE line per resolved secret."
)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file [default: .smenv.toml if present]
    #[arg(short, long, env = "SMENV_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Shared credentials profile (overrides the config file)
    #[arg(long)]
    pub profile: Option<String>,

    /// Secret store region (overrides the config file)
    #[arg(long)]
    pub region: Option<String>,

    /// Use the secret's string value as-is
    #[arg(long = "string", value_name = "NAME=SECRET_ID")]
    pub strings: Vec<String>,

    /// Use the secret's binary value, base64-encoded
    #[arg(long = "binary", value_name = "NAME=SECRET_ID")]
    pub binaries: Vec<String>,

    /// Use the secret's binary value as text
    #[arg(long = "binary-string", value_name = "NAME=SECRET_ID")]
    pub binary_strings: Vec<String>,

    /// Use one field of a JSON secret as plain text
    #[arg(long = "json-key-string", value_name = "NAME=SECRET_ID#KEY")]
    pub json_key_strings: Vec<String>,

    /// Use one field of a JSON secret as JSON
    #[arg(long = "json-key", value_name = "NAME=SECRET_ID#KEY")]
    pub json_keys: Vec<String>,

    /// Fail if any secret cannot be resolved
    #[arg(long)]
    pub strict: bool,

    /// Command and arguments to run with the secrets injected
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(profile) = &self.profile {
            config.profile = Some(profile.clone());
        }
        if let Some(region) = &self.region {
            config.region = Some(region.clone());
        }

        let flags = [
            (Category::String, &self.strings),
            (Category::Binary, &self.binaries),
            (Category::BinaryString, &self.binary_strings),
            (Category::JsonKeyString, &self.json_key_strings),
            (Category::JsonKey, &self.json_keys),
        ];
        for (category, values) in flags {
            for raw in values {
                config.add_assignment(category, raw)?;
            }
        }

        Ok(config)
    }
}

/// Execute the CLI.
pub fn execute(cli: Cli) -> Result<()> {
    let config = cli.config()?;
    let assignments = resolve(&config, cli.strict)?;

    if cli.command.is_empty() {
        for assignment in &assignments {
            println!("{}", assignment);
        }
        return Ok(());
    }

    let exit_code = run::run_with_secrets(&cli.command, assignments)?;
    std::process::exit(exit_code);
}

/// Resolve all configured secrets.
///
/// Failures are reported and the partial result is returned, unless
/// `strict` is set.
fn resolve(config: &Config, strict: bool) -> Result<Vec<EnvAssignment>> {
    if config.is_empty() {
        debug!("no secrets configured");
        return Ok(Vec::new());
    }

    let store = store::connect(config)?;
    let (assignments, error) = resolver::resolve(config, store.as_ref()).into_parts();

    if let Some(error) = error {
        if strict {
            return Err(error.into());
        }
        output::warn(&error.to_string());
        if error.count() > 1 {
            for failure in error.failures() {
                output::dimmed(&format!("  • {}", failure));
            }
        }
    }

    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_merge_into_config() {
        let cli = Cli::parse_from([
            "smenv",
            "--config",
            "/nonexistent/smenv.toml",
        ]);
        assert!(cli.config().is_err());

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("smenv.toml");
        std::fs::write(&path, "region = \"us-east-1\"\n[secret_strings]\nA = \"a\"\n").unwrap();

        let cli = Cli::parse_from([
            "smenv",
            "--config",
            path.to_str().unwrap(),
            "--region",
            "eu-central-1",
            "--string",
            "B=b",
            "--json-key",
            "C=c#k",
        ]);
        let config = cli.config().unwrap();
        assert_eq!(config.region.as_deref(), Some("eu-central-1"));
        let names: Vec<_> = config.secret_strings.keys().cloned().collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(config.secret_json_keys["C"].json_key(), "k");
    }

    #[test]
    fn test_trailing_command() {
        let cli = Cli::parse_from(["smenv", "--string", "A=a", "--", "env", "-i", "--x"]);
        assert_eq!(cli.command, vec!["env", "-i", "--x"]);
        assert_eq!(cli.strings, vec!["A=a"]);
    }

    #[test]
    fn test_empty_config_resolves_without_store() {
        assert!(resolve(&Config::new(), true).unwrap().is_empty());
    }
}
