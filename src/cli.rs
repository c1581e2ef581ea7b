//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ii_core::{EnvironmentSelector, IngestId};

#[derive(Debug, Parser)]
#[command(
    name = "ingest-inspector",
    version,
    about = "Look up storage-service ingests and explain what happened to them"
)]
pub struct Cli {
    /// TOML config file (default: <app-data>/config.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Locale used for dates, e.g. en-US or de-DE (default: system locale)
    #[arg(long, global = true, value_name = "TAG")]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look an ingest up and show its lifecycle
    Lookup(LookupArgs),
    /// List recently inspected ingests
    Recent,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Ingest identifier
    #[arg(value_parser = parse_ingest_id)]
    pub ingest_id: IngestId,

    /// Environment to query: auto, staging or production
    #[arg(long = "env", default_value_t = EnvironmentSelector::Auto)]
    pub environment: EnvironmentSelector,

    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn parse_ingest_id(input: &str) -> Result<IngestId, String> {
    IngestId::parse_input(input).ok_or_else(|| "ingest ID must not be blank".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ii_core::Environment;

    #[test]
    fn lookup_defaults_to_auto_text_output() {
        let cli = Cli::try_parse_from(["ingest-inspector", "lookup", " abc-123 "]).unwrap();

        let Command::Lookup(args) = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(args.ingest_id.as_str(), "abc-123");
        assert_eq!(args.environment, EnvironmentSelector::Auto);
        assert!(!args.json);
    }

    #[test]
    fn lookup_accepts_environment_and_json() {
        let cli = Cli::try_parse_from([
            "ingest-inspector",
            "--locale",
            "de-DE",
            "lookup",
            "abc",
            "--env",
            "staging",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.locale.as_deref(), Some("de-DE"));
        let Command::Lookup(args) = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(
            args.environment,
            EnvironmentSelector::Only(Environment::Staging)
        );
        assert!(args.json);
    }

    #[test]
    fn blank_ingest_id_is_rejected() {
        assert!(Cli::try_parse_from(["ingest-inspector", "lookup", "   "]).is_err());
    }

    #[test]
    fn unknown_environment_is_rejected() {
        assert!(Cli::try_parse_from(["ingest-inspector", "lookup", "abc", "--env", "qa"]).is_err());
    }

    #[test]
    fn global_config_works_after_subcommand() {
        let cli =
            Cli::try_parse_from(["ingest-inspector", "recent", "--config", "/tmp/c.toml"]).unwrap();

        assert!(matches!(cli.command, Command::Recent));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }
}
