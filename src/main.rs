mod commands;
mod context;
mod diff;
mod error;
mod loader;
mod output;
mod traits;

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use commands::CompareCommand;
use context::Context;
use diff::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gendiff")]
#[command(about = "Compares two configuration files and shows a difference.", long_about = None)]
#[command(version)]
struct Cli {
    /// First (old) configuration file (.json, .yaml or .yml)
    filepath1: PathBuf,

    /// Second (new) configuration file (.json, .yaml or .yml)
    filepath2: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Stylish, env = "GENDIFF_FORMAT")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context::new();

    if let Err(err) = run(&ctx, &cli) {
        ctx.output.error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(ctx: &Context, cli: &Cli) -> Result<()> {
    CompareCommand::execute(ctx, &cli.filepath1, &cli.filepath2, cli.format).with_context(|| {
        format!(
            "Failed to compare {} and {}",
            cli.filepath1.display(),
            cli.filepath2.display()
        )
    })
}

/// Send logs to stderr so stdout carries only the diff
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults_to_stylish() {
        let cli = Cli::try_parse_from(["gendiff", "a.json", "b.yml"]).unwrap();
        assert_eq!(cli.filepath1, PathBuf::from("a.json"));
        assert_eq!(cli.filepath2, PathBuf::from("b.yml"));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parses_format_flag() {
        let cli = Cli::try_parse_from(["gendiff", "-f", "plain", "a.json", "b.json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Plain);

        let cli = Cli::try_parse_from(["gendiff", "--format", "json", "a.json", "b.json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["gendiff", "-f", "xml", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn test_cli_requires_two_paths() {
        assert!(Cli::try_parse_from(["gendiff", "a.json"]).is_err());
        assert!(Cli::try_parse_from(["gendiff", "a.json", "b.json", "c.json"]).is_err());
    }
}
