mod build;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "feedloader-cli")]
#[command(about = "Build Content API custombatch payloads from exported product rows")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a JSON array of warehouse rows into batch payloads.
    Build(build::BuildArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = feedloader_core::load_uploader_config()?;
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Build(args) => build::run(&config, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_build_with_defaults() {
        let cli = Cli::try_parse_from(["feedloader-cli", "build", "--input", "rows.json"]).unwrap();
        let Commands::Build(args) = cli.command;
        assert_eq!(args.input.to_str(), Some("rows.json"));
        assert_eq!(args.method, feedloader_core::Method::Insert);
        assert!(args.output.is_none());
    }

    #[test]
    fn cli_parses_delete_method() {
        let cli = Cli::try_parse_from([
            "feedloader-cli",
            "build",
            "--input",
            "rows.json",
            "--method",
            "delete",
            "--output",
            "out.json",
        ])
        .unwrap();
        let Commands::Build(args) = cli.command;
        assert_eq!(args.method, feedloader_core::Method::Delete);
        assert_eq!(
            args.output.as_deref().and_then(std::path::Path::to_str),
            Some("out.json")
        );
    }

    #[test]
    fn cli_rejects_unknown_method() {
        let result = Cli::try_parse_from([
            "feedloader-cli",
            "build",
            "--input",
            "rows.json",
            "--method",
            "upsert",
        ]);
        assert!(result.is_err());
    }
}
