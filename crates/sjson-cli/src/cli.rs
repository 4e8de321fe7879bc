use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sjson_types::ValueKind;

#[derive(Parser)]
#[command(
    name = "sjson",
    about = "sjson - in-memory typed document registry",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run an operation script against a fresh registry
    Run(RunArgs),
    /// Check a value against a kind
    Validate(ValidateArgs),
    /// Report which kind a value satisfies
    Classify(ClassifyArgs),
}

#[derive(Args)]
pub struct RunArgs {
    pub script: PathBuf,
    /// TOML file with a [render] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ValidateArgs {
    pub kind: ValueKind,
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args)]
pub struct ClassifyArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run() {
        let cli = Cli::try_parse_from(["sjson", "run", "ops.txt"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.script, PathBuf::from("ops.txt"));
            assert!(args.config.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_run_with_config() {
        let cli = Cli::try_parse_from(["sjson", "run", "ops.txt", "-c", "sjson.toml"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.config, Some(PathBuf::from("sjson.toml")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_validate() {
        let cli = Cli::try_parse_from(["sjson", "validate", "number", "-3"]).unwrap();
        if let Command::Validate(args) = cli.command {
            assert_eq!(args.kind, ValueKind::Number);
            assert_eq!(args.value, "-3");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn reject_unknown_kind() {
        assert!(Cli::try_parse_from(["sjson", "validate", "object", "{}"]).is_err());
    }

    #[test]
    fn parse_classify() {
        let cli = Cli::try_parse_from(["sjson", "classify", "null"]).unwrap();
        assert!(matches!(cli.command, Command::Classify(_)));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["sjson", "--verbose", "classify", "1"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["sjson", "--format", "json", "run", "x"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
