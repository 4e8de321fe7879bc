use anyhow::{bail, Context};
use colored::Colorize;
use sjson_store::{InMemoryDocumentStore, StatusApi, StoreConfig};
use sjson_types::{classify, validate};
use tracing::info;

use crate::cli::*;
use crate::script::{parse_script, Outcome};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Run(args) => cmd_run(args, cli.format),
        Command::Validate(args) => cmd_validate(args, cli.format),
        Command::Classify(args) => cmd_classify(args, cli.format),
    }
}

fn cmd_run(args: RunArgs, format: OutputFormat) -> anyhow::Result<()> {
    let outcomes = run_script(&args)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        OutputFormat::Text => {
            for outcome in &outcomes {
                print_outcome(outcome);
            }
        }
    }
    Ok(())
}

fn run_script(args: &RunArgs) -> anyhow::Result<Vec<Outcome>> {
    let config = match &args.config {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StoreConfig::default(),
    };
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let steps = parse_script(&text)?;
    info!(script = %args.script.display(), steps = steps.len(), "running script");

    let api = StatusApi::new(InMemoryDocumentStore::with_config(config));
    Ok(steps
        .iter()
        .map(|(line, step)| step.apply(*line, &api))
        .collect())
}

fn print_outcome(outcome: &Outcome) {
    let prefix = format!("{:>4}  {:<22}", outcome.line, outcome.op);
    if let Some(status) = outcome.status {
        if status == 0 {
            println!("{} {}", prefix.dimmed(), "ok".green());
        } else {
            println!("{} {}", prefix.dimmed(), status.to_string().red().bold());
        }
    }
    if let Some(output) = &outcome.output {
        println!("{}", prefix.dimmed());
        if output.is_empty() {
            println!("      {}", "(empty)".dimmed());
        } else {
            for line in output.lines() {
                println!("      {line}");
            }
        }
    }
}

fn cmd_validate(args: ValidateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let result = validate(&args.value, args.kind);
    if let OutputFormat::Json = format {
        let report = serde_json::json!({
            "kind": args.kind,
            "value": args.value,
            "valid": result.is_ok(),
        });
        println!("{report}");
    } else if result.is_ok() {
        println!("{} {} is a valid {}", "✓".green().bold(), args.value.bold(), args.kind);
    }
    if let Err(err) = result {
        bail!(err);
    }
    Ok(())
}

fn cmd_classify(args: ClassifyArgs, format: OutputFormat) -> anyhow::Result<()> {
    let kind = classify(&args.value);
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "value": args.value, "kind": kind }))
        }
        OutputFormat::Text => match kind {
            Some(kind) => println!("{}", kind.to_string().cyan()),
            None => println!("{}", "unrecognized".yellow()),
        },
    }
    Ok(())
}
