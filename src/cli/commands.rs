use crate::{
    cli::args::{DetectArgs, OpsArgs, RunArgs},
    cli::Command,
    core::{operations, AppError, CategoryFilter, ErrorCategory, Workbench},
    detect::DetectorClient,
    Result,
};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::warn;

pub async fn execute(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run_command(args),
        Command::Ops(args) => ops_command(args),
        Command::Detect(args) => detect_command(args).await,
    }
}

/// Resolve the input text: inline argument, file, or stdin, in that order.
fn read_input(inline: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text);
    }
    if let Some(path) = file {
        return fs::read_to_string(&path).map_err(|err| {
            let mut error = AppError::new(
                ErrorCategory::IoError,
                format!("failed to read input file: {}", err),
            )
            .with_code("CLI-IO-001");
            error.add_context("path", &path.display().to_string());
            error.into()
        });
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| -> anyhow::Error {
            AppError::new(
                ErrorCategory::IoError,
                format!("failed to read stdin: {}", err),
            )
            .with_code("CLI-IO-002")
            .into()
        })?;
    Ok(buffer)
}

fn run_command(args: RunArgs) -> Result<()> {
    let input = read_input(args.input, args.file)?;
    let registry = operations::builtin_registry();
    for op in &args.ops {
        if registry.get(op).is_none() {
            warn!(operation_id = %op, "unknown operation id; step will be skipped");
        }
    }

    let mut workbench = Workbench::new(registry);
    workbench.set_input(input);
    workbench.append_steps(args.ops);
    println!("{}", workbench.output());
    Ok(())
}

fn ops_command(args: OpsArgs) -> Result<()> {
    let category = match &args.category {
        Some(raw) => raw.parse::<CategoryFilter>().map_err(|err| {
            anyhow::Error::new(
                AppError::new(ErrorCategory::ValidationError, err).with_code("CLI-ARG-001"),
            )
        })?,
        None => CategoryFilter::All,
    };
    let term = args.search.unwrap_or_default();

    let registry = operations::builtin_registry();
    let survivors = registry.filter(&term, category);
    if survivors.is_empty() {
        println!("No operations match the given filters.");
        return Ok(());
    }
    for operation in survivors {
        println!(
            "{:<16} {:<16} {:<12} {}",
            operation.id(),
            operation.name(),
            operation.category().label(),
            operation.description()
        );
    }
    Ok(())
}

async fn detect_command(args: DetectArgs) -> Result<()> {
    let input = read_input(args.input, args.file)?;
    let Some(client) = DetectorClient::from_env() else {
        println!("Format detection is not configured; set NOVACHEF_API_KEY to enable it.");
        return Ok(());
    };

    let Some(result) = client.detect(&input).await else {
        println!("No suggestion available for this input.");
        return Ok(());
    };

    println!("Format:      {}", result.format);
    println!("Confidence:  {:.2}", result.confidence);
    println!("Explanation: {}", result.explanation);
    if result.suggested_operations.is_empty() {
        println!("Suggested recipe: (none)");
    } else {
        println!(
            "Suggested recipe: {}",
            result.suggested_operations.join(" -> ")
        );
    }

    if args.apply {
        let mut workbench = Workbench::new(operations::builtin_registry());
        workbench.set_input(input);
        workbench.set_analysis(result);
        workbench.accept_suggestion();
        println!("Output:");
        println!("{}", workbench.output());
    }
    Ok(())
}
