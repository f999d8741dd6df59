mod harness;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use debughelper_core::{
    LocalContext, NodeError, NodeRef, NodeType, ParameterStore, ValidationIssue,
    validate_parameters,
};
use debughelper_node::{DISPLAY_NAME, DebugHelper, NODE_NAME, parameters_json_schema};
use harness::{
    HarnessError, coerce_declared_types, init_logging, load_items, load_parameters, parse_param,
    write_json_atomic,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("harness error: {0}")]
    Harness(#[from] HarnessError),
    #[error("node error ({kind}): {0}", kind = .0.kind())]
    Node(#[from] NodeError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

#[derive(Parser, Debug)]
#[command(name = "debughelper", version, about = "Local host for the DebugHelper node")]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    /// Append logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the node description.
    Describe(OutputArgs),
    /// Print the JSON Schema of the node parameters.
    Schema(OutputArgs),
    /// Execute the node over input items.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// JSON file with an object or an array of objects.
    #[arg(long)]
    input: Option<PathBuf>,
    /// TOML file with node parameters.
    #[arg(long)]
    params: Option<PathBuf>,
    /// Parameter override, repeatable.
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    param: Vec<(String, Value)>,
    /// Emit failed items as error records instead of aborting.
    #[arg(long, default_value_t = false)]
    continue_on_fail: bool,
    /// Name of the node instance, as shown in errors.
    #[arg(long, default_value = DISPLAY_NAME)]
    node_name: String,
    /// Write output items to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_json, cli.log_file.as_deref())?;

    match cli.command {
        Command::Describe(args) => emit(&DebugHelper.description(), args.out),
        Command::Schema(args) => emit(&parameters_json_schema()?, args.out),
        Command::Run(args) => run_node(args),
    }
}

fn run_node(args: RunArgs) -> Result<(), CliError> {
    let RunArgs {
        input,
        params,
        param,
        continue_on_fail,
        node_name,
        out,
    } = args;

    let run_id = Uuid::new_v4().to_string();
    let timer = Instant::now();
    let node = DebugHelper;
    let description = node.description();

    let mut parameters = load_parameters(params.as_deref(), &param)?;
    coerce_declared_types(&mut parameters, &description);

    let schema = parameters_json_schema()?;
    let report = validate_parameters(&Value::Object(parameters.clone()), &schema)?;
    for warning in &report.warnings {
        tracing::warn!(
            event = "parameter_warning",
            path = %warning.path,
            message = %warning.message
        );
    }
    if !report.is_ok() {
        return Err(CliError::InvalidParameters(describe_issues(&report.errors)));
    }

    let items = load_items(input.as_deref())?;
    let mut store = ParameterStore::new(&description);
    store.extend(&parameters)?;
    let ctx = LocalContext::new(NodeRef::new(node_name, NODE_NAME), items, store)
        .with_continue_on_fail(continue_on_fail);

    tracing::info!(event = "run_started", run_id = %run_id, continue_on_fail = continue_on_fail);

    let output = match node.execute(&ctx) {
        Ok(output) => output,
        Err(err) => {
            tracing::error!(
                event = "run_finished",
                run_id = %run_id,
                status = "error",
                kind = err.kind(),
                node = err.node().map_or("", |node| node.name.as_str()),
                error = %err
            );
            return Err(err.into());
        }
    };

    emit(&output, out)?;

    let failed = output.iter().filter(|item| item.is_error()).count();
    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(
        event = "run_finished",
        run_id = %run_id,
        status = "success",
        items = output.len(),
        failed_items = failed,
        duration_ms = duration_ms
    );

    Ok(())
}

fn emit<T: Serialize>(value: &T, out: Option<PathBuf>) -> Result<(), CliError> {
    match out {
        Some(path) => {
            write_json_atomic(&path, value)?;
            tracing::info!(event = "output_written", path = %path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn describe_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.path, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn run_args(param: Vec<(String, Value)>, out: Option<PathBuf>) -> RunArgs {
        RunArgs {
            input: None,
            params: None,
            param,
            continue_on_fail: false,
            node_name: DISPLAY_NAME.to_string(),
            out,
        }
    }

    fn flag(raw: &str) -> (String, Value) {
        parse_param(raw).expect("valid flag")
    }

    #[test]
    fn run_rejects_parameters_outside_the_schema() {
        let args = run_args(
            vec![flag("category=oom"), flag("memorySizeValue=lots")],
            None,
        );
        match run_node(args) {
            Err(CliError::InvalidParameters(message)) => {
                assert!(message.contains("/memorySizeValue"), "message: {message}");
            }
            other => panic!("expected invalid parameters, got {other:?}"),
        }
    }

    #[test]
    fn run_rejects_undeclared_parameters() {
        let args = run_args(vec![flag("operation=explode")], None);
        assert!(matches!(run_node(args), Err(CliError::InvalidParameters(_))));
    }

    #[test]
    fn run_surfaces_node_errors() {
        let args = run_args(
            vec![flag("throwErrorType=NodeOperationError"), flag("throwErrorMessage=halt")],
            None,
        );
        match run_node(args) {
            Err(CliError::Node(err)) => {
                assert_eq!(err.kind(), "NodeOperationError");
                assert_eq!(err.to_string(), "halt");
            }
            other => panic!("expected node error, got {other:?}"),
        }
    }

    #[test]
    fn run_writes_generated_items() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("items.json");
        let args = run_args(
            vec![
                flag("category=randomData"),
                flag("randomDataType=uuid"),
                flag("randomDataCount=2.0"),
                flag("randomDataSeed=7"),
            ],
            Some(out.clone()),
        );
        run_node(args).expect("run succeeds");

        let written = std::fs::read_to_string(&out).expect("output written");
        let items: Value = serde_json::from_str(&written).expect("json output");
        let generated = &items[0]["json"]["generatedItems"];
        assert_eq!(generated.as_array().map(Vec::len), Some(2));
        assert_eq!(items[0]["pairedItem"], json!({"item": 0}));
    }
}
