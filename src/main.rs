use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use benefit_engine::api::{AppState, create_router};
use benefit_engine::calculation::simulate_submission;
use benefit_engine::config::{ConfigLoader, RulesConfig};
use benefit_engine::error::EngineError;
use benefit_engine::models::ProfileSubmission;
use benefit_engine::persistence::{
    DEFAULT_NAMESPACE, JsonFileStore, SimulationHistory, export_json,
};
use benefit_engine::telemetry::{self, TelemetryError};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "benefit-engine",
    about = "Simulate unemployment allowance eligibility and amounts",
    version
)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run one simulation from a JSON file and print the result
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: String,
    /// Directory holding the rule YAML files
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory for the file-backed history; in-memory when omitted
    #[arg(long)]
    store: Option<PathBuf>,
    /// History namespace
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            config: None,
            store: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// JSON file holding the claimant submission
    #[arg(long)]
    input: PathBuf,
    /// Directory holding the rule YAML files
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid submission in {path}: {source}")]
    Submission {
        path: String,
        source: serde_json::Error,
    },
    #[error("failed to serve on {bind}: {source}")]
    Server {
        bind: String,
        source: std::io::Error,
    },
}

fn load_rules(config: Option<&Path>) -> Result<RulesConfig, CliError> {
    match config {
        Some(dir) => Ok(ConfigLoader::load(dir)?.rules().clone()),
        None => Ok(RulesConfig::default()),
    }
}

async fn serve(args: ServeArgs) -> Result<(), CliError> {
    let rules = load_rules(args.config.as_deref())?;
    let history = match &args.store {
        Some(root) => SimulationHistory::open(Arc::new(JsonFileStore::new(root)), &args.namespace)?,
        None => SimulationHistory::in_memory(),
    };

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .map_err(|source| CliError::Server {
            bind: args.bind.clone(),
            source,
        })?;
    info!(
        bind = %args.bind,
        scheme = %rules.scheme().code,
        rules_version = %rules.scheme().version,
        "Benefit engine listening"
    );

    let app = create_router(AppState::new(rules, history));
    axum::serve(listener, app)
        .await
        .map_err(|source| CliError::Server {
            bind: args.bind,
            source,
        })
}

fn simulate(args: SimulateArgs) -> Result<(), CliError> {
    let rules = load_rules(args.config.as_deref())?;
    let path = args.input.display().to_string();
    let contents = fs::read_to_string(&args.input).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    let submission: ProfileSubmission = serde_json::from_str(&contents)
        .map_err(|source| CliError::Submission { path, source })?;

    let result = simulate_submission(submission, &rules, Utc::now())?;
    println!("{}", export_json(&result)?);
    Ok(())
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    match cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    {
        Command::Serve(args) => serve(args).await,
        Command::Simulate(args) => simulate(args),
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
