mod config;
mod drafting;
mod errors;
mod llm_client;
mod models;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::drafting::generator::{run_job, DraftOutcome};
use crate::drafting::jobs::DraftJob;
use crate::errors::AppError;
use crate::llm_client::{CompletionBackend, LlmClient};

/// Reads one draft job as JSON from stdin and prints the outcome as JSON.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the JSON result only
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting drafter v{}", env!("CARGO_PKG_VERSION"));

    let llm = match &config.anthropic_api_key {
        Some(api_key) => {
            let client = LlmClient::new(api_key.clone(), config.llm_timeout)
                .context("Failed to build LLM HTTP client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            info!("ANTHROPIC_API_KEY not set, running in prompt-only mode");
            None
        }
    };

    let backend = llm.as_ref().map(|c| c as &dyn CompletionBackend);
    match run(backend).await {
        Ok(outcome) => println!("{}", serde_json::to_string_pretty(&outcome)?),
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&err.to_body())?);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(backend: Option<&dyn CompletionBackend>) -> Result<DraftOutcome, AppError> {
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;

    let job: DraftJob = serde_json::from_str(&input)?;
    info!("Received {:?} draft job", job.mode());

    run_job(backend, &job).await
}
