//! Pagesift CLI
//!
//! Fetches a page, prints the structured content, and optionally writes the
//! `.txt` / `.json` exports. Failures are printed as `"ERROR:"`-prefixed
//! messages rather than stack traces.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use pagesift::config::AppConfig;
use pagesift::error::ConfigError;
use pagesift::export::Export;
use pagesift::pipeline::{Pipeline, ProcessOutcome};
use pagesift::session::SessionContext;

/// Pagesift - structured text from any public web page
#[derive(Parser, Debug)]
#[command(name = "pagesift")]
#[command(author = "Pagesift Team <team@pagesift.dev>")]
#[command(version)]
#[command(about = "Fetch a web page and sift its content into labeled sections")]
struct Args {
    /// Page URL (must start with http or https)
    url: String,

    /// Write the structured text to this .txt file
    #[arg(long)]
    out_txt: Option<PathBuf>,

    /// Write the structured text to this .json file
    #[arg(long)]
    out_json: Option<PathBuf>,

    /// Skip the LLM structuring pass and print the raw extraction
    #[arg(long)]
    no_llm: bool,

    /// Skip session persistence
    #[arg(long)]
    no_store: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    if args.no_llm {
        config.llm = None;
    } else if config.llm.is_none() {
        return Err(ConfigError::MissingVar("AZURE_OPENAI_ENDPOINT"))
            .context("LLM structuring requires Azure OpenAI settings (or pass --no-llm)");
    }
    if args.no_store {
        config.store = None;
    }

    let pipeline = Pipeline::from_config(&config)?;
    let mut session = SessionContext::new();

    let outcome = pipeline.process_url(&args.url, &mut session).await;

    // Persistence is best-effort; a store failure never masks the result.
    if let Err(err) = pipeline.persist(&session).await {
        warn!("{}", err.user_message());
    }

    match outcome {
        ProcessOutcome::Structured {
            content,
            dropped_tokens,
        } => {
            if dropped_tokens > 0 {
                eprintln!(
                    "Warning: the scraped content was too long and {dropped_tokens} tokens \
                     were removed before structuring."
                );
            }

            println!("{content}");

            if let Some(path) = &args.out_txt {
                Export::write_txt(&content, path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            if let Some(path) = &args.out_json {
                Export::write_json(&content, path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }

            Ok(())
        }
        ProcessOutcome::Failed { message } => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}
