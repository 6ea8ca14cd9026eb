use clap::Parser;

use pdfqa::application::services::PipelineError;
use pdfqa::infrastructure::observability::{TracingConfig, init_tracing};
use pdfqa::presentation::config::load_settings;
use pdfqa::presentation::questions::collect_questions;
use pdfqa::presentation::{Cli, build_pipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (settings, environment) = load_settings(cli.config.as_deref())?;
    init_tracing(&TracingConfig::from_settings(&settings.logging, environment))?;
    tracing::info!(%environment, pdf = %cli.pdf_path.display(), "Starting pdfqa");

    let questions =
        collect_questions(cli.questions_file.as_deref(), cli.questions.as_deref()).await?;
    let pipeline = build_pipeline(&settings, cli.reporting_enabled())?;

    let outcome = pipeline.run(&cli.pdf_path, &questions).await;
    println!("{}", serde_json::to_string_pretty(&outcome.results)?);

    match outcome.error {
        Some(PipelineError::Ingestion(e)) => Err(e.into()),
        Some(other) => {
            tracing::warn!(error = %other, state = %outcome.state, "Run finished without a report");
            Ok(())
        }
        None => {
            tracing::info!(
                answered = outcome.results.len(),
                failed = outcome.failures.len(),
                "Run complete"
            );
            Ok(())
        }
    }
}
