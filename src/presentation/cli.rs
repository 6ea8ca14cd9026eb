use std::path::PathBuf;

use clap::Parser;

/// Answer questions about a PDF document and post the answers to Slack.
#[derive(Debug, Parser)]
#[command(name = "pdfqa", version, about)]
pub struct Cli {
    /// PDF document to ingest.
    pub pdf_path: PathBuf,

    /// File with one question per line. Blank lines are skipped.
    pub questions_file: Option<PathBuf>,

    /// Comma-separated questions, asked after those from the questions file.
    #[arg(short, long, value_name = "LIST")]
    pub questions: Option<String>,

    /// Extra configuration file layered over `config/`.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results without posting them to Slack.
    #[arg(long)]
    pub no_report: bool,
}

impl Cli {
    pub fn reporting_enabled(&self) -> bool {
        !self.no_report
    }
}
