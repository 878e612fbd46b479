use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vending::application::session::Session;
use vending::config::MachineConfig;
use vending::interfaces::console::{ConsoleSink, ConsoleSource};
use vending::interfaces::csv::transcript_writer::TranscriptWriter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file describing denominations, starting coins and items.
    /// Without it the stock machine is used.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every command line and its response to this CSV file
    #[arg(long)]
    transcript: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => MachineConfig::from_path(path).into_diagnostic()?,
        None => MachineConfig::default(),
    };
    let machine = config.build().into_diagnostic()?;

    let mut session = Session::new(machine, Box::new(ConsoleSource::stdin()))
        .with_sink(Box::new(ConsoleSink::stdout()));
    if let Some(path) = cli.transcript {
        let transcript = TranscriptWriter::from_path(path).into_diagnostic()?;
        session = session.with_sink(Box::new(transcript));
    }

    let machine = session.run().await.into_diagnostic()?;

    let state = serde_json::to_string(&machine.snapshot()).into_diagnostic()?;
    tracing::info!(%state, "final machine state");

    Ok(())
}
