use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use fieldlog_cli::cli::Cli;
use fieldlog_cli::commands::{self, Settings};
use fieldlog_core::models::participant::RandomIds;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let settings = Settings::resolve(
        cli.config,
        cli.data_dir,
        cli.participant.as_deref(),
        &RandomIds,
    )?;
    tracing::debug!(
        participant = %settings.participant_id,
        data_dir = %settings.data_dir.display(),
        "settings resolved"
    );

    let output = commands::run(&settings, cli.command).await?;
    print!("{output}");
    Ok(())
}
