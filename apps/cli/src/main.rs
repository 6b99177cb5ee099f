use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bandsintown_cli=info,bandsintown_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::Cli::parse();
    let outcome = cli::run(args, &mut std::io::stdout().lock()).await?;

    Ok(match outcome {
        cli::Outcome::Found => ExitCode::SUCCESS,
        cli::Outcome::NotFound => ExitCode::from(2),
    })
}
