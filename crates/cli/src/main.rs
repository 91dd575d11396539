use clap::{Parser, Subcommand};

mod commands;

use commands::{ScanArgs, ServeArgs};

#[derive(Parser)]
#[command(name = "perp-radar")]
#[command(about = "Market signal radar for Hyperliquid perpetuals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the radar daemon: background refresher plus web API
    Serve(ServeArgs),
    /// Fetch one snapshot and print the ranked signals
    Scan(ScanArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Serve(args) => {
            commands::run_serve(args).await?;
        }
        Commands::Scan(args) => {
            commands::run_scan(args).await?;
        }
    }

    Ok(())
}
