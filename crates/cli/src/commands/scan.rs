//! scan CLI command: one-shot snapshot scan.
//!
//! Fetches a single market snapshot, runs the signal engine over it, and
//! prints the ranked instruments as a table. Useful for eyeballing the
//! market without standing up the daemon.

use anyhow::Result;
use clap::Args;
use perp_radar_core::ConfigLoader;
use perp_radar_hyperliquid::HyperliquidClient;
use perp_radar_signals::{Signal, SignalEngine};

/// Arguments for the scan command.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Config file path
    #[arg(short, long, default_value = "config/Config.toml")]
    pub config: String,

    /// Maximum number of rows to print (defaults to the configured top N)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Runs the scan command.
///
/// # Errors
/// Returns an error if the config cannot be loaded or the snapshot fetch
/// fails.
pub async fn run_scan(args: ScanArgs) -> Result<()> {
    let config = ConfigLoader::load_from(&args.config)?;
    let top_n = args.limit.unwrap_or(config.radar.top_n);

    let client = HyperliquidClient::new(config.hyperliquid.api_url.clone())?;
    let engine = SignalEngine::default().with_top_n(top_n);

    tracing::info!(
        "Fetching market snapshot from {}",
        config.hyperliquid.api_url
    );

    let snapshot = client.meta_and_asset_ctxs().await?;
    let universe_size = snapshot.universe.len();
    let signals = engine.compute_signals(&snapshot.universe, &snapshot.contexts);

    print_signal_table(&signals, universe_size);

    Ok(())
}

fn print_signal_table(signals: &[Signal], universe_size: usize) {
    println!("\n{}", "=".repeat(110));
    println!(
        "Perp Signal Radar - top {} of {} listed instruments",
        signals.len(),
        universe_size
    );
    println!("{}", "=".repeat(110));
    println!(
        "{:<5} {:<10} {:>13} {:>9} {:>11} {:>11} {:>11} {:>7}  {}",
        "Rank", "Symbol", "Price", "24h", "Volume", "Funding", "OI", "Score", "Tags"
    );
    println!("{}", "-".repeat(110));

    for (idx, signal) in signals.iter().enumerate() {
        let tags = signal
            .tags
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "{:<5} {:<10} {:>13} {:>9} {:>11} {:>11} {:>11} {:>7.2}  {}",
            idx + 1,
            signal.symbol,
            format_price(signal.price),
            format_signed_pct(signal.change_24h, 2),
            format_usd(signal.volume_24h),
            format_signed_pct(signal.funding_rate, 4),
            format_usd(signal.open_interest),
            signal.score,
            tags
        );
    }

    println!("{}", "=".repeat(110));
    println!();
}

/// Formats a USD amount with a B/M/K suffix.
fn format_usd(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("${:.2}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.2}K", value / 1_000.0)
    } else {
        format!("${value:.2}")
    }
}

/// Formats a price with extra precision below one dollar.
fn format_price(price: f64) -> String {
    if price < 1.0 {
        format!("${price:.5}")
    } else {
        format!("${price:.2}")
    }
}

/// Formats a percentage with an explicit sign.
fn format_signed_pct(value: f64, decimals: usize) -> String {
    format!("{value:+.decimals$}%")
}
