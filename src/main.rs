//! Rugwatch - RugCheck risk report CLI
//!
//! Fetches risk reports for the mint addresses given on the command line
//! through the full cache + throttled queue path, then prints a
//! classified summary. Passing the same mint twice demonstrates the
//! cache: the second lookup never touches the network.

use rugwatch::{clamp_score, risk_level, ClientConfig, RugwatchClient, NEUTRAL_COLOR};

use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    let mints: Vec<String> = std::env::args().skip(1).collect();
    if mints.is_empty() {
        eprintln!("Usage: rugwatch <MINT_ADDRESS> [MINT_ADDRESS...]");
        eprintln!();
        eprintln!("Environment:");
        eprintln!("  RUGCHECK_BASE_URL  Override the upstream API (default: https://api.rugcheck.xyz/v1)");
        std::process::exit(1);
    }

    let config = ClientConfig::from_env();
    let client = RugwatchClient::new(&config);

    for mint in &mints {
        // First mint on the command line jumps the queue, like the
        // token-details screen does for the token the user is looking at
        let priority = mint == &mints[0];

        match client.get_report(mint, priority).await {
            Ok(Some(report)) => {
                let score = clamp_score(report.score_normalised);
                let level = risk_level(score);
                let name = report
                    .token_meta
                    .as_ref()
                    .map(|m| m.symbol.as_str())
                    .unwrap_or("?");

                println!();
                println!("🪙 {} ({})", mint, name);
                if report.rugged {
                    println!("   💀 RUGGED");
                }
                println!("   Score: {:.1}/100 → {} ({})", score, level, level.color());
                for risk in &report.risks {
                    println!("   ⚠️  {} [{}]: {}", risk.name, risk.level, risk.description);
                }
            }
            Ok(None) => {
                println!();
                println!("🪙 {}: no data available ({})", mint, NEUTRAL_COLOR);
            }
            Err(e) => {
                eprintln!("❌ {}: {}", mint, e);
            }
        }
    }

    let stats = client.cache_stats();
    println!();
    println!("📊 Cache: {} entries, {} hits / {} misses ({:.0}% hit rate)",
        stats.entries, stats.hits, stats.misses, stats.hit_rate);

    Ok(())
}
