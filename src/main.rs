//! Arbitrage Spread Monitor - Main Entry Point
//!
//! Periodically pulls the quote feed, renders the ranked table and profit tiers, and takes
//! search/sort/fee/investment commands from stdin.

use arb_spread_monitor::*;
use anyhow::Result;
use arb_spread_monitor::controller::{Command, DashboardRuntime};
use arb_spread_monitor::network::HttpQuoteSource;
use arb_spread_monitor::storage::PreferenceStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = CONFIG.clone();
    utils::setup_output_directories(&config)?;

    // Initialize logging
    let _logging_guard = utils::setup_logging(&config)?;

    info!("📡 Arbitrage Spread Monitor v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   Feed: {}", config.arbitrage_endpoint());
    info!("   Refresh Interval: {}s", config.refresh_interval_secs);
    info!("   Request Timeout: {}s", config.request_timeout_secs);
    info!("   Default Fee: {}% per leg", config.default_fee_rate_pct);
    info!("   Default Investment: ${}", config.default_investment_usd);
    info!("   Preferences: {}", config.preferences_path);
    info!("   Logs: {} ({})", config.log_dir, config.log_level);

    let source = HttpQuoteSource::new(&config)?;
    let preferences = PreferenceStore::new(&config.preferences_path);
    let view_state = ViewState::new(config.default_fee_rate_pct, config.default_investment_usd);

    let runtime = DashboardRuntime::new(source, preferences, view_state, config.refresh_interval());
    let commands = runtime.commands();

    // Renderer
    let mut views = runtime.subscribe();
    let max_rows = config.max_display_rows;
    tokio::spawn(async move {
        while views.changed().await.is_ok() {
            let view = views.borrow_and_update().clone();
            utils::print_dashboard(&view, max_rows);
        }
    });

    // Interactive prompt, read on its own thread so a pending stdin read never blocks exit
    controller::spawn_stdin_prompt(commands.clone())?;

    // Setup shutdown handler
    let signal_commands = commands.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("\n📛 Received shutdown signal (Ctrl+C)...");
            let _ = signal_commands.send(Command::Shutdown).await;
        }
    });

    info!("\n🚀 Starting dashboard loop...\n");
    let final_view = runtime.run().await;

    info!("\n🛑 Shutting down gracefully...");
    info!("   Opportunities in last snapshot: {}", final_view.metrics.count);
    if let Some(updated) = final_view.last_updated {
        info!("   Last refresh: {}", updated.to_rfc3339());
    }

    Ok(())
}
