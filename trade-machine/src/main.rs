// Trade machine entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load and merge the performance and injury tables
// 4. Run the TUI until the user quits

use trade_machine::app;
use trade_machine::config;
use trade_machine::tui;

use anyhow::Context;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Trade machine starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: season starts {}, {} weeks, approval threshold {:.2}",
        config.season.start, config.season.weeks, config.scoring.approval_threshold
    );

    let app_state = app::AppState::load(config).context("failed to load player data")?;

    if let Err(e) = tui::run(app_state).await {
        error!("TUI error: {}", e);
        return Err(e);
    }

    info!("Trade machine shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("trade-machine.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trade_machine=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
