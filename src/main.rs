//! Palpiteiro - Lotofácil results, suggestions and bet checking in the terminal.

use palpiteiro::{App, Config, Result, config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // The TUI owns stdout, so logs go to a daily file.
    let log_dir = config::log_dir()?;
    std::fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::daily(&log_dir, "palpiteiro.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palpiteiro=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    // Load configuration
    let config = Config::load_or_default()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    // Run the application
    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
