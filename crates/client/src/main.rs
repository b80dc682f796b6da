//! Terminal client entry point.
mod app;
mod config;
mod input;
mod presentation;
mod state;

use anyhow::Result;
use app::App;
use config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();

    // Log to a file: the terminal itself is in raw mode while the game runs.
    let file_appender = tracing_appender::rolling::daily(config.log_dir(), "praeverse.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    App::bootstrap(config).await?.run().await
}
