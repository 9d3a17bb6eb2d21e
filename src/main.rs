use anyhow::Context;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, fmt};

use event_requests::shell::app::App;
use event_requests::shell::config::Config;
use event_requests::shell::runner::run;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    // stdout carries the view stream, so logs go to stderr.
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let mut app = App::seeded(&config);
    tracing::info!(
        events = app.catalog().len(),
        page_size = config.page_size.get(),
        seeded = config.seed.is_some(),
        "event requests ready, reading commands from stdin"
    );

    run(&mut app, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
    tracing::info!("input closed, shutting down");
    Ok(())
}
