use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use std::env;

mod scrape;
mod server;
mod telemetry;

#[derive(Parser)]
#[command(name = "eventscrape", about = "Event extraction HTTP service")]
struct Cli {
    /// Bind address; falls back to SCRAPE_ADDR, then 0.0.0.0:8080
    #[arg(short, long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    // initialize logging/tracing (stderr). Respect RUST_LOG and SCRAPE_LOG_FORMAT
    telemetry::init_tracing();

    let addr = cli
        .addr
        .or_else(|| env::var("SCRAPE_ADDR").ok())
        .unwrap_or_else(|| "0.0.0.0:8080".to_string());

    let state = server::ApiState::new()?;
    server::start_server(&addr, state).await
}
