//! HTTP server for the daycare billing engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use daycare_billing::api::{AppState, create_router};
use daycare_billing::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "daycare-billing")]
#[command(about = "Attendance-driven tuition billing API for a daycare facility")]
struct Args {
    /// Facility configuration directory
    #[arg(long, env = "BILLING_CONFIG", default_value = "./config/sunny_days")]
    config: PathBuf,

    /// Address to listen on
    #[arg(long, env = "BILLING_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = ConfigLoader::load(&args.config)?;
    info!(
        facility = %config.facility().id,
        groups = config.config().groups().len(),
        children = config.config().children().len(),
        rate_schedules = config.config().rates().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = TcpListener::bind(args.bind).await?;
    info!(address = %args.bind, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
