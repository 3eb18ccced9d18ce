//! spai-mg (Music Generation) - Main entry point
//!
//! Simulated music generation microservice for StableMusicSPAI. No real
//! model inference happens; the service fabricates track ids after a
//! randomized delay so the front-end can be developed against a live API.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use spai_mg::synth::RandomTrackSource;
use spai_mg::{build_router, AppState};

/// Command-line arguments for spai-mg
#[derive(Parser, Debug)]
#[command(name = "spai-mg")]
#[command(about = "Music Generation microservice for StableMusicSPAI")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5745", env = "SPAI_MG_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spai_mg=debug,tower_http=debug".into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting SPAI Music Generation (spai-mg) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Create application state and router
    let state = AppState::new(Arc::new(RandomTrackSource));
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("spai-mg serving on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    spai_common::serve::serve(addr, app).await?;

    Ok(())
}
