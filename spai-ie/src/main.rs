//! spai-ie (IA Engine) - Main entry point
//!
//! Rule-based mock prediction microservice for StableMusicSPAI: marketing
//! propensity/segmentation and logistics provider selection for
//! print-on-demand orders. No real models run here.

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use spai_ie::build_router;

/// Command-line arguments for spai-ie
#[derive(Parser, Debug)]
#[command(name = "spai-ie")]
#[command(about = "IA Engine microservice for StableMusicSPAI")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5746", env = "SPAI_IE_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spai_ie=debug,tower_http=debug".into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting SPAI IA Engine (spai-ie) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let app = build_router();

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("spai-ie serving on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    spai_common::serve::serve(addr, app).await?;

    Ok(())
}
