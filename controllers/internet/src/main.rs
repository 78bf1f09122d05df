//! Internet Controller
//!
//! Sync hook for a metacontroller CompositeController managing `Internet`
//! parents: probes three public websites on every sync and reports
//! readiness on the parent status, creating a production-test Deployment
//! when the parent asks for one.

use internet_controller::reconciler::{ProbeTargets, Reconciler};
use internet_controller::server::{build_router, AppState};
use probe_client::HttpProber;
use std::env;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG").unwrap_or_else(|_| "internet_controller=info,info".to_string()),
        )
        .init();

    info!("Starting Internet Controller sync hook");

    // Load configuration from environment variables
    let bind_addr = env::var("HOOK_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    info!("Configuration:");
    info!("  Bind address: {}", bind_addr);

    let prober = HttpProber::new()?;
    let reconciler = Reconciler::new(prober, ProbeTargets::default());
    let app = build_router(AppState {
        reconciler: Arc::new(reconciler),
    });

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Sync hook listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
