//! Local counting endpoint.
//!
//! Serves the `stub` section of `viscount.yaml` (or the path given as the
//! first argument).

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use viscount_widget::{config, stub};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "viscount.yaml".to_string());
    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, path = %path, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    let app = match stub::build_router(&cfg.stub) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "stub init failed");
            return ExitCode::FAILURE;
        }
    };
    let listen = match cfg.stub.listen_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, "bad listen address");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(listen).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, %listen, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%listen, path = %cfg.stub.path, "counter-stub starting");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
