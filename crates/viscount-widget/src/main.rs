//! viscount widget runner.
//!
//! Loads `viscount.yaml` (or the path given as the first argument), builds a
//! page holding the display element, runs the widget once, and prints the
//! element's final text.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use viscount_widget::{config, Page, VisitorCounterWidget};

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

    let element_id = cfg.widget.element_id.clone();
    let page = Arc::new(Page::with_element(element_id.clone(), ""));
    let widget = match VisitorCounterWidget::from_config(&cfg.widget, page.clone()) {
        Ok(w) => w,
        Err(e) => {
            tracing::error!(error = %e, "widget init failed");
            return ExitCode::FAILURE;
        }
    };

    let outcome = widget.run().await;
    tracing::info!(?outcome, "widget run finished");

    println!("#{element_id}: {}", page.text_content(&element_id).unwrap_or_default());
    ExitCode::SUCCESS
}
