//! Widget config loader (strict parsing).

pub mod schema;

use std::fs;

use viscount_core::error::{CounterError, Result};

pub use schema::{FailureMode, StubSection, ViscountConfig, WidgetSection, PLACEHOLDER_ENDPOINT};

pub fn load_from_file(path: &str) -> Result<ViscountConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| CounterError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ViscountConfig> {
    let cfg: ViscountConfig = serde_yaml::from_str(s)
        .map_err(|e| CounterError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    if cfg.widget.uses_placeholder_endpoint() {
        tracing::warn!(endpoint = %cfg.widget.endpoint, "widget.endpoint is still the checked-in placeholder");
    }
    if cfg.widget.ignores_placeholder() {
        tracing::warn!(placeholder = %cfg.widget.placeholder, "widget.placeholder is ignored while on_failure is untouched");
    }
    Ok(cfg)
}
