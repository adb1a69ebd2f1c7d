use std::net::SocketAddr;

use serde::Deserialize;
use viscount_core::error::{CounterError, Result};
use viscount_core::policy::DEFAULT_PLACEHOLDER;
use viscount_core::{CountField, ElementLookup, FailureDisplay, WidgetPolicy};

/// Checked-in endpoint; must be replaced with the deployed counting endpoint.
pub const PLACEHOLDER_ENDPOINT: &str = "https://REPLACE_WITH_API_GATEWAY_ENDPOINT/visitors";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViscountConfig {
    pub version: u32,

    #[serde(default)]
    pub widget: WidgetSection,

    #[serde(default)]
    pub stub: StubSection,
}

impl ViscountConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CounterError::UnsupportedVersion);
        }

        self.widget.validate()?;
        self.stub.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    #[default]
    Untouched,
    Placeholder,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetSection {
    /// Not validated; a bad URL surfaces as a transport failure at run time.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_element_id")]
    pub element_id: String,

    #[serde(default)]
    pub field: CountField,

    #[serde(default)]
    pub lookup: ElementLookup,

    #[serde(default)]
    pub on_failure: FailureMode,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for WidgetSection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            element_id: default_element_id(),
            field: CountField::default(),
            lookup: ElementLookup::default(),
            on_failure: FailureMode::default(),
            placeholder: default_placeholder(),
        }
    }
}

impl WidgetSection {
    pub fn validate(&self) -> Result<()> {
        if self.element_id.trim().is_empty() {
            return Err(CounterError::Config("widget.element_id must not be empty".into()));
        }
        Ok(())
    }

    /// True when a custom `placeholder` is set but `on_failure` never writes it.
    pub fn ignores_placeholder(&self) -> bool {
        self.on_failure == FailureMode::Untouched && self.placeholder != DEFAULT_PLACEHOLDER
    }

    pub fn uses_placeholder_endpoint(&self) -> bool {
        self.endpoint.contains("REPLACE_WITH")
    }

    pub fn policy(&self) -> WidgetPolicy {
        let on_failure = match self.on_failure {
            FailureMode::Untouched => FailureDisplay::Untouched,
            FailureMode::Placeholder => FailureDisplay::Placeholder(self.placeholder.clone()),
        };
        WidgetPolicy {
            field: self.field,
            lookup: self.lookup,
            on_failure,
        }
    }
}

fn default_endpoint() -> String {
    PLACEHOLDER_ENDPOINT.into()
}
fn default_element_id() -> String {
    "visitor-count".into()
}
fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.into()
}

/// Local counting endpoint used for development and end-to-end tests.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StubSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_stub_field")]
    pub field: CountField,

    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,

    #[serde(default)]
    pub initial: u64,
}

impl Default for StubSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            path: default_path(),
            field: default_stub_field(),
            allowed_origin: default_allowed_origin(),
            initial: 0,
        }
    }
}

impl StubSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.path.starts_with('/') || self.path == "/healthz" {
            return Err(CounterError::Config(
                "stub.path must start with '/' and must not be /healthz".into(),
            ));
        }
        // Route captures and wildcards would make the router panic at build time.
        if self.path.contains(|c: char| c == ':' || c == '*') {
            return Err(CounterError::Config(
                "stub.path must be a literal path (no ':' or '*' segments)".into(),
            ));
        }
        if self.allowed_origin.trim().is_empty() {
            return Err(CounterError::Config("stub.allowed_origin must not be empty".into()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| CounterError::Config(format!("stub.listen must be a valid SocketAddr: {e}")))
    }
}

fn default_listen() -> String {
    "127.0.0.1:8787".into()
}
fn default_path() -> String {
    "/visitors".into()
}
fn default_stub_field() -> CountField {
    CountField::Count
}
fn default_allowed_origin() -> String {
    "*".into()
}
