//! Visitor counter widget: one GET, one conditional write, one catch-all.
//!
//! `run` never returns an error. Every failure after the element guard is
//! logged with its kind and, depending on policy, replaced by a placeholder.

use std::sync::Arc;

use viscount_core::error::{CounterError, ErrorKind, Result};
use viscount_core::protocol::response::{decode_reading, CounterReading};
use viscount_core::{ElementLookup, WidgetPolicy};

use crate::config::WidgetSection;
use crate::document::Document;
use crate::source::{CounterSource, HttpCounterSource};

/// What a single `run` did. Informational; callers may ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Fetched value written to the element.
    Displayed(String),
    /// Element absent before fetching; no request made.
    SkippedNoElement,
    /// Fetched value, but the element was gone at write time.
    Discarded(String),
    /// Fetch or decode failed; the error was logged.
    Failed {
        kind: ErrorKind,
        placeholder_written: bool,
    },
}

pub struct VisitorCounterWidget {
    source: Arc<dyn CounterSource>,
    document: Arc<dyn Document>,
    element_id: String,
    policy: WidgetPolicy,
}

impl VisitorCounterWidget {
    pub fn new(
        source: Arc<dyn CounterSource>,
        document: Arc<dyn Document>,
        element_id: impl Into<String>,
        policy: WidgetPolicy,
    ) -> Self {
        Self {
            source,
            document,
            element_id: element_id.into(),
            policy,
        }
    }

    /// Build a widget backed by an HTTP source from the `widget` config section.
    pub fn from_config(section: &WidgetSection, document: Arc<dyn Document>) -> Result<Self> {
        let source = HttpCounterSource::new(section.endpoint.clone())?;
        Ok(Self::new(
            Arc::new(source),
            document,
            section.element_id.clone(),
            section.policy(),
        ))
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn policy(&self) -> &WidgetPolicy {
        &self.policy
    }

    /// Fetch and decode one reading without touching the document.
    pub async fn fetch_reading(&self) -> Result<CounterReading> {
        let resp = self.source.fetch().await?;
        decode_reading(resp.status, &resp.body, self.policy.field)
    }

    pub async fn run(&self) -> RunOutcome {
        if self.policy.lookup == ElementLookup::BeforeFetch
            && !self.document.has_element(&self.element_id)
        {
            tracing::debug!(element = %self.element_id, "display element missing; skipping fetch");
            return RunOutcome::SkippedNoElement;
        }

        let text = match self.fetch_reading().await {
            Ok(reading) => reading.to_string(),
            Err(e) => return self.fail(e),
        };

        if self.document.set_text_content(&self.element_id, &text) {
            tracing::debug!(element = %self.element_id, value = %text, "visitor count displayed");
            RunOutcome::Displayed(text)
        } else {
            tracing::debug!(element = %self.element_id, value = %text, "display element missing; result discarded");
            RunOutcome::Discarded(text)
        }
    }

    fn fail(&self, e: CounterError) -> RunOutcome {
        let kind = e.kind();
        tracing::error!(error = %e, kind = kind.as_str(), "visitor counter unavailable");

        let placeholder_written = match self.policy.on_failure.placeholder() {
            Some(glyph) => self.document.set_text_content(&self.element_id, glyph),
            None => false,
        };

        RunOutcome::Failed {
            kind,
            placeholder_written,
        }
    }
}
