//! Widget policy: which field to read, when to look up the display element,
//! and what to show when the fetch fails.
//!
//! Two deployments of the widget disagree on all three, so they are carried as
//! data instead of being hard-wired.

use serde::Deserialize;

/// Placeholder written by `FailureDisplay::Placeholder` unless configured otherwise.
pub const DEFAULT_PLACEHOLDER: &str = "—";

/// Name of the numeric field in the endpoint's JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountField {
    #[default]
    Views,
    Count,
}

impl CountField {
    pub fn as_str(self) -> &'static str {
        match self {
            CountField::Views => "views",
            CountField::Count => "count",
        }
    }
}

/// When the display element is looked up relative to the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementLookup {
    /// Look up first; a missing element means no request is made.
    BeforeFetch,
    /// Fetch first; a missing element at write time discards the result.
    #[default]
    AfterFetch,
}

/// What the display element shows after a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FailureDisplay {
    #[default]
    Untouched,
    Placeholder(String),
}

impl FailureDisplay {
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            FailureDisplay::Untouched => None,
            FailureDisplay::Placeholder(glyph) => Some(glyph.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetPolicy {
    pub field: CountField,
    pub lookup: ElementLookup,
    pub on_failure: FailureDisplay,
}

impl WidgetPolicy {
    /// Reads `views`, looks the element up after the fetch, leaves it alone on failure.
    pub fn views_variant() -> Self {
        Self {
            field: CountField::Views,
            lookup: ElementLookup::AfterFetch,
            on_failure: FailureDisplay::Untouched,
        }
    }

    /// Reads `count`, skips the fetch without an element, shows a dash on failure.
    pub fn count_variant() -> Self {
        Self {
            field: CountField::Count,
            lookup: ElementLookup::BeforeFetch,
            on_failure: FailureDisplay::Placeholder(DEFAULT_PLACEHOLDER.to_string()),
        }
    }
}
