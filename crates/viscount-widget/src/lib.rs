//! viscount widget library entry.
//!
//! This crate wires the config loader, the display document, the counter
//! source, and the widget into a runnable stack, plus the local counting
//! endpoint used in development. It is consumed by the binaries and by
//! integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod document;
pub mod source;
pub mod stub;
pub mod widget;

pub use document::{Document, Page};
pub use source::{CounterSource, FetchedResponse, HttpCounterSource};
pub use widget::{RunOutcome, VisitorCounterWidget};
