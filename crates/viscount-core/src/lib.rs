//! viscount core: transport-agnostic counter types, widget policy, and errors.
//!
//! This crate defines the response contract of the counting endpoint and the
//! error surface shared by the widget runtime and its tooling. It carries no
//! HTTP or runtime dependencies so the decoding rules can be reused anywhere a
//! counter body shows up.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every failure surfaces as `CounterError`/`Result`, which the widget turns
//! into a logged, non-fatal outcome.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;
pub mod protocol;

/// Shared result type.
pub use error::{CounterError, Result};
pub use policy::{CountField, ElementLookup, FailureDisplay, WidgetPolicy};
