//! Counting endpoint wire contract.
//!
//! The endpoint answers a bare GET with a JSON object holding one numeric
//! field. Decoding is panic-free: every malformed response is reported as a
//! `CounterError` so the widget can degrade instead of crashing the page.

pub mod response;
