//! Top-level facade crate for viscount.
//!
//! Re-exports core types and the widget runtime so users can depend on a single crate.

pub mod core {
    pub use viscount_core::*;
}

pub mod widget {
    pub use viscount_widget::*;
}
