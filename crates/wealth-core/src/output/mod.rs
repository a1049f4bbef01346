//! Output Generation
//!
//! Snapshot generation and file writing.

pub mod snapshot;

pub use snapshot::*;
