//! Shared event and snapshot types for the wealth exchange simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency of the core crate and of any external reporting
//! tooling that reads simulation output.

pub mod event;
pub mod snapshot;

// Re-export event types
pub use event::{EventKind, TickEvent};

// Re-export snapshot types
pub use snapshot::{
    AgentSnapshot, CellSnapshot, ComputedTotals, ModelSnapshot, WealthSnapshot,
};
