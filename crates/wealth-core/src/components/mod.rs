//! Simulation Components
//!
//! The agent and grid data types that make up the simulation state.

pub mod agent;
pub mod grid;

pub use agent::{Agent, AgentId, STARTING_WEALTH};
pub use grid::{Grid, GridError, Position};
