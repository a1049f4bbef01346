//! Wealth Exchange Simulation Library
//!
//! A minimal agent-based model: agents move randomly on a bounded grid and
//! exchange one unit of wealth with a co-located agent each tick. The whole
//! run is reproducible from a single seed.

pub mod components;
pub mod config;
pub mod model;
pub mod output;
pub mod setup;
pub mod systems;

pub use components::{Agent, AgentId, Grid, GridError, Position, STARTING_WEALTH};
pub use config::{Config, ConfigError};
pub use model::{Model, ModelError};
pub use systems::TickLog;
