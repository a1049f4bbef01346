//! Agent Components
//!
//! The agent record: identity, wealth balance, and grid position.

use serde::{Deserialize, Serialize};

use super::grid::Position;

/// Wealth every agent starts with.
pub const STARTING_WEALTH: u32 = 1;

/// Unique identifier for an agent.
///
/// Ids are dense: agent `AgentId(i)` lives at index `i` of the model's
/// agent vector. The population is fixed after construction, so ids are
/// stable for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub usize);

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "agent_{:04}", self.0)
    }
}

/// A single agent in the simulation.
///
/// Wealth is a non-negative integer: an agent only gives when its wealth is
/// positive, and gives at most one unit per tick, so the balance can never
/// go below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub wealth: u32,
    pub position: Position,
}

impl Agent {
    /// Creates an agent at the given position with [`STARTING_WEALTH`].
    pub fn new(id: AgentId, position: Position) -> Self {
        Self {
            id,
            wealth: STARTING_WEALTH,
            position,
        }
    }

    /// Whether this agent has anything to give this tick.
    pub fn can_give(&self) -> bool {
        self.wealth > 0
    }
}
