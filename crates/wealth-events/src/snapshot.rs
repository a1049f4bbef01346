//! Snapshot Schemas
//!
//! Serializable views of the full simulation state at a point in time.
//! Snapshots are read-only over the model: they carry per-agent wealth and
//! position plus per-cell occupant counts, which is everything an external
//! reporting tool needs.

use serde::{Deserialize, Serialize};

/// A complete snapshot of the simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WealthSnapshot {
    pub snapshot_id: String,
    pub tick: u64,
    pub triggered_by: String,
    pub model: ModelSnapshot,
    pub agents: Vec<AgentSnapshot>,
    /// Occupied cells only; empty cells are omitted.
    pub cells: Vec<CellSnapshot>,
    pub totals: ComputedTotals,
}

impl WealthSnapshot {
    pub fn new(snapshot_id: impl Into<String>, tick: u64, triggered_by: impl Into<String>) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            tick,
            triggered_by: triggered_by.into(),
            model: ModelSnapshot::default(),
            agents: Vec::new(),
            cells: Vec::new(),
            totals: ComputedTotals::default(),
        }
    }
}

/// Fixed model parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub width: u32,
    pub height: u32,
    pub agent_count: usize,
}

/// One agent's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub agent_id: usize,
    pub wealth: u32,
    pub x: u32,
    pub y: u32,
}

/// Occupant count for one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub x: u32,
    pub y: u32,
    pub occupant_count: u32,
}

/// Aggregates derived from the agent list.
///
/// Total wealth is the conserved quantity of the model; it is included in
/// every snapshot so a reader can verify conservation across a run without
/// re-summing agents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedTotals {
    pub total_wealth: u64,
    pub occupied_cells: usize,
}
