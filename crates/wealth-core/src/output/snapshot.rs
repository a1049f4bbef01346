//! Snapshot Generation
//!
//! Builds read-only snapshots of the model state and writes them to disk
//! at regular intervals. Cells are listed in row-major order so that two
//! runs with the same seed emit byte-identical files.

use std::fs;
use std::path::Path;

use wealth_events::{
    AgentSnapshot, CellSnapshot, ComputedTotals, ModelSnapshot, WealthSnapshot,
};

use crate::components::grid::Position;
use crate::model::Model;

/// Tracks snapshot ids and cadence across a run.
pub struct SnapshotGenerator {
    next_snapshot_id: u64,
    snapshot_interval: u64,
}

impl SnapshotGenerator {
    pub fn new(snapshot_interval: u64) -> Self {
        Self {
            next_snapshot_id: 1,
            snapshot_interval,
        }
    }

    pub fn should_snapshot(&self, current_tick: u64) -> bool {
        current_tick > 0 && current_tick % self.snapshot_interval == 0
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("snap_{:06}", self.next_snapshot_id);
        self.next_snapshot_id += 1;
        id
    }

    pub fn snapshot_count(&self) -> u64 {
        self.next_snapshot_id - 1
    }
}

/// Generate a complete snapshot of the model state.
pub fn generate_snapshot(
    model: &Model,
    generator: &mut SnapshotGenerator,
    triggered_by: &str,
) -> WealthSnapshot {
    let mut snapshot = WealthSnapshot::new(generator.next_id(), model.tick(), triggered_by);

    let grid = model.grid();
    snapshot.model = ModelSnapshot {
        width: grid.width(),
        height: grid.height(),
        agent_count: model.agents().len(),
    };

    for agent in model.agents() {
        snapshot.agents.push(AgentSnapshot {
            agent_id: agent.id.0,
            wealth: agent.wealth,
            x: agent.position.x,
            y: agent.position.y,
        });
    }

    // Row-major scan keeps cell order independent of hash-map iteration
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let count = grid.occupant_count(Position::new(x, y));
            if count > 0 {
                snapshot.cells.push(CellSnapshot {
                    x,
                    y,
                    occupant_count: count as u32,
                });
            }
        }
    }

    snapshot.totals = ComputedTotals {
        total_wealth: model.total_wealth(),
        occupied_cells: grid.occupied_cells(),
    };

    snapshot
}

/// Write snapshot to file
pub fn write_snapshot(snapshot: &WealthSnapshot, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write snapshot to the snapshots directory
pub fn write_snapshot_to_dir(snapshot: &WealthSnapshot) -> std::io::Result<()> {
    let path = format!("output/snapshots/snap_{:06}.json", snapshot.tick);
    write_snapshot(snapshot, path)
}

/// Write current state (overwrites each time)
pub fn write_current_state(snapshot: &WealthSnapshot) -> std::io::Result<()> {
    write_snapshot(snapshot, "output/current_state.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::grid::Position;

    #[test]
    fn test_generator_cadence() {
        let generator = SnapshotGenerator::new(25);
        assert!(!generator.should_snapshot(0));
        assert!(!generator.should_snapshot(24));
        assert!(generator.should_snapshot(25));
        assert!(generator.should_snapshot(50));
    }

    #[test]
    fn test_generator_ids_are_sequential() {
        let mut generator = SnapshotGenerator::new(10);
        assert_eq!(generator.next_id(), "snap_000001");
        assert_eq!(generator.next_id(), "snap_000002");
        assert_eq!(generator.snapshot_count(), 2);
    }

    #[test]
    fn test_snapshot_captures_model_state() {
        let positions = [Position::new(0, 0), Position::new(0, 0), Position::new(2, 2)];
        let model = Model::with_placements(3, 3, &positions, 42).unwrap();
        let mut generator = SnapshotGenerator::new(10);

        let snapshot = generate_snapshot(&model, &mut generator, "test");

        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.model.width, 3);
        assert_eq!(snapshot.model.agent_count, 3);
        assert_eq!(snapshot.agents.len(), 3);
        assert_eq!(snapshot.totals.total_wealth, 3);
        assert_eq!(snapshot.totals.occupied_cells, 2);

        let cell = snapshot
            .cells
            .iter()
            .find(|c| c.x == 0 && c.y == 0)
            .expect("doubly occupied cell missing");
        assert_eq!(cell.occupant_count, 2);
    }
}
