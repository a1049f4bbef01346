//! Grid Components
//!
//! A bounded 2D lattice tracking which agents occupy which cell. Multiple
//! agents may share a cell. Edges do not wrap: neighborhood queries at a
//! boundary simply return fewer cells.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::agent::AgentId;

/// An integer coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Error raised when constructing a grid with bad parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Bounded multi-occupancy grid.
///
/// Each cell holds an ordered list of occupants; insertion order is kept so
/// that identical seeds replay identically. Out-of-range coordinates are a
/// programming error: query methods panic rather than clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: HashMap<Position, Vec<AgentId>>,
}

impl Grid {
    /// Creates an empty grid. Zero-sized dimensions are rejected.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: HashMap::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether a coordinate lies on the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    fn assert_in_bounds(&self, position: Position) {
        assert!(
            self.contains(position),
            "position {} out of bounds for {}x{} grid",
            position,
            self.width,
            self.height
        );
    }

    /// Returns the Moore neighborhood of a cell: the up-to-8 adjacent cells
    /// including diagonals, excluding the center. Edges do not wrap, so
    /// corner cells have 3 neighbors and edge cells 5. A 1x1 grid yields an
    /// empty neighborhood.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn neighbors_of(&self, position: Position) -> Vec<Position> {
        self.assert_in_bounds(position);

        let mut neighbors = Vec::with_capacity(8);
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = position.x as i64 + dx;
                let ny = position.y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= self.width as i64 || ny >= self.height as i64 {
                    continue;
                }
                neighbors.push(Position::new(nx as u32, ny as u32));
            }
        }
        neighbors
    }

    /// Places an agent on a cell during setup.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn place(&mut self, agent: AgentId, position: Position) {
        self.assert_in_bounds(position);
        self.cells.entry(position).or_default().push(agent);
    }

    /// Relocates an agent from one cell to another.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range, or if the agent is not
    /// currently at `from` - both indicate the occupancy map and the agent's
    /// recorded position have drifted apart.
    pub fn move_agent(&mut self, agent: AgentId, from: Position, to: Position) {
        self.assert_in_bounds(from);
        self.assert_in_bounds(to);

        let cell = self
            .cells
            .get_mut(&from)
            .unwrap_or_else(|| panic!("agent {} not at {}", agent, from));
        let index = cell
            .iter()
            .position(|occupant| *occupant == agent)
            .unwrap_or_else(|| panic!("agent {} not at {}", agent, from));
        cell.remove(index);
        if cell.is_empty() {
            self.cells.remove(&from);
        }

        self.cells.entry(to).or_default().push(agent);
    }

    /// All agents currently at a cell, in insertion order. The querying
    /// agent is included when present; callers choosing a gift recipient
    /// draw from this full list, self and all.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn occupants(&self, position: Position) -> &[AgentId] {
        self.assert_in_bounds(position);
        self.cells.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of cells with at least one occupant.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Occupant count at a cell, zero for empty cells.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn occupant_count(&self, position: Position) -> usize {
        self.occupants(position).len()
    }
}
