//! Simulation Model
//!
//! Owns the grid, the agent population, and the shared random generator,
//! and advances the simulation one tick at a time. There is no framework
//! base type to extend and no persistent scheduler object: the model is
//! plain composition, and the activation order is drawn fresh each tick.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::debug;

use crate::components::agent::Agent;
use crate::components::grid::{Grid, GridError, Position};
use crate::setup;
use crate::systems::{activation_order, give_phase, move_phase, TickLog};

/// Error raised when constructing a model with bad parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("population must be positive")]
    InvalidPopulation,
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// The wealth exchange model.
///
/// Every source of randomness in a run - initial placement, activation
/// order, move choice, gift-recipient choice - draws from the single
/// generator owned here, so a fixed seed reproduces the whole run.
#[derive(Debug)]
pub struct Model {
    grid: Grid,
    agents: Vec<Agent>,
    rng: SmallRng,
    tick: u64,
}

impl Model {
    /// Builds a model with `agent_count` agents placed uniformly at random
    /// on a `width` x `height` grid.
    pub fn new(agent_count: usize, width: u32, height: u32, seed: u64) -> Result<Self, ModelError> {
        if agent_count == 0 {
            return Err(ModelError::InvalidPopulation);
        }
        let mut grid = Grid::new(width, height)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let agents = setup::spawn_agents(agent_count, &mut grid, &mut rng);

        Ok(Self {
            grid,
            agents,
            rng,
            tick: 0,
        })
    }

    /// Builds a model with one agent per given position. Used for scripted
    /// scenarios where the starting layout must be exact.
    pub fn with_placements(
        width: u32,
        height: u32,
        positions: &[Position],
        seed: u64,
    ) -> Result<Self, ModelError> {
        if positions.is_empty() {
            return Err(ModelError::InvalidPopulation);
        }
        let mut grid = Grid::new(width, height)?;
        let agents = setup::place_agents(positions, &mut grid);

        Ok(Self {
            grid,
            agents,
            rng: SmallRng::seed_from_u64(seed),
            tick: 0,
        })
    }

    /// Advances the simulation by one tick.
    ///
    /// Draws a fresh uniform permutation of the population, then activates
    /// each agent exactly once in that order. An activation runs to
    /// completion - move, then conditional give - before the next begins.
    /// Returns the events generated this tick.
    pub fn step(&mut self) -> TickLog {
        let order = activation_order(self.agents.len(), &mut self.rng);
        let mut log = TickLog::new();

        for index in order {
            if let Some(event) =
                move_phase(&mut self.agents[index], &mut self.grid, &mut self.rng, self.tick)
            {
                log.push(event);
            }
            if let Some(event) =
                give_phase(&mut self.agents, index, &self.grid, &mut self.rng, self.tick)
            {
                log.push(event);
            }
        }

        debug!(
            tick = self.tick,
            moves = log.move_count(),
            transfers = log.transfer_count(),
            "tick complete"
        );

        self.tick += 1;
        log
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Sum of all agents' wealth. Conserved across every tick: exchanges
    /// move wealth, never create or destroy it.
    pub fn total_wealth(&self) -> u64 {
        self.agents.iter().map(|a| u64::from(a.wealth)).sum()
    }
}
