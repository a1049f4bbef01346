//! Population Setup
//!
//! Spawns the agent population and places it on the grid.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::components::agent::{Agent, AgentId};
use crate::components::grid::{Grid, Position};

/// Spawns `count` agents, each at an independently and uniformly chosen
/// coordinate. Every agent starts with one unit of wealth.
pub fn spawn_agents(count: usize, grid: &mut Grid, rng: &mut SmallRng) -> Vec<Agent> {
    let mut agents = Vec::with_capacity(count);
    for i in 0..count {
        let position = Position::new(
            rng.gen_range(0..grid.width()),
            rng.gen_range(0..grid.height()),
        );
        let agent = Agent::new(AgentId(i), position);
        grid.place(agent.id, position);
        agents.push(agent);
    }
    agents
}

/// Spawns one agent per given position, in order. Used for scripted
/// scenarios where placement must be exact rather than random.
///
/// # Panics
///
/// Panics if any position is out of range for the grid.
pub fn place_agents(positions: &[Position], grid: &mut Grid) -> Vec<Agent> {
    positions
        .iter()
        .enumerate()
        .map(|(i, &position)| {
            let agent = Agent::new(AgentId(i), position);
            grid.place(agent.id, position);
            agent
        })
        .collect()
}
