//! Simulation Systems
//!
//! The per-tick logic: activation ordering and the move/give phases each
//! agent runs when activated.

pub mod activation;
pub mod exchange;

pub use activation::activation_order;
pub use exchange::{give_phase, move_phase, TickLog};
