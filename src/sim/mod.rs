//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, injected through the state aggregate
//! - No rendering, audio, or platform dependencies
//! - No internal pause flag: a paused game is one whose driver stops
//!   calling `step()`

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::OpponentAi;
pub use collision::{paddle_overlap, resolve_paddle_bounce};
pub use state::{Ball, GameState, MatchConfig, Paddle, Side, Steer};
pub use tick::{StepOutput, TickInput, advance_ball, step};
