//! Duel Pong - a two-paddle volley duel with a predictive boss mode
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, paddle motion, AI, scoring)
//! - `fsm`: Top-level app state machine (Menu/Playing/Paused/Settings)
//! - `settings`: Tier tables and persisted user preferences

pub mod fsm;
pub mod settings;
pub mod sim;

pub use fsm::{AppAction, AppFsm, AppPhase};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels, y grows downward)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 700.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 140.0;
    /// Distance from the side wall to the paddle's near edge
    pub const PADDLE_WALL_INSET: f32 = 30.0;

    /// Paddle kinematics
    pub const PADDLE_ACCELERATION: f32 = 1.25;
    pub const MAX_PADDLE_SPEED: f32 = 15.0;
    /// Boss paddle moves faster and accelerates twice as hard
    pub const BOSS_PADDLE_SPEED: f32 = 20.0;

    /// Ball bounding extent (square)
    pub const BALL_SIZE: f32 = 27.0;

    /// Speed cap enforced after every collision resolution
    pub const MAX_BALL_SPEED: f32 = 20.0;
    /// Multiplicative speed gain per paddle bounce
    pub const PADDLE_BOOST: f32 = 1.03;
    /// Maximum deflection off a paddle (radians, ±60°)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    /// Floor on |vy| after a paddle bounce, applied before jitter
    pub const MIN_VERTICAL_SPEED: f32 = 2.0;
    /// Uniform jitter added to vy after a paddle bounce
    pub const BOUNCE_JITTER: f32 = 0.5;

    /// Serve speed multiplier in boss mode
    pub const BOSS_SERVE_MULTIPLIER: f32 = 1.3;
    /// Boss serve vertical kick range, as a fraction of serve speed
    pub const BOSS_SERVE_KICK: f32 = 0.8;

    /// How far ahead the boss trusts its linear extrapolation
    pub const BOSS_PREDICTION_FACTOR: f32 = 0.95;
    /// Tolerance around the boss target inside which it decelerates
    pub const BOSS_DEAD_BAND: f32 = 5.0;
    /// Recentring wander around mid-height while the ball recedes
    pub const BOSS_RECENTER_JITTER: f32 = 50.0;
}
