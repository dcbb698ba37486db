//! Match state and core simulation types
//!
//! Everything the tick driver mutates lives here: the ball, both paddles,
//! scores and the seeded RNG. Nothing in this module is global; the whole
//! aggregate is owned by whoever drives `step()`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ai::OpponentAi;
use crate::consts::*;

/// Which side of the arena a paddle defends
///
/// `Player` is the right paddle (human input), `Opponent` the left (AI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// Horizontal direction the ball travels after bouncing off this
    /// side's paddle (-1 = leftward, toward the opponent).
    #[inline]
    pub fn bounce_direction(&self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

/// The ball: continuous center position and velocity, fixed square extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    #[inline]
    pub fn half_extent() -> f32 {
        BALL_SIZE / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - Self::half_extent()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + Self::half_extent()
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - Self::half_extent()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + Self::half_extent()
    }

    #[inline]
    pub fn set_top(&mut self, top: f32) {
        self.pos.y = top + Self::half_extent();
    }

    #[inline]
    pub fn set_bottom(&mut self, bottom: f32) {
        self.pos.y = bottom - Self::half_extent();
    }
}

/// Steering command for the shared paddle motion model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Up,
    Down,
    /// No drive input; velocity decays toward zero
    Coast,
}

/// A paddle: fixed horizontal center, vertical center position and velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub vel: f32,
}

impl Paddle {
    pub fn new(x: f32, arena_height: f32) -> Self {
        Self {
            x,
            y: arena_height / 2.0,
            vel: 0.0,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - PADDLE_HEIGHT / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x - PADDLE_WIDTH / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PADDLE_WIDTH / 2.0
    }

    /// Advance the velocity state machine one tick, then integrate position.
    ///
    /// Up/Down step velocity toward the speed cap by one acceleration unit;
    /// Coast decays it toward zero without overshooting. The position clamp
    /// acts on position only: velocity survives being pinned against a wall,
    /// so releasing a key at the boundary reverses direction immediately.
    pub fn drive(&mut self, steer: Steer, accel: f32, max_speed: f32, arena_height: f32) {
        match steer {
            Steer::Up => self.vel = (self.vel - accel).max(-max_speed),
            Steer::Down => self.vel = (self.vel + accel).min(max_speed),
            Steer::Coast => {
                if self.vel > 0.0 {
                    self.vel = (self.vel - accel).max(0.0);
                } else if self.vel < 0.0 {
                    self.vel = (self.vel + accel).min(0.0);
                }
            }
        }

        self.y += self.vel;
        self.clamp_into(arena_height);
    }

    /// Clamp the paddle body into [0, arena_height]
    pub fn clamp_into(&mut self, arena_height: f32) {
        self.y = self
            .y
            .clamp(PADDLE_HEIGHT / 2.0, arena_height - PADDLE_HEIGHT / 2.0);
    }
}

/// Static match configuration, resolved to concrete values before play
///
/// Tier/index lookup happens in the settings layer; the core never sees
/// indices (see `crate::settings`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Arena width and height
    pub arena: Vec2,
    /// Base serve speed (boss multiplier not yet applied)
    pub serve_speed: f32,
    /// Opponent strategy, fixed for the whole match
    pub ai: OpponentAi,
    /// Boss mode: faster serves, predictive opponent
    pub boss_mode: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            arena: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            serve_speed: 14.0,
            ai: OpponentAi::Normal { difficulty: 0.2 },
            boss_mode: false,
        }
    }
}

/// Complete match state, owned by the tick driver
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: MatchConfig,
    pub ball: Ball,
    pub player: Paddle,
    pub opponent: Paddle,
    pub player_score: u32,
    pub opponent_score: u32,
    /// Side that served the ball currently in play
    pub serving_side: Side,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seed this match was created with
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a configured match with the ball served by the player.
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        let arena = config.arena;
        let player_x = arena.x - PADDLE_WALL_INSET + PADDLE_WIDTH / 2.0;
        let opponent_x = PADDLE_WALL_INSET + PADDLE_WIDTH / 2.0;

        let mut state = Self {
            config,
            ball: Ball {
                pos: arena / 2.0,
                vel: Vec2::ZERO,
            },
            player: Paddle::new(player_x, arena.y),
            opponent: Paddle::new(opponent_x, arena.y),
            player_score: 0,
            opponent_score: 0,
            serving_side: Side::Player,
            time_ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset(Side::Player);
        state
    }

    #[inline]
    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Serve speed with the boss multiplier applied
    fn live_serve_speed(&self) -> f32 {
        if self.config.boss_mode {
            self.config.serve_speed * BOSS_SERVE_MULTIPLIER
        } else {
            self.config.serve_speed
        }
    }

    /// Reposition the ball at the serving paddle for a fresh serve.
    ///
    /// The ball spawns one ball-width in front of the server at the server's
    /// current height, moving horizontally away from it. Scores and paddle
    /// positions are untouched.
    pub fn reset(&mut self, serving_side: Side) {
        let speed = self.live_serve_speed();
        let server = self.paddle(serving_side);

        // One ball-width clear of the paddle face, toward open play
        self.ball.pos = match serving_side {
            Side::Player => Vec2::new(server.x - BALL_SIZE, server.y),
            Side::Opponent => Vec2::new(server.x + BALL_SIZE, server.y),
        };

        let vx = match serving_side {
            Side::Player => -speed.abs(),
            Side::Opponent => speed.abs(),
        };
        // Boss serves carry a wilder vertical kick
        let vy = if self.config.boss_mode {
            self.rng
                .random_range(-speed * BOSS_SERVE_KICK..=speed * BOSS_SERVE_KICK)
        } else if self.rng.random_bool(0.5) {
            speed / 2.0
        } else {
            -speed / 2.0
        };
        self.ball.vel = Vec2::new(vx, vy);
        self.serving_side = serving_side;

        log::info!(
            "serve: side={:?} speed={:.1} kick={:.2}",
            serving_side,
            speed,
            vy
        );
    }

    /// Credit a point to `scorer` and hand them the serve.
    pub fn add_point(&mut self, scorer: Side) {
        match scorer {
            Side::Player => self.player_score += 1,
            Side::Opponent => self.opponent_score += 1,
        }
        log::info!(
            "point to {:?}: {} - {}",
            scorer,
            self.player_score,
            self.opponent_score
        );
        self.reset(scorer);
    }

    /// Full match restart: zero both scores and serve from the default side.
    pub fn restart(&mut self) {
        self.player_score = 0;
        self.opponent_score = 0;
        self.reset(Side::Player);
        log::info!("match restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_stays_in_bounds() {
        let mut paddle = Paddle::new(40.0, ARENA_HEIGHT);
        for _ in 0..200 {
            paddle.drive(Steer::Up, PADDLE_ACCELERATION, MAX_PADDLE_SPEED, ARENA_HEIGHT);
        }
        assert_eq!(paddle.top(), 0.0);
        for _ in 0..400 {
            paddle.drive(Steer::Down, PADDLE_ACCELERATION, MAX_PADDLE_SPEED, ARENA_HEIGHT);
        }
        assert_eq!(paddle.bottom(), ARENA_HEIGHT);
    }

    #[test]
    fn test_paddle_coast_never_crosses_zero() {
        let mut paddle = Paddle::new(40.0, ARENA_HEIGHT);
        paddle.vel = 0.7; // less than one acceleration step
        paddle.drive(Steer::Coast, PADDLE_ACCELERATION, MAX_PADDLE_SPEED, ARENA_HEIGHT);
        assert_eq!(paddle.vel, 0.0);

        paddle.vel = -0.7;
        paddle.drive(Steer::Coast, PADDLE_ACCELERATION, MAX_PADDLE_SPEED, ARENA_HEIGHT);
        assert_eq!(paddle.vel, 0.0);
    }

    #[test]
    fn test_paddle_velocity_survives_wall_clamp() {
        // Boundary interaction worth locking down: the clamp only touches
        // position, so a paddle pinned at the top keeps its upward velocity
        // and snaps away from the wall the moment the key is released.
        let mut paddle = Paddle::new(40.0, ARENA_HEIGHT);
        for _ in 0..100 {
            paddle.drive(Steer::Up, PADDLE_ACCELERATION, MAX_PADDLE_SPEED, ARENA_HEIGHT);
        }
        assert_eq!(paddle.top(), 0.0);
        assert_eq!(paddle.vel, -MAX_PADDLE_SPEED);
    }

    #[test]
    fn test_serve_speed_boss_multiplier() {
        let config = MatchConfig {
            serve_speed: 10.0,
            boss_mode: true,
            ai: OpponentAi::Boss,
            ..Default::default()
        };
        let state = GameState::new(config, 7);
        // 10 * 1.3, regardless of the random kick
        assert!((state.ball.vel.x.abs() - 13.0).abs() < 1e-5);
        assert!(state.ball.vel.y.abs() <= 13.0 * BOSS_SERVE_KICK);
    }

    #[test]
    fn test_serve_direction_away_from_server() {
        let mut state = GameState::new(MatchConfig::default(), 1);

        state.reset(Side::Player);
        assert!(state.ball.vel.x < 0.0, "player serve travels leftward");
        assert!(state.ball.pos.x < state.player.left());

        state.reset(Side::Opponent);
        assert!(state.ball.vel.x > 0.0, "opponent serve travels rightward");
        assert!(state.ball.pos.x > state.opponent.right());
    }

    #[test]
    fn test_normal_serve_kick_is_half_speed() {
        let state = GameState::new(MatchConfig::default(), 3);
        let speed = state.config.serve_speed;
        assert!((state.ball.vel.y.abs() - speed / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_serve_at_server_height() {
        let mut state = GameState::new(MatchConfig::default(), 5);
        state.player.y = 200.0;
        state.reset(Side::Player);
        assert_eq!(state.ball.pos.y, 200.0);
    }

    #[test]
    fn test_restart_zeroes_scores() {
        let mut state = GameState::new(MatchConfig::default(), 11);
        state.add_point(Side::Opponent);
        state.add_point(Side::Player);
        assert_eq!((state.player_score, state.opponent_score), (1, 1));

        state.restart();
        assert_eq!((state.player_score, state.opponent_score), (0, 0));
        assert_eq!(state.serving_side, Side::Player);
    }

    #[test]
    fn test_scorer_serves_next() {
        let mut state = GameState::new(MatchConfig::default(), 13);
        state.add_point(Side::Opponent);
        assert_eq!(state.serving_side, Side::Opponent);
        assert!(state.ball.vel.x > 0.0, "serve moves toward the conceder");
    }
}
