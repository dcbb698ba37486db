//! Opponent paddle strategies
//!
//! The strategy is chosen once at match configuration and dispatched from a
//! single point per tick. `Normal` is a reactive follower; `Boss` runs the
//! shared paddle motion model at a predicted intercept point, accounting for
//! wall reflections.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Ball, Paddle, Steer};
use crate::consts::*;

/// Opponent controller variant, fixed for the whole match
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpponentAi {
    /// Follow the ball's vertical center at a constant speed scaled by
    /// difficulty (0.2..=1.0). No acceleration, no prediction.
    Normal { difficulty: f32 },
    /// Predict the intercept height and steer the motion model at it with
    /// doubled acceleration and a raised speed cap.
    Boss,
}

impl OpponentAi {
    /// Move the opponent paddle one tick.
    pub fn drive(&self, paddle: &mut Paddle, ball: &Ball, arena_height: f32, rng: &mut Pcg32) {
        match *self {
            OpponentAi::Normal { difficulty } => {
                // Direct pursuit, bypassing the motion model entirely. The
                // paddle may overshoot the ball center and re-correct next
                // tick; that wobble is part of the normal opponent's feel.
                let speed = MAX_PADDLE_SPEED * difficulty;
                if paddle.y < ball.pos.y {
                    paddle.y += speed;
                } else if paddle.y > ball.pos.y {
                    paddle.y -= speed;
                }
                paddle.clamp_into(arena_height);
            }
            OpponentAi::Boss => {
                let target = boss_target(paddle, ball, arena_height, rng);
                // Dead-band: close enough counts as arrived, decelerate
                let steer = if paddle.y < target - BOSS_DEAD_BAND {
                    Steer::Down
                } else if paddle.y > target + BOSS_DEAD_BAND {
                    Steer::Up
                } else {
                    Steer::Coast
                };
                paddle.drive(
                    steer,
                    PADDLE_ACCELERATION * 2.0,
                    BOSS_PADDLE_SPEED,
                    arena_height,
                );
            }
        }
    }
}

/// Height the boss paddle aims for this tick.
///
/// Ball inbound: linear extrapolation to the paddle's x, damped by the
/// prediction factor and folded back into the arena through wall
/// reflections. Ball outbound: wander around mid-height, re-rolled every
/// tick so the recentring never settles into a fixed spot.
fn boss_target(paddle: &Paddle, ball: &Ball, arena_height: f32, rng: &mut Pcg32) -> f32 {
    if ball.vel.x < 0.0 {
        let time_to_intercept = (paddle.x - ball.pos.x) / -ball.vel.x;
        let mut predicted =
            ball.pos.y + ball.vel.y * time_to_intercept * BOSS_PREDICTION_FACTOR;

        while predicted < 0.0 || predicted > arena_height {
            if predicted < 0.0 {
                predicted = -predicted;
            }
            if predicted > arena_height {
                predicted = 2.0 * arena_height - predicted;
            }
        }
        predicted
    } else {
        arena_height / 2.0 + rng.random_range(-BOSS_RECENTER_JITTER..=BOSS_RECENTER_JITTER)
    }
}
