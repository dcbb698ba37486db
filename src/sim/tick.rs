//! Fixed timestep simulation tick
//!
//! One `step()` per frame at 60 Hz, invoked synchronously by the driver.
//! Order within a tick: paddle drives (player input, then AI), ball
//! integration with wall bounces and goal detection, paddle collision
//! resolution, and finally the match controller on a scored point.
//! Pausing is the driver's job: a paused game simply stops calling `step()`.

use glam::Vec2;

use super::collision::{paddle_overlap, resolve_paddle_bounce};
use super::state::{Ball, GameState, Side, Steer};
use crate::consts::*;

/// Player key state for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
}

/// Read-only snapshot returned at the step boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    pub ball_pos: Vec2,
    pub player_y: f32,
    pub opponent_y: f32,
    /// Side that scored this tick, if any
    pub score_event: Option<Side>,
}

/// Advance the ball one tick: integrate, reflect off the horizontal walls,
/// and report a goal-line crossing.
///
/// Wall bounces are perfectly elastic: the position clamps to the wall and
/// vy flips to point back into the arena with unchanged magnitude. At most
/// one side can score per tick; a wall bounce and a goal can coincide since
/// they act on different axes.
pub fn advance_ball(ball: &mut Ball, arena: Vec2) -> Option<Side> {
    ball.pos += ball.vel;

    if ball.top() <= 0.0 {
        ball.set_top(0.0);
        ball.vel.y = ball.vel.y.abs();
    } else if ball.bottom() >= arena.y {
        ball.set_bottom(arena.y);
        ball.vel.y = -ball.vel.y.abs();
    }

    if ball.left() <= 0.0 {
        // Past the opponent's paddle: the player takes the point
        Some(Side::Player)
    } else if ball.right() >= arena.x {
        Some(Side::Opponent)
    } else {
        None
    }
}

/// Advance the whole match by one tick.
pub fn step(state: &mut GameState, input: &TickInput) -> StepOutput {
    let arena = state.config.arena;

    // Player paddle: up wins when both keys are held
    let steer = if input.up {
        Steer::Up
    } else if input.down {
        Steer::Down
    } else {
        Steer::Coast
    };
    state
        .player
        .drive(steer, PADDLE_ACCELERATION, MAX_PADDLE_SPEED, arena.y);

    // Opponent paddle: single dispatch on the strategy chosen at configure time
    let ai = state.config.ai;
    ai.drive(&mut state.opponent, &state.ball, arena.y, &mut state.rng);

    let score_event = advance_ball(&mut state.ball, arena);

    match score_event {
        Some(scorer) => state.add_point(scorer),
        None => {
            if paddle_overlap(&state.ball, &state.player) {
                resolve_paddle_bounce(&mut state.ball, &state.player, Side::Player, &mut state.rng);
            } else if paddle_overlap(&state.ball, &state.opponent) {
                resolve_paddle_bounce(
                    &mut state.ball,
                    &state.opponent,
                    Side::Opponent,
                    &mut state.rng,
                );
            }
        }
    }

    state.time_ticks += 1;

    StepOutput {
        ball_pos: state.ball.pos,
        player_y: state.player.y,
        opponent_y: state.opponent.y,
        score_event,
    }
}
