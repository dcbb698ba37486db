//! Duel Pong entry point
//!
//! Headless demo driver: runs a seeded match with a simple tracking
//! controller standing in for the player and prints the score as it evolves.
//! A real shell would swap the tracking controller for polled key state and
//! render from each `StepOutput`.
//!
//! Usage: `duel-pong [seed] [--boss]`

use duel_pong::fsm::{AppAction, AppFsm};
use duel_pong::settings::Settings;
use duel_pong::sim::{GameState, TickInput, step};

/// Demo length: one minute of play at 60 Hz
const DEMO_TICKS: u64 = 60 * 60;

fn main() {
    env_logger::init();

    let mut seed: u64 = 0x00D1CE;
    let mut settings = Settings::default();
    for arg in std::env::args().skip(1) {
        if arg == "--boss" {
            settings.boss_mode = true;
        } else if let Ok(parsed) = arg.parse() {
            seed = parsed;
        } else {
            eprintln!("usage: duel-pong [seed] [--boss]");
            std::process::exit(2);
        }
    }

    log::info!(
        "starting demo match: seed={seed} boss={} speed={}",
        settings.boss_mode,
        settings.ball_speed()
    );

    let mut fsm = AppFsm::new();
    fsm.apply(AppAction::Play);

    let mut state = GameState::new(settings.resolve(), seed);

    for _ in 0..DEMO_TICKS {
        if !fsm.should_step() {
            break;
        }

        // Chase the ball: press toward its center each tick
        let input = TickInput {
            up: state.ball.pos.y < state.player.y,
            down: state.ball.pos.y > state.player.y,
        };

        let out = step(&mut state, &input);
        if let Some(side) = out.score_event {
            println!(
                "{:?} scores: {} - {}",
                side, state.player_score, state.opponent_score
            );
        }
    }

    println!(
        "final score after {} ticks: player {} - opponent {}",
        state.time_ticks, state.player_score, state.opponent_score
    );
}
