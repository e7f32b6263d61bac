//! Demo autopilot
//!
//! Plays the game headlessly: holds a direction for a random stretch,
//! taps jump now and then, and restarts after a game over. Seeded, so a
//! given seed always produces the same session.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GameState, TickInput};

/// Ticks to wait on the game-over screen before pressing restart
const RESTART_DELAY: u32 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Left,
    Right,
    Idle,
}

pub struct DemoPilot {
    rng: Pcg32,
    heading: Heading,
    hold_ticks: u32,
    jump_ticks: u32,
    jump_down: bool,
    game_over_ticks: u32,
}

impl DemoPilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            heading: Heading::Idle,
            hold_ticks: 0,
            jump_ticks: 0,
            jump_down: false,
            game_over_ticks: 0,
        }
    }

    /// Input for the next tick of `state`
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        if state.is_game_over() {
            self.game_over_ticks += 1;
            self.jump_ticks = 0;
            self.jump_down = false;
            let restart = self.game_over_ticks >= RESTART_DELAY;
            if restart {
                self.game_over_ticks = 0;
            }
            return TickInput {
                restart,
                ..Default::default()
            };
        }
        self.game_over_ticks = 0;

        if self.hold_ticks == 0 {
            self.heading = match self.rng.random_range(0..4) {
                0 => Heading::Idle,
                1 => Heading::Left,
                _ => Heading::Right,
            };
            self.hold_ticks = self.rng.random_range(10..60);
        }
        self.hold_ticks -= 1;

        // A new press needs the player grounded and a released tick before it
        let can_press = self.jump_ticks == 0 && !self.jump_down && !state.player.airborne;
        if can_press && self.rng.random_bool(0.04) {
            self.jump_ticks = self.rng.random_range(4..16);
        }
        let jump = self.jump_ticks > 0;
        self.jump_ticks = self.jump_ticks.saturating_sub(1);
        self.jump_down = jump;

        TickInput {
            left: self.heading == Heading::Left,
            right: self.heading == Heading::Right,
            jump,
            restart: false,
        }
    }
}
