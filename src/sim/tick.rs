//! Fixed timestep simulation tick
//!
//! Order within a tick: enemies patrol (unless the game is over), the player
//! moves and interacts, then a pending restart is honoured.

use super::collision::{clamp_to_screen, resolve_tiles};
use super::interact::{collect_coins, hit_blocks, touches_enemy};
use super::state::{Coin, GameEvent, GamePhase, GameState};

/// Input snapshot for a single tick (polled, not queued)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Only honoured while the game is over
    pub restart: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    if !state.is_game_over() {
        let speed = state.tuning.enemy_speed;
        let period = state.tuning.enemy_patrol_ticks;
        for enemy in &mut state.enemies {
            enemy.patrol(speed, period);
        }
    }

    if state.is_game_over() {
        death_fall(state);
    } else {
        step_player(state, input);
    }

    if input.restart && state.is_game_over() {
        state.reset();
        state.events.push(GameEvent::Restarted);
        log::info!("Session restarted");
    }
}

/// Player movement, terrain collision and entity interactions
fn step_player(state: &mut GameState, input: &TickInput) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    let mut dx = 0.0;
    if input.left {
        dx -= tuning.move_speed;
        player.facing_left = true;
    }
    if input.right {
        dx += tuning.move_speed;
        player.facing_left = false;
    }

    // Jumps fire on the released-to-held edge only
    if input.jump && !player.jump_held && !player.airborne {
        player.vel_y = tuning.jump_velocity;
        state.events.push(GameEvent::Jumped);
        log::debug!("Jump at {:?}", player.pos);
    }
    player.jump_held = input.jump;

    player.vel_y = (player.vel_y + tuning.gravity).min(tuning.max_fall_speed);
    let dy = player.vel_y;

    let was_airborne = player.airborne;
    let body = player.rect();
    let res = resolve_tiles(&body, dx, dy, player.vel_y, &state.tiles.tiles);
    player.vel_y = res.vel_y;
    player.airborne = res.airborne;
    if res.head_bump {
        state.events.push(GameEvent::HeadBump);
        log::debug!("Head bump at {:?}", player.pos);
    }

    // Interactions use the rectangle from before this tick's move
    let mut game_over = false;
    if touches_enemy(&body, &state.enemies) {
        game_over = true;
        state.events.push(GameEvent::EnemyContact);
    }

    let collected = collect_coins(&body, &mut state.coins);
    for _ in 0..collected {
        state.score += 1;
        state.events.push(GameEvent::CoinCollected { score: state.score });
    }
    if collected > 0 {
        log::info!("Collected {} coin(s), score {}", collected, state.score);
    }

    for (index, coin) in hit_blocks(&body, player.vel_y, tuning.block_hit_band, &mut state.blocks) {
        state.coins.push(Coin::new(coin));
        state.events.push(GameEvent::BlockHit { index, coin });
        log::info!("Question block {} hit, coin at {:?}", index, coin);
    }

    let mut rect = body.offset(res.dx, res.dy);
    let clamp = clamp_to_screen(&mut rect, tuning.screen_width, tuning.screen_height);
    player.pos = rect.pos;
    if clamp.on_floor {
        player.vel_y = 0.0;
        player.airborne = false;
    }

    if was_airborne && !player.airborne {
        state.events.push(GameEvent::Landed);
    }

    // Unreachable while the floor clamp above is in place
    if rect.top() > tuning.screen_height {
        game_over = true;
        state.events.push(GameEvent::FellOffMap);
    }

    if game_over {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks, score {}",
            state.time_ticks,
            state.score
        );
    }
}

/// Game-over animation: the player drops through everything
fn death_fall(state: &mut GameState) {
    let player = &mut state.player;
    player.pos.x += state.tuning.world_shift;
    player.pos.y += player.vel_y;
    player.vel_y += state.tuning.gravity;
}
