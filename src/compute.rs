//! Public session API.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`. Side effects are limited to the injected RNG.

use rand::Rng;

use crate::collision;
use crate::config::Config;
use crate::consts::*;
use crate::entities::{Bullet, BulletOwner, GameState, GameStatus, Player};
use crate::formation;
use crate::kinematics;
use crate::spawner;

/// Input sampled by the shell for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left direction currently held.
    pub left: bool,
    /// Right direction currently held.
    pub right: bool,
    /// Shoot was pressed this frame.
    pub shoot: bool,
    /// Restart was pressed this frame.
    pub restart: bool,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state: fresh player, first wave, `Playing`.
pub fn init_state(config: &Config) -> GameState {
    fresh_state(config.width, config.height)
}

fn fresh_state(width: f32, height: f32) -> GameState {
    GameState {
        player: Player::new(width, height),
        enemies: spawner::build_formation(ENEMY_BASE_SPEED),
        player_bullets: Vec::new(),
        enemy_bullets: Vec::new(),
        particles: Vec::new(),
        power_ups: Vec::new(),
        score: 0,
        level: 1,
        status: GameStatus::Playing,
        wave_speed: ENEMY_BASE_SPEED,
        enemy_fire_timer: 0,
        frame: 0,
        width,
        height,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Fire a bullet from the player's top-centre. Ignored once the game is over.
pub fn player_shoot(state: &GameState) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let rect = state.player.rect;
    let mut next = state.clone();
    next.player_bullets
        .push(Bullet::new(rect.center_x(), rect.top(), BulletOwner::Player));
    next
}

/// Start a new session from `GameOver`. Ignored while playing.
pub fn restart(state: &GameState) -> GameState {
    if state.status != GameStatus::GameOver {
        return state.clone();
    }
    log::info!("restarting (previous score {})", state.score);
    fresh_state(state.width, state.height)
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick. A finished game is frozen.
///
/// All randomness comes through `rng` so callers control determinism.
pub fn tick(state: &GameState, input: &TickInput, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let mut next = state.clone();
    let (width, height) = (next.width, next.height);

    // ── 1. Kinematics ────────────────────────────────────────────────────────
    kinematics::move_player(&mut next.player, input.left, input.right, width);
    kinematics::move_enemies(&mut next.enemies);
    kinematics::move_bullets(&mut next.player_bullets, height);
    kinematics::move_bullets(&mut next.enemy_bullets, height);
    kinematics::move_particles(&mut next.particles);
    kinematics::move_power_ups(&mut next.power_ups, height);

    // ── 2. Formation ─────────────────────────────────────────────────────────
    formation::apply(&mut next.enemies, width);

    // ── 3. Enemy fire ────────────────────────────────────────────────────────
    spawner::tick_enemy_fire(&mut next, rng);

    // ── 4. Collisions (may regenerate the wave or end the game) ─────────────
    let report = collision::resolve(&mut next, rng);
    if report.kills > 0 || report.pickups > 0 {
        log::debug!(
            "frame {}: {} kill(s), {} pickup(s), score {}",
            next.frame,
            report.kills,
            report.pickups,
            next.score
        );
    }

    next.frame += 1;
    next
}

/// One full frame: edge-triggered actions first, then the tick, so a freshly
/// fired bullet already moves on the frame it appears.
pub fn step(state: &GameState, input: &TickInput, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    if input.restart {
        next = restart(&next);
    }
    if input.shoot {
        next = player_shoot(&next);
    }
    tick(&next, input, rng)
}
