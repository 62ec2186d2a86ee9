//! Everything that creates entities mid-session: enemy fire, explosion
//! effects, power-up drops and wave regeneration.
//!
//! All randomness comes through the injected `rng`.

use rand::Rng;

use crate::consts::*;
use crate::entities::{
    Bullet, BulletOwner, Enemy, GameState, Particle, ParticleColor, PowerUp, Rect,
};

const PARTICLE_COLORS: [ParticleColor; 3] =
    [ParticleColor::Red, ParticleColor::Yellow, ParticleColor::White];

/// Full 5×10 grid at the base coordinates, every enemy at `speed`.
pub fn build_formation(speed: f32) -> Vec<Enemy> {
    let mut enemies = Vec::with_capacity(FORMATION_ROWS * FORMATION_COLS);
    for row in 0..FORMATION_ROWS {
        for col in 0..FORMATION_COLS {
            let x = col as f32 * FORMATION_SPACING_X + FORMATION_ORIGIN_X;
            let y = row as f32 * FORMATION_SPACING_Y + FORMATION_ORIGIN_Y;
            enemies.push(Enemy::new(x, y, speed));
        }
    }
    enemies
}

/// Advance the enemy-fire timer. On the interval boundary a random live enemy
/// drops a bullet from its bottom-centre.
///
/// Returns the index of the enemy that fired, if any.
pub fn tick_enemy_fire(state: &mut GameState, rng: &mut impl Rng) -> Option<usize> {
    state.enemy_fire_timer += 1;
    if state.enemy_fire_timer < ENEMY_FIRE_INTERVAL {
        return None;
    }
    state.enemy_fire_timer = 0;

    if state.enemies.is_empty() {
        return None;
    }
    let shooter = rng.gen_range(0..state.enemies.len());
    let rect = state.enemies[shooter].rect;
    state
        .enemy_bullets
        .push(Bullet::new(rect.center_x(), rect.bottom(), BulletOwner::Enemy));
    log::debug!("enemy {shooter} fired at frame {}", state.frame);
    Some(shooter)
}

/// Explosion burst plus the power-up roll for an enemy destroyed at `rect`.
pub fn spawn_kill_effects(state: &mut GameState, rect: &Rect, rng: &mut impl Rng) {
    let (cx, cy) = (rect.center_x(), rect.center_y());
    for _ in 0..PARTICLES_PER_EXPLOSION {
        state.particles.push(Particle {
            rect: Rect::centered_at(cx, cy, PARTICLE_SIZE, PARTICLE_SIZE),
            vx: rng.gen_range(-PARTICLE_MAX_VELOCITY..=PARTICLE_MAX_VELOCITY) as f32,
            vy: rng.gen_range(-PARTICLE_MAX_VELOCITY..=PARTICLE_MAX_VELOCITY) as f32,
            life: PARTICLE_LIFE,
            color: PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())],
        });
    }

    if rng.gen_bool(POWER_UP_DROP_CHANCE) {
        state.power_ups.push(PowerUp::new(cx, cy));
    }
}

/// Next wave: bump the level and the per-enemy speed, then rebuild the grid.
pub fn regenerate_wave(state: &mut GameState) {
    state.level += 1;
    state.wave_speed += ENEMY_SPEED_STEP;
    state.enemies = build_formation(state.wave_speed);
    log::info!(
        "wave cleared, level {} begins (enemy speed {})",
        state.level,
        state.wave_speed
    );
}
