//! Per-tick translation rules for every entity kind.
//!
//! Straight-line motion only: no acceleration, no friction.

use crate::entities::{Bullet, Enemy, Particle, Player, PowerUp};

/// Apply held directional input to the player and keep the ship on screen.
///
/// Both directions may be held at once; they cancel out.
pub fn move_player(player: &mut Player, left: bool, right: bool, width: f32) {
    if left {
        player.rect.x -= player.speed;
    }
    if right {
        player.rect.x += player.speed;
    }
    player.rect.x = player.rect.x.clamp(0.0, (width - player.rect.w).max(0.0));
}

/// Horizontal march; vertical movement only comes from the formation.
pub fn move_enemies(enemies: &mut [Enemy]) {
    for enemy in enemies {
        enemy.rect.x += enemy.speed * enemy.direction;
    }
}

/// Advance bullets and drop the ones that left the surface entirely.
pub fn move_bullets(bullets: &mut Vec<Bullet>, height: f32) {
    bullets.retain_mut(|b| {
        b.rect.y += b.velocity();
        !(b.rect.bottom() < 0.0 || b.rect.top() > height)
    });
}

pub fn move_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|p| {
        p.rect.x += p.vx;
        p.rect.y += p.vy;
        p.life = p.life.saturating_sub(1);
        p.life > 0
    });
}

pub fn move_power_ups(power_ups: &mut Vec<PowerUp>, height: f32) {
    power_ups.retain_mut(|p| {
        p.rect.y += p.speed;
        p.rect.top() <= height
    });
}
