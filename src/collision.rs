//! Collision resolution between entity groups.
//!
//! Runs after movement each tick. Pass order: player bullets vs enemies,
//! enemy bullets vs player, player vs power-ups, then the wave check.

use rand::Rng;

use crate::consts::{SCORE_PER_ENEMY, SCORE_PER_POWER_UP};
use crate::entities::{GameState, GameStatus};
use crate::spawner;

/// What happened during one resolution pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Enemies destroyed by player bullets.
    pub kills: usize,
    /// Whether the player took damage this tick.
    pub player_hit: bool,
    /// Power-ups collected.
    pub pickups: usize,
    /// Whether the last enemy fell and a new wave was generated.
    pub wave_cleared: bool,
}

pub fn resolve(state: &mut GameState, rng: &mut impl Rng) -> CollisionReport {
    let mut report = CollisionReport::default();

    // ── 1. Player bullets ↔ enemies ──────────────────────────────────────────
    let mut killed = vec![false; state.enemies.len()];
    let mut spent = vec![false; state.player_bullets.len()];

    for (bi, bullet) in state.player_bullets.iter().enumerate() {
        let hit = state
            .enemies
            .iter()
            .zip(&killed)
            .position(|(e, &dead)| !dead && bullet.rect.intersects(&e.rect));
        if let Some(ei) = hit {
            killed[ei] = true;
            spent[bi] = true;
        }
    }

    for ei in (0..killed.len()).filter(|&ei| killed[ei]) {
        let rect = state.enemies[ei].rect;
        state.score += SCORE_PER_ENEMY;
        spawner::spawn_kill_effects(state, &rect, rng);
        report.kills += 1;
    }

    let mut dead = killed.into_iter();
    state.enemies.retain(|_| !dead.next().unwrap_or(false));
    let mut used = spent.into_iter();
    state.player_bullets.retain(|_| !used.next().unwrap_or(false));

    // ── 2. Enemy bullets ↔ player ────────────────────────────────────────────
    let player_rect = state.player.rect;
    let before = state.enemy_bullets.len();
    state
        .enemy_bullets
        .retain(|b| !b.rect.intersects(&player_rect));

    if state.enemy_bullets.len() < before {
        report.player_hit = true;
        state.player.health -= 1;
        log::debug!("player hit, health now {}", state.player.health);
        if state.player.health <= 0 {
            state.status = GameStatus::GameOver;
            log::info!(
                "game over at level {} with score {}",
                state.level,
                state.score
            );
        }
    }

    // ── 3. Player ↔ power-ups ────────────────────────────────────────────────
    let before = state.power_ups.len();
    state.power_ups.retain(|p| !p.rect.intersects(&player_rect));
    let pickups = before - state.power_ups.len();
    if pickups > 0 {
        state.player.health += pickups as i32;
        state.score += SCORE_PER_POWER_UP * pickups as u32;
    }
    report.pickups = pickups;

    // ── 4. Wave cleared ──────────────────────────────────────────────────────
    if state.enemies.is_empty() {
        spawner::regenerate_wave(state);
        report.wave_cleared = true;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::init_state;
    use crate::entities::{Bullet, BulletOwner, PowerUp};
    use crate::Config;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn report_counts_each_pass() {
        let mut state = init_state(&Config::default());
        let target = state.enemies[0].rect;
        state.player_bullets.push(Bullet::new(
            target.center_x(),
            target.bottom(),
            BulletOwner::Player,
        ));
        let player = state.player.rect;
        state
            .enemy_bullets
            .push(Bullet::new(player.center_x(), player.bottom(), BulletOwner::Enemy));
        state
            .power_ups
            .push(PowerUp::new(player.center_x(), player.center_y()));

        let report = resolve(&mut state, &mut StdRng::seed_from_u64(1));
        assert_eq!(
            report,
            CollisionReport {
                kills: 1,
                player_hit: true,
                pickups: 1,
                wave_cleared: false,
            }
        );
        // -1 from the bullet, +1 from the pickup
        assert_eq!(state.player.health, 3);
        assert_eq!(state.score, 60);
    }

    #[test]
    fn empty_formation_regenerates() {
        let mut state = init_state(&Config::default());
        state.enemies.clear();
        let report = resolve(&mut state, &mut StdRng::seed_from_u64(1));
        assert!(report.wave_cleared);
        assert_eq!(state.enemies.len(), 50);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn each_enemy_and_bullet_removed_once() {
        let mut state = init_state(&Config::default());
        // two bullets stacked on enemies[0], one on enemies[1]
        let first = state.enemies[0].rect;
        let second = state.enemies[1].rect;
        for rect in [first, first, second] {
            state.player_bullets.push(Bullet::new(
                rect.center_x(),
                rect.bottom(),
                BulletOwner::Player,
            ));
        }

        let report = resolve(&mut state, &mut StdRng::seed_from_u64(4));
        assert_eq!(report.kills, 2);
        assert_eq!(state.score, 20);
        assert_eq!(state.enemies.len(), 48);
        assert!(state
            .enemies
            .iter()
            .all(|e| e.rect != first && e.rect != second));
        // the second bullet on enemies[0] found nothing left to hit
        assert_eq!(state.player_bullets.len(), 1);
        assert_eq!(state.player_bullets[0].rect.center_x(), first.center_x());
    }
}
