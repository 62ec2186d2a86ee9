//! Enemy formation: bounce off the side walls and step down.

use crate::consts::FORMATION_DESCEND;
use crate::entities::Enemy;

/// True if any enemy touches or crosses a side edge.
pub fn touches_edge(enemies: &[Enemy], width: f32) -> bool {
    enemies
        .iter()
        .any(|e| e.rect.left() <= 0.0 || e.rect.right() >= width)
}

/// Reverse and descend the whole formation when a single enemy hits a wall.
///
/// Returns whether a reversal happened this tick.
pub fn apply(enemies: &mut [Enemy], width: f32) -> bool {
    if !touches_edge(enemies, width) {
        return false;
    }
    for enemy in enemies.iter_mut() {
        enemy.direction = -enemy.direction;
        enemy.rect.y += FORMATION_DESCEND;
    }
    true
}
