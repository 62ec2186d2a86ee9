//! Renderer-neutral view of a session.
//!
//! The shell asks for a `Scene` once per frame and draws it; nothing here
//! knows about terminals.

use crate::entities::{BulletOwner, GameState, GameStatus, ParticleColor, Rect};

/// 24-bit colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

// ── Palette ───────────────────────────────────────────────────────────────────

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const PURPLE: Rgb = Rgb(128, 0, 128);
pub const CYAN: Rgb = Rgb(0, 255, 255);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Enemy,
    PlayerBullet,
    EnemyBullet,
    Particle,
    PowerUp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Rect,
    pub color: Rgb,
}

/// Text fields of the heads-up display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub level: u32,
    pub health: i32,
    pub game_over: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    /// Back-to-front draw order.
    pub sprites: Vec<Sprite>,
    pub hud: Hud,
}

fn particle_rgb(color: ParticleColor) -> Rgb {
    match color {
        ParticleColor::Red => RED,
        ParticleColor::Yellow => YELLOW,
        ParticleColor::White => WHITE,
    }
}

/// Collect every visible entity and the HUD fields.
pub fn snapshot(state: &GameState) -> Scene {
    let mut sprites = Vec::with_capacity(
        1 + state.enemies.len()
            + state.player_bullets.len()
            + state.enemy_bullets.len()
            + state.particles.len()
            + state.power_ups.len(),
    );

    sprites.extend(state.enemies.iter().map(|e| Sprite {
        kind: SpriteKind::Enemy,
        rect: e.rect,
        color: YELLOW,
    }));
    sprites.extend(state.power_ups.iter().map(|p| Sprite {
        kind: SpriteKind::PowerUp,
        rect: p.rect,
        color: PURPLE,
    }));
    sprites.extend(
        state
            .player_bullets
            .iter()
            .chain(state.enemy_bullets.iter())
            .map(|b| match b.owner {
                BulletOwner::Player => Sprite {
                    kind: SpriteKind::PlayerBullet,
                    rect: b.rect,
                    color: CYAN,
                },
                BulletOwner::Enemy => Sprite {
                    kind: SpriteKind::EnemyBullet,
                    rect: b.rect,
                    color: RED,
                },
            }),
    );
    sprites.extend(state.particles.iter().map(|p| Sprite {
        kind: SpriteKind::Particle,
        rect: p.rect,
        color: particle_rgb(p.color),
    }));
    sprites.push(Sprite {
        kind: SpriteKind::Player,
        rect: state.player.rect,
        color: GREEN,
    });

    Scene {
        width: state.width,
        height: state.height,
        sprites,
        hud: Hud {
            score: state.score,
            level: state.level,
            health: state.player.health,
            game_over: state.status == GameStatus::GameOver,
        },
    }
}
