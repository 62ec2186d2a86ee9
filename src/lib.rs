//! Space Invaders - a single-screen arcade shooter
//!
//! Core modules:
//! - `entities`: pure data (boxes, entity records, the session state)
//! - `kinematics`, `formation`, `spawner`, `collision`: per-tick subsystems
//! - `compute`: the public session API (init, shoot, restart, tick)
//! - `scene`: renderer-neutral snapshot handed to the presentation shell
//! - `config`: screen size, tick rate and RNG seed

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod formation;
pub mod kinematics;
pub mod scene;
pub mod spawner;

pub use config::Config;
pub use entities::{GameState, GameStatus};

/// Gameplay constants
pub mod consts {
    /// Default logical surface size in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Fixed simulation rate
    pub const TICK_RATE: u32 = 60;

    // ── Player ────────────────────────────────────────────────────────────────
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_HEALTH: i32 = 3;
    /// Gap between the player's bottom edge and the screen bottom
    pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;

    // ── Enemies & formation ───────────────────────────────────────────────────
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const ENEMY_BASE_SPEED: f32 = 1.0;
    /// Added to the per-enemy speed on every regenerated wave
    pub const ENEMY_SPEED_STEP: f32 = 0.5;
    pub const FORMATION_ROWS: usize = 5;
    pub const FORMATION_COLS: usize = 10;
    pub const FORMATION_ORIGIN_X: f32 = 50.0;
    pub const FORMATION_ORIGIN_Y: f32 = 50.0;
    pub const FORMATION_SPACING_X: f32 = 60.0;
    pub const FORMATION_SPACING_Y: f32 = 50.0;
    pub const FORMATION_DESCEND: f32 = 20.0;

    // ── Projectiles ───────────────────────────────────────────────────────────
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    pub const BULLET_SPEED: f32 = 7.0;
    /// Ticks between enemy shots (~1 s at 60 Hz)
    pub const ENEMY_FIRE_INTERVAL: u32 = 60;

    // ── Effects & pickups ─────────────────────────────────────────────────────
    pub const PARTICLE_SIZE: f32 = 4.0;
    pub const PARTICLE_LIFE: u32 = 30;
    pub const PARTICLE_MAX_VELOCITY: i32 = 5;
    pub const PARTICLES_PER_EXPLOSION: usize = 10;
    pub const POWER_UP_SIZE: f32 = 20.0;
    pub const POWER_UP_SPEED: f32 = 2.0;
    pub const POWER_UP_DROP_CHANCE: f64 = 0.1;

    // ── Scoring ───────────────────────────────────────────────────────────────
    pub const SCORE_PER_ENEMY: u32 = 10;
    pub const SCORE_PER_POWER_UP: u32 = 50;
}
