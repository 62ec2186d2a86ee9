//! All game entity types — pure data, no per-tick logic.
//!
//! Coordinates are in logical pixels with the origin at the top-left of the
//! play surface and `y` growing downwards.

use crate::consts::*;

// ── Bounding boxes ────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of the given size centred on `(cx, cy)`.
    pub fn centered_at(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// True when the boxes share a non-zero area. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Session status ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Who fired a bullet. Fixes its direction for its whole life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    /// Travels up the screen.
    Player,
    /// Travels down the screen.
    Enemy,
}

impl BulletOwner {
    /// −1 for upward travel, +1 for downward.
    pub fn direction(&self) -> f32 {
        match self {
            BulletOwner::Player => -1.0,
            BulletOwner::Enemy => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
    pub owner: BulletOwner,
}

impl Bullet {
    /// Bullet whose bottom-centre sits at `(cx, bottom)`.
    pub fn new(cx: f32, bottom: f32, owner: BulletOwner) -> Self {
        Self {
            rect: Rect::new(
                cx - BULLET_WIDTH / 2.0,
                bottom - BULLET_HEIGHT,
                BULLET_WIDTH,
                BULLET_HEIGHT,
            ),
            owner,
        }
    }

    /// Signed vertical displacement per tick.
    pub fn velocity(&self) -> f32 {
        BULLET_SPEED * self.owner.direction()
    }
}

// ── Effects & pickups ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleColor {
    Red,
    Yellow,
    White,
}

/// A short-lived explosion fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    /// Remaining ticks; removed when it reaches 0.
    pub life: u32,
    pub color: ParticleColor,
}

/// Falling pickup worth one health point and a score bonus.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub rect: Rect,
    pub speed: f32,
}

impl PowerUp {
    pub fn new(cx: f32, cy: f32) -> Self {
        Self {
            rect: Rect::centered_at(cx, cy, POWER_UP_SIZE, POWER_UP_SIZE),
            speed: POWER_UP_SPEED,
        }
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub speed: f32,
    pub health: i32,
}

impl Player {
    /// Fresh ship, centred horizontally near the bottom of the surface.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(
                width / 2.0 - PLAYER_WIDTH / 2.0,
                height - PLAYER_BOTTOM_MARGIN - PLAYER_HEIGHT,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            speed: PLAYER_SPEED,
            health: PLAYER_START_HEALTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    pub speed: f32,
    /// +1 moving right, −1 moving left.
    pub direction: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_WIDTH, ENEMY_HEIGHT),
            speed,
            direction: 1.0,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session. Cloneable so the public update functions can return
/// a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Upward bullets fired by the player.
    pub player_bullets: Vec<Bullet>,
    /// Downward bullets fired by the formation.
    pub enemy_bullets: Vec<Bullet>,
    pub particles: Vec<Particle>,
    pub power_ups: Vec<PowerUp>,
    pub score: u32,
    /// Starts at 1, +1 per cleared wave.
    pub level: u32,
    pub status: GameStatus,
    /// Per-enemy speed of the current wave.
    pub wave_speed: f32,
    /// Ticks since the formation last fired.
    pub enemy_fire_timer: u32,
    /// Simulated ticks since the session started.
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}
