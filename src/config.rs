//! Runtime configuration: surface size, tick rate and RNG seed.
//!
//! Defaults match the classic 800×600 @ 60 Hz screen. Each field can be
//! overridden through an `INVADERS_*` environment variable.

use std::env;
use std::str::FromStr;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_RATE};

/// Smallest surface the 5×10 formation and the player fit on.
pub const MIN_WIDTH: f32 = 640.0;
pub const MIN_HEIGHT: f32 = 400.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Fixed RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Bad values are logged and
    /// replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = read_value(&lookup, "INVADERS_WIDTH", defaults.width, |w| {
            w.is_finite() && *w >= MIN_WIDTH
        });
        let height = read_value(&lookup, "INVADERS_HEIGHT", defaults.height, |h| {
            h.is_finite() && *h >= MIN_HEIGHT
        });
        let tick_rate = read_value(&lookup, "INVADERS_TICK_RATE", defaults.tick_rate, |r| *r > 0);
        let seed = lookup("INVADERS_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("INVADERS_SEED={raw:?} is not a u64, seeding from entropy");
                None
            }
        });

        Self {
            width,
            height,
            tick_rate,
            seed,
        }
    }
}

fn read_value<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            log::warn!("{key}={raw:?} is invalid, falling back to {default}");
            default
        }
    }
}
