//! Data-driven game balance
//!
//! Every knob a host may want to turn before starting a session. Defaults
//! reproduce the classic pacing; partial JSON overrides fill the rest from
//! defaults.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Session tuning parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal spawn band (inclusive)
    pub spawn_x_min: f32,
    pub spawn_x_max: f32,
    /// Launch line below the visible area
    pub spawn_y: f32,
    /// Objects falling back below this line are removed
    pub death_y: f32,

    /// Gravity (pixels/s², negative = downward)
    pub gravity_y: f32,
    /// Collision radius for gesture hit tests
    pub hit_radius: f32,

    /// Gesture trail capacity
    pub trail_length: usize,

    /// Grace period before the first wave
    pub startup_delay: f32,
    /// Seconds between waves (initial)
    pub popup_time: f32,
    /// Chain spawn window (initial)
    pub chain_delay: f32,
    /// Base physics speed multiplier
    pub physics_speed: f32,
    /// Per-wave decay of popup_time
    pub popup_decay: f32,
    /// Per-wave decay of chain_delay
    pub chain_decay: f32,
    /// Per-wave growth of physics_speed
    pub speed_growth: f32,

    /// One random spawn in this many is a hazard
    pub hazard_one_in: u32,
    /// Starting lives
    pub starting_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_x_min: consts::SPAWN_X_MIN,
            spawn_x_max: consts::SPAWN_X_MAX,
            spawn_y: consts::SPAWN_Y,
            death_y: consts::DEATH_Y,
            gravity_y: consts::GRAVITY_Y,
            hit_radius: consts::HIT_RADIUS,
            trail_length: consts::TRAIL_LENGTH,
            startup_delay: consts::STARTUP_DELAY,
            popup_time: consts::POPUP_TIME,
            chain_delay: consts::CHAIN_DELAY,
            physics_speed: consts::PHYSICS_SPEED,
            popup_decay: consts::POPUP_DECAY,
            chain_decay: consts::CHAIN_DECAY,
            speed_growth: consts::SPEED_GROWTH,
            hazard_one_in: consts::HAZARD_ONE_IN,
            starting_lives: consts::STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize tuning to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
