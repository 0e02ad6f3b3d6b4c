//! Slice Rush - a gesture-slicing arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, waves, gesture trail, scoring)
//! - `tuning`: Data-driven game balance
//!
//! The crate is headless. A host drives it with per-frame time deltas and
//! pointer events, and drains fire-and-forget commands (`sim::GameEvent`)
//! for its renderer and audio mixer. The core never blocks and never
//! depends on whether a command had an effect.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Horizontal spawn band (inclusive)
    pub const SPAWN_X_MIN: f32 = 64.0;
    pub const SPAWN_X_MAX: f32 = 960.0;
    /// Launch line below the visible area
    pub const SPAWN_Y: f32 = -128.0;
    /// Objects falling back below this line are removed
    pub const DEATH_Y: f32 = -140.0;

    /// Lane boundaries for the banded horizontal launch push
    pub const BAND_FAR_LEFT: f32 = 256.0;
    pub const BAND_CENTER: f32 = 512.0;
    pub const BAND_FAR_RIGHT: f32 = 768.0;
    /// Scale applied to the banded launch speeds
    pub const LAUNCH_SCALE: f32 = 40.0;

    /// Gravity (pixels/s², negative = downward)
    pub const GRAVITY_Y: f32 = -900.0;
    /// Collision radius for gesture hit tests
    pub const HIT_RADIUS: f32 = 64.0;

    /// Maximum number of trail points to store
    pub const TRAIL_LENGTH: usize = 12;
    /// Trail fade-out duration once a gesture ends
    pub const TRAIL_FADE_SECS: f32 = 0.25;

    /// Grace period before the first wave
    pub const STARTUP_DELAY: f32 = 2.0;
    /// Initial pause between waves
    pub const POPUP_TIME: f32 = 0.9;
    /// Initial chain spawn window
    pub const CHAIN_DELAY: f32 = 3.0;
    /// Initial physics speed multiplier
    pub const PHYSICS_SPEED: f32 = 0.85;

    /// Per-wave tightening factors
    pub const POPUP_DECAY: f32 = 0.991;
    pub const CHAIN_DECAY: f32 = 0.99;
    pub const SPEED_GROWTH: f32 = 1.02;

    /// One random spawn in this many is a hazard
    pub const HAZARD_ONE_IN: u32 = 7;
    /// Starting lives
    pub const STARTING_LIVES: u8 = 3;
}
