//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-driven time only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod gesture;
pub mod scheduler;
pub mod sequence;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{objects_at, resolve_hits};
pub use gesture::GestureTrail;
pub use scheduler::{Action, Scheduler};
pub use sequence::{Sequence, Timing, WavePattern};
pub use spawn::{SpawnPolicy, spawn_object};
pub use state::{
    AudioChannel, ChannelState, GameEvent, GameOverCause, GamePhase, GameState, ObjectKind,
    ParticleEffect, Sound, ThrownObject,
};
pub use tick::{pointer_down, pointer_move, pointer_up, sound_finished, tick};
