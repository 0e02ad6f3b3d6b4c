//! Trajectory generation for thrown objects
//!
//! Every object launches from below the visible area on a ballistic arc.
//! The horizontal push is a banded function of spawn x so outer lanes
//! launch hard toward the center and inner lanes drift gently, giving the
//! whole field a fountain shape.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{
    ChannelState, GameEvent, GameState, ObjectKind, ParticleEffect, Sound, ThrownObject,
};
use crate::consts;

/// Category selection for a single spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    ForceBenign,
    ForceHazard,
    Random,
}

/// Launch one object and register it. Total: this cannot fail.
pub fn spawn_object(state: &mut GameState, policy: SpawnPolicy) -> u32 {
    let kind = match policy {
        SpawnPolicy::ForceBenign => ObjectKind::Target,
        SpawnPolicy::ForceHazard => ObjectKind::Hazard,
        SpawnPolicy::Random => {
            if state.rng.random_range(0..state.tuning.hazard_one_in) == 0 {
                ObjectKind::Hazard
            } else {
                ObjectKind::Target
            }
        }
    };

    let x = state
        .rng
        .random_range(state.tuning.spawn_x_min..=state.tuning.spawn_x_max);
    let pos = Vec2::new(x, state.tuning.spawn_y);
    let vel = Vec2::new(
        horizontal_launch(&mut state.rng, x),
        state.rng.random_range(24.0..=32.0) * consts::LAUNCH_SCALE,
    );
    let angular_vel = state.rng.random_range(-3.0..=3.0);

    let id = state.next_entity_id();
    state.objects.push(ThrownObject {
        id,
        kind,
        pos,
        vel,
        angular_vel,
        spawned_at: state.clock,
        alive: true,
    });

    match kind {
        ObjectKind::Hazard => {
            // A fresh fuse replaces any burning one
            if state.fuse == ChannelState::Playing {
                state.push_event(GameEvent::StopLoop);
            }
            state.fuse = ChannelState::Playing;
            state.push_event(GameEvent::LoopSound { sound: Sound::Fuse });
            state.push_event(GameEvent::EmitParticles {
                effect: ParticleEffect::Fuse,
                pos,
            });
        }
        ObjectKind::Target => {
            state.push_event(GameEvent::PlaySound {
                sound: Sound::Launch,
                wait_for_completion: false,
            });
        }
    }

    state.push_event(GameEvent::SpawnVisual {
        id,
        kind,
        pos,
        vel,
        angular_vel,
    });
    log::debug!("spawned {kind:?} #{id} at x={x:.0} vel=({:.0},{:.0})", vel.x, vel.y);
    id
}

/// Banded horizontal push: far lanes shove hard inward, center lanes barely
fn horizontal_launch(rng: &mut Pcg32, x: f32) -> f32 {
    let speed = if x < consts::BAND_FAR_LEFT {
        rng.random_range(9.0..=15.0)
    } else if x < consts::BAND_CENTER {
        rng.random_range(3.0..=5.0)
    } else if x < consts::BAND_FAR_RIGHT {
        -rng.random_range(3.0..=5.0)
    } else {
        -rng.random_range(8.0..=15.0)
    };
    speed * consts::LAUNCH_SCALE
}
