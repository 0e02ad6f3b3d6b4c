//! Host-driven advance of the simulation
//!
//! One `tick` per rendered frame plus discrete pointer callbacks, all on a
//! single logical thread. Within one tick, expired objects are removed
//! before the fuse gate is re-evaluated; within one pointer move, the
//! trail extends before hits resolve.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::scheduler::Action;
use super::sequence::WavePattern;
use super::spawn::{self, SpawnPolicy};
use super::state::{AudioChannel, ChannelState, GameEvent, GamePhase, GameState, ObjectKind, Sound};
use crate::consts;

/// Advance the session by `dt` seconds of host time
pub fn tick(state: &mut GameState, dt: f32) {
    if state.ended() || state.phase == GamePhase::Idle {
        return;
    }

    state.clock += dt as f64;

    // Deferred work first, so chain spawns land before this frame's physics
    for action in state.scheduler.drain_due(state.clock) {
        match action {
            Action::Spawn(policy) => {
                spawn::spawn_object(state, policy);
            }
            Action::AdvanceWave => toss_wave(state),
        }
    }

    // Ballistic integration; the global multiplier scales simulated time
    let sim_dt = dt * state.timing.physics_speed;
    let gravity = state.tuning.gravity_y;
    for object in &mut state.objects {
        object.vel.y += gravity * sim_dt;
        object.pos += object.vel * sim_dt;
    }

    // Expire everything that fell below the death line
    expire_fallen(state);

    // No hazard left in flight: silence the fuse immediately
    if state.fuse == ChannelState::Playing && !state.has_live_hazard() {
        state.fuse = ChannelState::Idle;
        state.push_event(GameEvent::StopLoop);
    }

    // Queue the next wave once the field is clear; AwaitingNextWave doubles
    // as the only-one-pending guard
    if state.phase == GamePhase::WaveActive
        && state.objects.is_empty()
        && !state.scheduler.has_pending_spawn()
    {
        state.phase = GamePhase::AwaitingNextWave;
        state.scheduler.schedule(
            state.clock + state.timing.popup_time as f64,
            Action::AdvanceWave,
        );
    }
}

/// Remove objects past the death line. A missed target costs a life; a
/// hazard burning out on its own is a free pass.
fn expire_fallen(state: &mut GameState) {
    let death_y = state.tuning.death_y;
    let fallen: Vec<(u32, ObjectKind)> = state
        .objects
        .iter()
        .filter(|o| o.pos.y < death_y)
        .map(|o| (o.id, o.kind))
        .collect();
    for (id, kind) in fallen {
        state.remove_object(id);
        if kind == ObjectKind::Target {
            state.lose_life();
        }
    }
}

/// Execute the wave at the cursor and tighten the pace
fn toss_wave(state: &mut GameState) {
    state.timing.decay(&state.tuning);
    let pattern = state.sequence.next(&mut state.rng);
    state.phase = GamePhase::WaveActive;
    log::info!(
        "wave {} -> {:?} (popup {:.3}s chain {:.3}s speed {:.3})",
        state.sequence.cursor(),
        pattern,
        state.timing.popup_time,
        state.timing.chain_delay,
        state.timing.physics_speed,
    );

    match pattern {
        WavePattern::SingleBenign => {
            spawn::spawn_object(state, SpawnPolicy::ForceBenign);
        }
        WavePattern::SingleAny => {
            spawn::spawn_object(state, SpawnPolicy::Random);
        }
        WavePattern::PairOneHazard => {
            spawn::spawn_object(state, SpawnPolicy::ForceBenign);
            spawn::spawn_object(state, SpawnPolicy::ForceHazard);
        }
        WavePattern::PairAny => {
            for _ in 0..2 {
                spawn::spawn_object(state, SpawnPolicy::Random);
            }
        }
        WavePattern::Triple => {
            for _ in 0..3 {
                spawn::spawn_object(state, SpawnPolicy::Random);
            }
        }
        WavePattern::Quadruple => {
            for _ in 0..4 {
                spawn::spawn_object(state, SpawnPolicy::Random);
            }
        }
        WavePattern::Chain => stagger(state, state.timing.chain_delay / 5.0),
        WavePattern::FastChain => stagger(state, state.timing.chain_delay / 10.0),
    }
}

/// One spawn now, four more spread across the chain window
fn stagger(state: &mut GameState, step: f32) {
    spawn::spawn_object(state, SpawnPolicy::Random);
    for i in 1..5u32 {
        state.scheduler.schedule(
            state.clock + (step * i as f32) as f64,
            Action::Spawn(SpawnPolicy::Random),
        );
    }
}

/// Pointer pressed: start a fresh stroke
pub fn pointer_down(state: &mut GameState, point: Vec2) {
    if state.ended() {
        return;
    }
    state.trail.begin(point);
    let points = state.trail.path().to_vec();
    state.push_event(GameEvent::SetTrailPath { points });
}

/// Pointer moved: extend the stroke, then resolve hits at the new sample
pub fn pointer_move(state: &mut GameState, point: Vec2) {
    if state.ended() {
        return;
    }
    state.trail.extend(point);
    let points = state.trail.path().to_vec();
    state.push_event(GameEvent::SetTrailPath { points });

    // At most one swoosh per stroke until the host reports it finished
    if state.swoosh == ChannelState::Idle {
        state.swoosh = ChannelState::Playing;
        let variant = state.rng.random_range(1..=3u8);
        state.push_event(GameEvent::PlaySound {
            sound: Sound::Swoosh(variant),
            wait_for_completion: true,
        });
    }

    collision::resolve_hits(state, point);
}

/// Pointer released: let the stroke fade out
pub fn pointer_up(state: &mut GameState) {
    if state.ended() {
        return;
    }
    state.push_event(GameEvent::FadeTrail {
        duration: consts::TRAIL_FADE_SECS,
    });
}

/// Host callback once a wait-for-completion sound finished playing
pub fn sound_finished(state: &mut GameState, channel: AudioChannel) {
    match channel {
        AudioChannel::Swoosh => state.swoosh = ChannelState::Idle,
        // The fuse is a loop; it only stops when told to
        AudioChannel::Fuse => {}
    }
}
