//! Gesture hit resolution
//!
//! Discrete point-in-circle tests against the live registry. There is no
//! segment interpolation between consecutive samples: a fast enough swipe
//! passes clean through an object without registering.

use glam::Vec2;

use super::state::{GameEvent, GameOverCause, GameState, ObjectKind, ParticleEffect, Sound};

/// Ids of live objects overlapping `point`
pub fn objects_at(state: &GameState, point: Vec2) -> Vec<u32> {
    let r2 = state.tuning.hit_radius * state.tuning.hit_radius;
    state
        .objects
        .iter()
        .filter(|o| o.alive && o.pos.distance_squared(point) <= r2)
        .map(|o| o.id)
        .collect()
}

/// Strike everything under one gesture sample. Every struck object is
/// processed, even when an earlier one in the same sample ended the run.
pub fn resolve_hits(state: &mut GameState, point: Vec2) {
    if state.ended() {
        return;
    }
    for id in objects_at(state, point) {
        destroy(state, id);
    }
}

fn destroy(state: &mut GameState, id: u32) {
    let Some(idx) = state.objects.iter().position(|o| o.id == id) else {
        return;
    };
    // Struck objects leave the registry immediately; the renderer gets the
    // scale+fade treatment via the animated removal
    state.objects[idx].alive = false;
    let object = state.objects.remove(idx);

    match object.kind {
        ObjectKind::Target => {
            state.push_event(GameEvent::EmitParticles {
                effect: ParticleEffect::TargetHit,
                pos: object.pos,
            });
            state.push_event(GameEvent::RemoveVisual { id, animated: true });
            state.push_event(GameEvent::PlaySound {
                sound: Sound::Whack,
                wait_for_completion: false,
            });
            state.add_score(1);
        }
        ObjectKind::Hazard => {
            state.push_event(GameEvent::EmitParticles {
                effect: ParticleEffect::HazardHit,
                pos: object.pos,
            });
            state.push_event(GameEvent::RemoveVisual { id, animated: true });
            state.push_event(GameEvent::PlaySound {
                sound: Sound::Explosion,
                wait_for_completion: false,
            });
            state.end_game(GameOverCause::Hazard);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::spawn::{SpawnPolicy, spawn_object};
    use super::super::state::GamePhase;

    fn place(state: &mut GameState, policy: SpawnPolicy, pos: Vec2) -> u32 {
        let id = spawn_object(state, policy);
        state.objects.iter_mut().find(|o| o.id == id).unwrap().pos = pos;
        state.drain_events();
        id
    }

    #[test]
    fn test_hit_inside_radius_only() {
        let mut state = GameState::new(21);
        place(&mut state, SpawnPolicy::ForceBenign, Vec2::new(500.0, 300.0));

        assert!(objects_at(&state, Vec2::new(600.0, 300.0)).is_empty());
        assert_eq!(objects_at(&state, Vec2::new(540.0, 300.0)).len(), 1);
    }

    #[test]
    fn test_target_strike_scores_and_unregisters() {
        let mut state = GameState::new(22);
        place(&mut state, SpawnPolicy::ForceBenign, Vec2::new(500.0, 300.0));

        resolve_hits(&mut state, Vec2::new(500.0, 300.0));
        assert_eq!(state.score, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.live_object_count(), 0);

        let events = state.drain_events();
        assert!(events.contains(&GameEvent::PlaySound {
            sound: Sound::Whack,
            wait_for_completion: false,
        }));
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::RemoveVisual { animated: true, .. }
        )));
        assert!(events.contains(&GameEvent::ScoreChanged { score: 1 }));
    }

    #[test]
    fn test_hazard_strike_ends_the_run() {
        let mut state = GameState::new(23);
        place(&mut state, SpawnPolicy::ForceHazard, Vec2::new(500.0, 300.0));

        resolve_hits(&mut state, Vec2::new(500.0, 300.0));
        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.timing.physics_speed, 0.0);
        assert_eq!(state.live_object_count(), 0);

        let events = state.drain_events();
        assert!(events.contains(&GameEvent::PlaySound {
            sound: Sound::Explosion,
            wait_for_completion: false,
        }));
    }

    #[test]
    fn test_no_interpolation_between_samples() {
        let mut state = GameState::new(24);
        place(&mut state, SpawnPolicy::ForceBenign, Vec2::new(500.0, 300.0));

        // Two samples straddle the object; the segment between them crosses
        // it but neither endpoint overlaps
        resolve_hits(&mut state, Vec2::new(300.0, 300.0));
        resolve_hits(&mut state, Vec2::new(700.0, 300.0));
        assert_eq!(state.score, 0);
        assert_eq!(state.live_object_count(), 1);
    }

    #[test]
    fn test_overlapping_strikes_process_independently() {
        let mut state = GameState::new(25);
        place(&mut state, SpawnPolicy::ForceHazard, Vec2::new(500.0, 300.0));
        place(&mut state, SpawnPolicy::ForceBenign, Vec2::new(520.0, 300.0));

        // One sample overlaps both; the hazard ends the run but the target
        // is still struck and scored
        resolve_hits(&mut state, Vec2::new(510.0, 300.0));
        assert!(state.ended());
        assert_eq!(state.score, 1);
        assert_eq!(state.live_object_count(), 0);
    }

    #[test]
    fn test_resolve_after_end_is_a_no_op() {
        let mut state = GameState::new(26);
        place(&mut state, SpawnPolicy::ForceBenign, Vec2::new(500.0, 300.0));
        state.end_game(GameOverCause::Missed);
        state.drain_events();

        resolve_hits(&mut state, Vec2::new(500.0, 300.0));
        assert_eq!(state.score, 0);
        assert_eq!(state.live_object_count(), 1);
        assert!(state.drain_events().is_empty());
    }
}
