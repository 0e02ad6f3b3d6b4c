use glam::Vec2;

use slice_rush::Tuning;
use slice_rush::sim::{
    GameEvent, GameState, ObjectKind, SpawnPolicy, pointer_down, pointer_move, pointer_up,
    spawn_object, tick,
};

const DT: f32 = 1.0 / 60.0;

/// Session whose sequencer stays out of the way
fn quiet_session(seed: u64) -> GameState {
    let tuning = Tuning {
        startup_delay: 1e9,
        ..Tuning::default()
    };
    let mut state = GameState::with_tuning(seed, tuning);
    state.start();
    state
}

fn run_for(state: &mut GameState, seconds: f32) {
    let steps = (seconds / DT).ceil() as usize;
    for _ in 0..steps {
        tick(state, DT);
    }
}

/// Swipe straight through `pos`
fn slice_through(state: &mut GameState, pos: Vec2) {
    pointer_down(state, pos - Vec2::new(20.0, 0.0));
    pointer_move(state, pos);
    pointer_up(state);
}

#[test]
fn test_sliced_target_scores_without_costing_lives() {
    let mut state = quiet_session(1);
    let id = spawn_object(&mut state, SpawnPolicy::ForceBenign);
    let pos = state.objects.iter().find(|o| o.id == id).unwrap().pos;

    slice_through(&mut state, pos);

    assert_eq!(state.score, 1);
    assert_eq!(state.lives, 3);
    assert!(!state.objects.iter().any(|o| o.id == id));
    assert!(!state.ended());
}

#[test]
fn test_sliced_hazard_ends_the_run() {
    let mut state = quiet_session(2);
    let id = spawn_object(&mut state, SpawnPolicy::ForceHazard);
    let pos = state.objects.iter().find(|o| o.id == id).unwrap().pos;
    state.drain_events();

    slice_through(&mut state, pos);

    assert!(state.ended());
    assert_eq!(state.timing.physics_speed, 0.0);
    let lost: Vec<usize> = state
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::LifeIndicator {
                index, lost: true, ..
            } => Some(index),
            _ => None,
        })
        .collect();
    assert_eq!(lost, vec![0, 1, 2]);

    // Frozen world: further input and time change nothing
    slice_through(&mut state, pos);
    run_for(&mut state, 1.0);
    assert!(state.drain_events().is_empty());
}

#[test]
fn test_missed_target_costs_a_life_and_leaves_the_registry() {
    let mut state = quiet_session(3);
    let id = spawn_object(&mut state, SpawnPolicy::ForceBenign);

    run_for(&mut state, 10.0);

    assert!(!state.objects.iter().any(|o| o.id == id));
    assert_eq!(state.lives, 2);
    assert!(!state.ended());
    assert!(state.drain_events().contains(&GameEvent::LifeIndicator {
        index: 0,
        lost: true,
        flourish: true,
    }));
}

#[test]
fn test_three_misses_end_the_run() {
    let mut state = quiet_session(4);
    for _ in 0..3 {
        spawn_object(&mut state, SpawnPolicy::ForceBenign);
        run_for(&mut state, 10.0);
    }
    assert_eq!(state.lives, 0);
    assert!(state.ended());
}

#[test]
fn test_autoplay_soak_holds_invariants() {
    let mut state = GameState::new(5);
    state.start();

    let mut last_score = 0;
    let mut last_cursor = 0;
    let mut was_ended = false;

    for _ in 0..(30.0 / DT) as usize {
        // Slice any target that has no hazard close enough to clip
        let safe_target = state
            .objects
            .iter()
            .filter(|o| o.kind == ObjectKind::Target)
            .find(|t| {
                !state
                    .objects
                    .iter()
                    .any(|o| o.kind == ObjectKind::Hazard && o.pos.distance(t.pos) < 130.0)
            })
            .map(|t| t.pos);
        if let Some(pos) = safe_target {
            slice_through(&mut state, pos);
        }

        tick(&mut state, DT);
        state.drain_events();

        assert!(state.lives <= 3);
        assert!(state.score >= last_score, "score never goes down");
        assert!(state.sequence.cursor() >= last_cursor, "cursor never rewinds");
        if was_ended {
            assert!(state.ended(), "a finished run stays finished");
        }
        last_score = state.score;
        last_cursor = state.sequence.cursor();
        was_ended = state.ended();
    }

    // The opening target is always sliced, so the run scored something
    assert!(state.score >= 1);
}
