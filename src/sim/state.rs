//! Game state and core simulation types
//!
//! One `GameState` is one session: score, lives, the live object registry,
//! the wave sequence, and the outgoing command queue all live here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::gesture::GestureTrail;
use super::scheduler::{Action, Scheduler};
use super::sequence::{Sequence, Timing};
use crate::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session constructed, not yet started
    Idle,
    /// The current wave's objects are in flight (or still spawning)
    WaveActive,
    /// Field is clear; the next wave is queued behind the popup delay
    AwaitingNextWave,
    /// Run ended
    Ended,
}

/// What kind of thing got thrown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Rewards score when sliced, costs a life when missed
    Target,
    /// Ends the run when sliced, harmless when missed
    Hazard,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// A hazard was sliced
    Hazard,
    /// The last life was lost to a missed target
    Missed,
}

/// Named sound effects the host is asked to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    /// A target leaving the launcher
    Launch,
    /// A target sliced
    Whack,
    /// A hazard sliced
    Explosion,
    /// A life lost
    LifeLost,
    /// Gesture swoosh, variants 1-3
    Swoosh(u8),
    /// Continuous hazard fuse loop
    Fuse,
}

impl Sound {
    /// Asset name the host resolves to an actual file
    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Launch => "launch",
            Sound::Whack => "whack",
            Sound::Explosion => "explosion",
            Sound::LifeLost => "wrong",
            Sound::Swoosh(1) => "swoosh1",
            Sound::Swoosh(2) => "swoosh2",
            Sound::Swoosh(_) => "swoosh3",
            Sound::Fuse => "fuse",
        }
    }
}

/// Playback state of a gated audio channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelState {
    #[default]
    Idle,
    Playing,
}

/// Audio channels whose playback the core gates explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioChannel {
    /// Gesture swoosh; at most one per stroke until completion
    Swoosh,
    /// Continuous hazard fuse loop
    Fuse,
}

/// Particle effects the renderer knows how to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleEffect {
    /// Burst where a target was sliced
    TargetHit,
    /// Burst at a sliced hazard's container position
    HazardHit,
    /// Burning fuse attached to a live hazard
    Fuse,
}

/// A thrown object, owned by the registry from spawn until removal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrownObject {
    pub id: u32,
    pub kind: ObjectKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Spin (radians/s, sign = direction)
    pub angular_vel: f32,
    /// Session clock at spawn (seconds)
    pub spawned_at: f64,
    /// Cleared the instant the object is struck
    pub alive: bool,
}

/// Fire-and-forget commands for the host's renderer and audio mixer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Put a sprite in flight
    SpawnVisual {
        id: u32,
        kind: ObjectKind,
        pos: Vec2,
        vel: Vec2,
        angular_vel: f32,
    },
    /// Take a sprite down; `animated` asks for the scale+fade treatment
    RemoveVisual { id: u32, animated: bool },
    /// Redraw the gesture stroke
    SetTrailPath { points: Vec<Vec2> },
    /// Fade the gesture stroke out over `duration` seconds
    FadeTrail { duration: f32 },
    /// One-shot sound; `wait_for_completion` channels report back via
    /// `sound_finished`
    PlaySound {
        sound: Sound,
        wait_for_completion: bool,
    },
    /// Start a looping sound
    LoopSound { sound: Sound },
    /// Stop the looping sound
    StopLoop,
    /// Particle burst
    EmitParticles { effect: ParticleEffect, pos: Vec2 },
    /// Score display update
    ScoreChanged { score: u32 },
    /// Life indicator update; `flourish` asks for the overscale-and-settle
    /// animation
    LifeIndicator {
        index: usize,
        lost: bool,
        flourish: bool,
    },
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session tuning (fixed at construction)
    pub tuning: Tuning,
    /// Seconds since the session started
    pub clock: f64,
    /// Current phase
    pub phase: GamePhase,
    /// Score
    pub score: u32,
    /// Player lives
    pub lives: u8,
    /// Wave list and cursor
    pub sequence: Sequence,
    /// Pace of the game; tightens after every wave
    pub timing: Timing,
    /// Gesture trail
    pub trail: GestureTrail,
    /// Live thrown objects (sorted by id; ids are allocated in order)
    pub objects: Vec<ThrownObject>,
    /// Deferred spawns and wave advances
    pub scheduler: Scheduler,
    /// Swoosh channel gate
    pub swoosh: ChannelState,
    /// Fuse loop gate
    pub fuse: ChannelState,
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a session with custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let sequence = Sequence::generate(&mut rng);
        let timing = Timing::new(&tuning);
        let trail = GestureTrail::new(tuning.trail_length);
        Self {
            seed,
            clock: 0.0,
            phase: GamePhase::Idle,
            score: 0,
            lives: tuning.starting_lives,
            sequence,
            timing,
            trail,
            objects: Vec::new(),
            scheduler: Scheduler::default(),
            swoosh: ChannelState::Idle,
            fuse: ChannelState::Idle,
            rng,
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Begin the run; the first wave launches after a short grace period
    pub fn start(&mut self) {
        if self.phase != GamePhase::Idle {
            return;
        }
        self.phase = GamePhase::AwaitingNextWave;
        self.scheduler.schedule(
            self.clock + self.tuning.startup_delay as f64,
            Action::AdvanceWave,
        );
        log::info!("session started (seed {})", self.seed);
    }

    /// Whether the run has ended
    pub fn ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Queue a command for the host
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all queued commands, in emission order
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether any hazard is currently in flight
    pub fn has_live_hazard(&self) -> bool {
        self.objects.iter().any(|o| o.kind == ObjectKind::Hazard)
    }

    /// Number of live objects
    pub fn live_object_count(&self) -> usize {
        self.objects.len()
    }

    /// Remove an object from the registry without ceremony. Idempotent.
    pub fn remove_object(&mut self, id: u32) {
        let before = self.objects.len();
        self.objects.retain(|o| o.id != id);
        if self.objects.len() != before {
            self.push_event(GameEvent::RemoveVisual {
                id,
                animated: false,
            });
        }
    }

    /// Credit destroyed targets
    pub fn add_score(&mut self, points: u32) {
        self.score += points;
        let score = self.score;
        self.push_event(GameEvent::ScoreChanged { score });
    }

    /// One life down: mark the next indicator, end the run at zero
    pub fn lose_life(&mut self) {
        if self.ended() || self.lives == 0 {
            return;
        }
        // Indicators go dark in loss order
        let index = (self.tuning.starting_lives - self.lives) as usize;
        self.lives -= 1;
        self.push_event(GameEvent::PlaySound {
            sound: Sound::LifeLost,
            wait_for_completion: false,
        });
        self.push_event(GameEvent::LifeIndicator {
            index,
            lost: true,
            flourish: true,
        });
        if self.lives == 0 {
            self.end_game(GameOverCause::Missed);
        }
    }

    /// End the run. Idempotent: a second call changes nothing.
    pub fn end_game(&mut self, cause: GameOverCause) {
        if self.ended() {
            return;
        }
        self.phase = GamePhase::Ended;
        // Freeze the world and drop every pending deferred operation
        self.timing.physics_speed = 0.0;
        self.scheduler.clear();
        if self.fuse == ChannelState::Playing {
            self.fuse = ChannelState::Idle;
            self.push_event(GameEvent::StopLoop);
        }
        if cause == GameOverCause::Hazard {
            // Slicing a hazard forfeits every remaining life on the display
            for index in 0..self.tuning.starting_lives as usize {
                self.push_event(GameEvent::LifeIndicator {
                    index,
                    lost: true,
                    flourish: false,
                });
            }
        }
        log::info!(
            "game over ({:?}) score={} wave={}",
            cause,
            self.score,
            self.sequence.cursor()
        );
    }
}
