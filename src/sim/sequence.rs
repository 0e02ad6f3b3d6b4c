//! Wave patterns and the spawn sequence
//!
//! A session plays through an ordered list of wave patterns: a fixed
//! warm-up prefix, then a long randomized tail. The list never runs dry;
//! another randomized block is appended whenever the cursor catches up.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Tuning;

/// Spawn shape for one wave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePattern {
    /// One guaranteed target
    SingleBenign,
    /// One of anything
    SingleAny,
    /// A target and a hazard together
    PairOneHazard,
    /// Two of anything
    PairAny,
    Triple,
    Quadruple,
    /// Five spawns staggered across the chain window
    Chain,
    /// Five spawns squeezed into half the per-step spacing
    FastChain,
}

impl WavePattern {
    const ALL: [WavePattern; 8] = [
        WavePattern::SingleBenign,
        WavePattern::SingleAny,
        WavePattern::PairOneHazard,
        WavePattern::PairAny,
        WavePattern::Triple,
        WavePattern::Quadruple,
        WavePattern::Chain,
        WavePattern::FastChain,
    ];

    fn random(rng: &mut Pcg32) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Gentle opening waves before the random tail takes over
const WARMUP: [WavePattern; 7] = [
    WavePattern::SingleBenign,
    WavePattern::SingleAny,
    WavePattern::PairOneHazard,
    WavePattern::PairOneHazard,
    WavePattern::Triple,
    WavePattern::SingleAny,
    WavePattern::Chain,
];

/// Randomized patterns appended per block
const TAIL_BLOCK: usize = 1001;

/// Ordered wave list with a monotone cursor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequence {
    patterns: Vec<WavePattern>,
    cursor: usize,
}

impl Sequence {
    /// Warm-up prefix plus one randomized tail block
    pub fn generate(rng: &mut Pcg32) -> Self {
        let mut patterns = Vec::with_capacity(WARMUP.len() + TAIL_BLOCK);
        patterns.extend_from_slice(&WARMUP);
        patterns.extend((0..TAIL_BLOCK).map(|_| WavePattern::random(rng)));
        Self {
            patterns,
            cursor: 0,
        }
    }

    /// Pattern for the current wave; advances the cursor. Extends the tail
    /// instead of running dry.
    pub fn next(&mut self, rng: &mut Pcg32) -> WavePattern {
        if self.cursor == self.patterns.len() {
            self.patterns
                .extend((0..TAIL_BLOCK).map(|_| WavePattern::random(rng)));
        }
        let pattern = self.patterns[self.cursor];
        self.cursor += 1;
        pattern
    }

    /// Waves played so far
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Pace of the game; tightens after every wave and is never clamped
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timing {
    /// Pause between waves (seconds)
    pub popup_time: f32,
    /// Window a chain spreads its spawns across (seconds)
    pub chain_delay: f32,
    /// Global multiplier on simulated time
    pub physics_speed: f32,
}

impl Timing {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            popup_time: tuning.popup_time,
            chain_delay: tuning.chain_delay,
            physics_speed: tuning.physics_speed,
        }
    }

    /// One tightening step, applied on every wave advance
    pub fn decay(&mut self, tuning: &Tuning) {
        self.popup_time *= tuning.popup_decay;
        self.chain_delay *= tuning.chain_decay;
        self.physics_speed *= tuning.speed_growth;
    }
}
