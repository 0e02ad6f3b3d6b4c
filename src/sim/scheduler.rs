//! Deferred spawn scheduling
//!
//! Chain waves stagger their spawns across a delay window, and the next
//! wave waits out the popup delay. Both are (fire-time, action) pairs
//! drained by the tick on the one logical thread; ending the session
//! clears the queue wholesale so nothing fires into a finished run.

use serde::{Deserialize, Serialize};

use super::spawn::SpawnPolicy;

/// Work the sequencer has put off until a later tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Launch one object
    Spawn(SpawnPolicy),
    /// Execute the wave at the cursor
    AdvanceWave,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Deferred {
    fire_at: f64,
    action: Action,
}

/// Single-threaded timer queue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    queue: Vec<Deferred>,
}

impl Scheduler {
    /// Enqueue `action` to fire once the clock reaches `fire_at`
    pub fn schedule(&mut self, fire_at: f64, action: Action) {
        self.queue.push(Deferred { fire_at, action });
    }

    /// Remove and return everything due at `now`, earliest first
    pub fn drain_due(&mut self, now: f64) -> Vec<Action> {
        let mut due: Vec<Deferred> = Vec::new();
        self.queue.retain(|entry| {
            if entry.fire_at <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.fire_at.total_cmp(&b.fire_at));
        due.into_iter().map(|d| d.action).collect()
    }

    /// Drop everything; pending work becomes a no-op
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Whether any staggered spawn is still waiting to fire
    pub fn has_pending_spawn(&self) -> bool {
        self.queue
            .iter()
            .any(|entry| matches!(entry.action, Action::Spawn(_)))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
