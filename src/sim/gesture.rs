//! Pointer gesture trail
//!
//! A bounded recent-history path. The hit resolver samples it point by
//! point and the renderer draws it as a stroke; fewer than two samples is
//! not a stroke yet.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Recent pointer samples, oldest first, capped at capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureTrail {
    points: Vec<Vec2>,
    capacity: usize,
}

impl GestureTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Start a fresh stroke at `point`
    pub fn begin(&mut self, point: Vec2) {
        self.points.clear();
        self.points.push(point);
    }

    /// Append a sample, dropping the oldest beyond capacity
    pub fn extend(&mut self, point: Vec2) {
        self.points.push(point);
        if self.points.len() > self.capacity {
            let excess = self.points.len() - self.capacity;
            self.points.drain(..excess);
        }
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Renderable path; a single sample yields nothing
    pub fn path(&self) -> &[Vec2] {
        if self.points.len() < 2 {
            &[]
        } else {
            &self.points
        }
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
