// Easing: a current position that chases a target a fraction at a time.
// Visual: the circle (and the square) glide toward where they should be,
// fast at first and slower as they get close.

use crate::types::Point;

/// Frames of lag. Every tick the follower covers 1/DELAY of the remaining gap.
pub const DELAY: f32 = 4.0;

/// A tracked position plus the point it is heading to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follower {
    pub current: Point,
    pub target: Point,
}

impl Follower {
    /// Starts at rest on `at`.
    pub const fn at(at: Point) -> Self {
        Self { current: at, target: at }
    }

    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    /// One tick of exponential smoothing: `current += (target - current) / delay`.
    pub fn step(&mut self, delay: f32) {
        self.current.x += (self.target.x - self.current.x) / delay;
        self.current.y += (self.target.y - self.current.y) / delay;
    }

    /// Distance still to cover.
    #[cfg(test)]
    pub fn remaining(&self) -> f32 {
        let dx = self.target.x - self.current.x;
        let dy = self.target.y - self.current.y;
        (dx * dx + dy * dy).sqrt()
    }
}
