use smart_leds::{
    RGB8,
    colors::{BLACK, WHITE},
};

use super::{Frame, HueCycle, Pattern};
use crate::clock::Every;

/// One pixel of a fixed color that creeps backwards along the strip, on both strands.
#[derive(Debug, Clone)]
pub struct Dropout {
    position: usize,
    every: Every,
    color: RGB8,
}

impl Dropout {
    pub const fn new(step_ms: u64, color: RGB8) -> Self {
        Self {
            position: 0,
            every: Every::new(step_ms),
            color,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    fn step(&mut self, leds_per_strand: usize) {
        if self.position == 0 {
            self.position = leds_per_strand.saturating_sub(1);
        } else {
            self.position -= 1;
        }
    }

    pub fn overlay(&mut self, frame: &mut Frame<'_, '_>, start: usize, end: usize) {
        if self.every.check(frame.now_ms).fired() {
            self.step(frame.leds_per_strand());
        }

        if (start..end).contains(&self.position) {
            frame.leds.set_pair(self.position, self.color);
        }
    }
}

/// A hue cycle with a dark pixel sweeping through it.
#[derive(Debug, Clone)]
pub struct MovingDropout {
    inner: HueCycle,
    dropout: Dropout,
}

impl Default for MovingDropout {
    fn default() -> Self {
        Self::new()
    }
}

impl MovingDropout {
    pub fn new() -> Self {
        Self {
            inner: HueCycle::new(),
            dropout: Dropout::new(50, BLACK),
        }
    }

    pub fn dropout(&self) -> &Dropout {
        &self.dropout
    }
}

impl Pattern for MovingDropout {
    fn name(&self) -> &'static str {
        "moving_dropout"
    }

    fn render(&mut self, frame: &mut Frame<'_, '_>, start: usize, end: usize) {
        self.inner.render(frame, start, end);

        self.dropout.overlay(frame, start, end);
    }
}

/// The moving dropout plus a much faster white pixel chasing through it.
#[derive(Debug, Clone)]
pub struct FastMovingDropout {
    inner: MovingDropout,
    faster: Dropout,
}

impl Default for FastMovingDropout {
    fn default() -> Self {
        Self::new()
    }
}

impl FastMovingDropout {
    pub fn new() -> Self {
        Self {
            inner: MovingDropout::new(),
            faster: Dropout::new(5, WHITE),
        }
    }
}

impl Pattern for FastMovingDropout {
    fn name(&self) -> &'static str {
        "fast_moving_dropout"
    }

    fn render(&mut self, frame: &mut Frame<'_, '_>, start: usize, end: usize) {
        self.inner.render(frame, start, end);

        self.faster.overlay(frame, start, end);
    }
}
