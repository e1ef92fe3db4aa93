use smart_leds::{RGB8, colors::BLACK};

use super::{Frame, Pattern, render_pairs};
use crate::clock::Every;
use crate::genome::Base;
use crate::lights::hue;

/// Hue offsets for A, C, G and T. G starts at the base hue and each base is a quarter turn further.
pub const HUE_CYCLE_OFFSETS: [u8; 4] = [192, 128, 0, 64];

/// The highest `hue_base`. The cycle bounces between 0 and this.
pub const MAX_HUE_BASE: u8 = 63;

/// Colors every base by hue and slowly swings all the hues back and forth.
///
/// This is the bottom layer of most of the animated patterns.
#[derive(Debug, Clone)]
pub struct HueCycle {
    hue_base: u8,
    increasing: bool,
    every: Every,
    /// indexed in ACGT order
    offsets: [u8; 4],
}

impl Default for HueCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl HueCycle {
    /// one hue step every 250ms
    pub fn new() -> Self {
        Self::with_timing(250, HUE_CYCLE_OFFSETS)
    }

    pub fn with_timing(step_ms: u64, offsets: [u8; 4]) -> Self {
        Self {
            hue_base: 0,
            increasing: true,
            every: Every::new(step_ms),
            offsets,
        }
    }

    pub fn hue_base(&self) -> u8 {
        self.hue_base
    }

    pub fn increasing(&self) -> bool {
        self.increasing
    }

    /// A triangle wave. The direction flips when a step would leave `0..=MAX_HUE_BASE`.
    pub fn step(&mut self) {
        if self.increasing {
            if self.hue_base == MAX_HUE_BASE {
                self.increasing = false;
                self.hue_base -= 1;
            } else {
                self.hue_base += 1;
            }
        } else if self.hue_base == 0 {
            self.increasing = true;
            self.hue_base = 1;
        } else {
            self.hue_base -= 1;
        }
    }

    pub(crate) fn update(&mut self, now_ms: u64) {
        if self.every.check(now_ms).fired() {
            self.step();
        }
    }
}

impl Pattern for HueCycle {
    fn name(&self) -> &'static str {
        "hue_cycle"
    }

    fn render(&mut self, frame: &mut Frame<'_, '_>, start: usize, end: usize) {
        self.update(frame.now_ms);

        render_pairs(self, frame, start, end);
    }

    fn color_for(&self, base: Base) -> RGB8 {
        let offset = match base {
            Base::A => self.offsets[0],
            Base::C => self.offsets[1],
            Base::G => self.offsets[2],
            Base::T => self.offsets[3],
            Base::Unknown => return BLACK,
        };

        hue(self.hue_base.wrapping_add(offset))
    }
}
