//! Rendering strategies. Each one turns the scrolling window into colors for both strands of one segment.
//!
//! Effects stack by composition. A layered pattern owns the pattern beneath it, renders that first, and then
//! draws its own effect over the top.
//!
//! Ideas for more patterns:
//! - Codons. Color every 3 bases by the amino acid they encode
mod base_filter;
mod breathe;
mod catalog;
mod discrete;
mod dropout;
mod hue_cycle;
mod rainbow_palette;
mod single_sided;
mod sparkle;

pub use base_filter::BaseFilter;
pub use breathe::BreatheFade;
pub use catalog::{GenomePattern, PatternCatalog};
pub use discrete::DiscretePairs;
pub use dropout::{FastMovingDropout, MovingDropout};
pub use hue_cycle::HueCycle;
pub use rainbow_palette::PalettePattern;
pub use single_sided::SingleSided;
pub use sparkle::Sparkle;

use rand::{Rng, RngCore};
use smart_leds::{
    RGB8,
    colors::{BLACK, BLUE, GREEN, RED, YELLOW},
};

use crate::genome::{Base, ScrollMapper};
use crate::lights::{PixelSurface, Strand};

/// Everything a pattern can see and touch while drawing one frame.
///
/// The frame driver builds one of these per frame and hands it to the active pattern once per segment.
pub struct Frame<'a, 'g> {
    pub mapper: &'a ScrollMapper<'g>,
    pub leds: PixelSurface<'a>,
    /// the same instant for every segment of the frame
    pub now_ms: u64,
    rng: &'a mut dyn RngCore,
}

impl<'a, 'g> Frame<'a, 'g> {
    pub fn new(
        mapper: &'a ScrollMapper<'g>,
        leds: &'a mut [RGB8],
        now_ms: u64,
        rng: &'a mut dyn RngCore,
    ) -> Self {
        Self {
            mapper,
            leds: PixelSurface::new(leds),
            now_ms,
            rng,
        }
    }

    pub fn leds_per_strand(&self) -> usize {
        self.leds.leds_per_strand()
    }

    /// uniform in `0..n`. `n` must not be 0
    pub fn random_below(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    pub fn coin_flip(&mut self) -> bool {
        self.rng.random_range(0..2) == 0
    }
}

pub trait Pattern {
    /// stable and unique within the catalog
    fn name(&self) -> &'static str;

    /// Draw `start..end` of the sense strand and the matching range of the complementary strand.
    ///
    /// The caller guarantees `start <= end <= leds_per_strand`. Gated state advances at most once per period no
    /// matter how many segments are rendered in a frame.
    fn render(&mut self, frame: &mut Frame<'_, '_>, start: usize, end: usize);

    /// red, yellow, green, blue. black for anything else
    fn color_for(&self, base: Base) -> RGB8 {
        match base {
            Base::A => RED,
            Base::C => YELLOW,
            Base::G => GREEN,
            Base::T => BLUE,
            Base::Unknown => BLACK,
        }
    }
}

pub fn complementary_base(base: Base) -> Base {
    base.complement()
}

/// The sense strand gets the color for each base. The complementary strand gets the color for its pair.
pub(crate) fn render_pairs<P: Pattern + ?Sized>(
    pattern: &P,
    frame: &mut Frame<'_, '_>,
    start: usize,
    end: usize,
) {
    for i in start..end {
        let base = frame.mapper.base_at(i);

        frame.leds.set(Strand::Sense, i, pattern.color_for(base));
        frame.leds.set(
            Strand::Complement,
            i,
            pattern.color_for(complementary_base(base)),
        );
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use core::ops::Range;

    use rand::{SeedableRng, rngs::SmallRng};
    use smart_leds::RGB8;

    use super::{Frame, Pattern};
    use crate::genome::ScrollMapper;

    pub fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    /// one frame of the driver loop
    pub fn render_frame<P: Pattern + ?Sized>(
        pattern: &mut P,
        mapper: &ScrollMapper,
        leds: &mut [RGB8],
        now_ms: u64,
        rng: &mut SmallRng,
        segments: &[Range<usize>],
    ) {
        let mut frame = Frame::new(mapper, leds, now_ms, rng);

        for segment in segments {
            pattern.render(&mut frame, segment.start, segment.end);
        }
    }
}
