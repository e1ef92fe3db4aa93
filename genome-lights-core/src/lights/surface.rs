use core::ops::Range;

use smart_leds::RGB8;

use super::fade_to_black_by;
use crate::errors::{GenomeError, GenomeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    /// shows the genome as is
    Sense,
    /// shows the base paired with each sense base
    Complement,
}

/// Both strands laid end to end in one buffer.
///
/// The sense strand is `[0, N)` and the complementary strand is `[N, 2N)`.
/// Indexing past `N` is a bug in the caller's segments and panics.
pub struct PixelSurface<'a> {
    leds: &'a mut [RGB8],
    per_strand: usize,
}

impl<'a> PixelSurface<'a> {
    pub fn new(leds: &'a mut [RGB8]) -> Self {
        debug_assert_eq!(leds.len() % 2, 0, "both strands need the same length");

        let per_strand = leds.len() / 2;

        Self { leds, per_strand }
    }

    pub fn leds_per_strand(&self) -> usize {
        self.per_strand
    }

    fn index(&self, strand: Strand, i: usize) -> usize {
        debug_assert!(i < self.per_strand);

        match strand {
            Strand::Sense => i,
            Strand::Complement => i + self.per_strand,
        }
    }

    #[cfg(test)]
    fn get(&self, strand: Strand, i: usize) -> RGB8 {
        self.leds[self.index(strand, i)]
    }

    pub fn set(&mut self, strand: Strand, i: usize, color: RGB8) {
        let n = self.index(strand, i);

        self.leds[n] = color;
    }

    /// write the same color to `i` on both strands
    pub fn set_pair(&mut self, i: usize, color: RGB8) {
        self.set(Strand::Sense, i, color);
        self.set(Strand::Complement, i, color);
    }

    pub fn fade_to_black_by(&mut self, strand: Strand, i: usize, amount: u8) {
        let n = self.index(strand, i);

        self.leds[n] = fade_to_black_by(self.leds[n], amount);
    }

    #[cfg(test)]
    fn as_slice(&self) -> &[RGB8] {
        &self.leds[..]
    }
}

/// Fails unless `start..end` fits inside one strand.
pub fn check_segment(start: usize, end: usize, leds_per_strand: usize) -> GenomeResult<()> {
    if start > end || end > leds_per_strand {
        return Err(GenomeError::InvalidSegment {
            start,
            end,
            leds_per_strand,
        });
    }

    Ok(())
}

/// Split a strand into one contiguous range per output. Leftover leds go to the last output.
pub fn segments(leds_per_strand: usize, outputs: usize) -> impl Iterator<Item = Range<usize>> {
    let outputs = outputs.max(1);
    let chunk = leds_per_strand / outputs;

    (0..outputs).map(move |i| {
        let start = i * chunk;

        let end = if i == outputs - 1 {
            leds_per_strand
        } else {
            start + chunk
        };

        start..end
    })
}
