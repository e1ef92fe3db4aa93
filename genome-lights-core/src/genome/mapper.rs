use super::{Base, Genome};
use crate::clock::Every;
use crate::config::Config;
use crate::errors::{GenomeError, GenomeResult};
use crate::logging::debug;

/// Turns wall clock time into a scrolling read position.
///
/// The position only moves in whole steps, so it is tracked as a step counter. `offset` is that counter divided by
/// the steps per base. Counting steps keeps a full trip around the genome exact.
#[derive(Debug, Clone)]
pub struct ScrollMapper<'a> {
    genome: Genome<'a>,
    steps: u32,
    /// always less than `genome.len() * steps`
    ticks: usize,
    every: Every,
}

impl<'a> ScrollMapper<'a> {
    /// Scrolls one base every 500ms in 20 steps.
    pub fn new(genome: &'a [u8]) -> GenomeResult<Self> {
        Self::with_timing(genome, 500, 20)
    }

    pub fn from_config(genome: &'a [u8], config: &Config) -> GenomeResult<Self> {
        Self::with_timing(genome, config.scroll_period_ms, config.scroll_steps)
    }

    /// Moves one base every `period_ms`, split into `steps` even steps.
    pub fn with_timing(genome: &'a [u8], period_ms: u32, steps: u32) -> GenomeResult<Self> {
        let genome = Genome::new(genome)?;

        if period_ms == 0 {
            return Err(GenomeError::ZeroScrollPeriod);
        }

        if steps == 0 {
            return Err(GenomeError::ZeroScrollSteps);
        }

        let step_ms = period_ms / steps;

        debug!(
            "scrolling {} bases. 1 step every {}ms",
            genome.len(),
            step_ms
        );

        Ok(Self {
            genome,
            steps,
            ticks: 0,
            every: Every::new(step_ms as u64),
        })
    }

    pub fn genome(&self) -> &Genome<'a> {
        &self.genome
    }

    /// Advances one step if a step's worth of time has elapsed. Safe to call as often as you like.
    pub fn update(&mut self, now_ms: u64) {
        if self.every.check(now_ms).fired() {
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.ticks += 1;

        if self.ticks >= self.genome.len() * self.steps as usize {
            self.ticks = 0;
        }
    }

    /// Fractional read position. Always in `[0, len)`.
    ///
    /// f32 runs out of mantissa at 2^24 and would round the last step of a long genome up to `len`.
    pub fn offset(&self) -> f64 {
        let steps = self.steps as usize;

        (self.ticks / steps) as f64 + (self.ticks % steps) as f64 / steps as f64
    }

    /// How far the window is between whole bases. In `[0, 1)` for any genome length.
    pub fn fraction(&self) -> f32 {
        (self.ticks % self.steps as usize) as f32 / self.steps as f32
    }

    /// The base `pos` places past the start of the window. Wraps around the end of the genome.
    pub fn base_at(&self, pos: usize) -> Base {
        let len = self.genome.len();
        let whole = self.ticks / self.steps as usize;

        self.genome.base((pos % len + whole) % len)
    }
}
