use smart_leds::colors::WHITE;

use super::{Frame, HueCycle, Pattern};
use crate::clock::Every;
use crate::lights::Strand;

/// random pixels to consider per sparkle tick. each one only lights half of the time
const SPARKLE_CANDIDATES: usize = 2;

/// Sparkles only while `from_ms < now % cycle_ms < until_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparkleWindow {
    pub cycle_ms: u64,
    pub from_ms: u64,
    pub until_ms: u64,
}

impl SparkleWindow {
    /// 10 seconds of sparkles in every 30 seconds
    pub const INTERMITTENT: Self = Self {
        cycle_ms: 30_000,
        from_ms: 15_000,
        until_ms: 25_000,
    };

    pub fn contains(&self, now_ms: u64) -> bool {
        let x = now_ms % self.cycle_ms;

        x > self.from_ms && x < self.until_ms
    }
}

/// A hue cycle with white pixels flashing at random.
///
/// Only redraws every 20ms so that each sparkle stays lit long enough to see.
#[derive(Debug, Clone)]
pub struct Sparkle {
    inner: HueCycle,
    every: Every,
    window: Option<SparkleWindow>,
}

impl Default for Sparkle {
    fn default() -> Self {
        Self::new()
    }
}

impl Sparkle {
    pub fn new() -> Self {
        Self {
            inner: HueCycle::new(),
            every: Every::new(20),
            window: None,
        }
    }

    pub fn intermittent() -> Self {
        Self {
            window: Some(SparkleWindow::INTERMITTENT),
            ..Self::new()
        }
    }

    pub fn inner(&self) -> &HueCycle {
        &self.inner
    }

    fn sparkling(&self, now_ms: u64) -> bool {
        self.window.is_none_or(|window| window.contains(now_ms))
    }
}

impl Pattern for Sparkle {
    fn name(&self) -> &'static str {
        if self.window.is_some() {
            "intermittent_sparkle"
        } else {
            "sparkle"
        }
    }

    fn render(&mut self, frame: &mut Frame<'_, '_>, start: usize, end: usize) {
        if !self.every.check(frame.now_ms).open() {
            // leave the last frame and its sparkles up
            return;
        }

        self.inner.render(frame, start, end);

        if start == end || !self.sparkling(frame.now_ms) {
            return;
        }

        let leds_per_strand = frame.leds_per_strand();

        for _ in 0..SPARKLE_CANDIDATES {
            let target = frame.random_below(leds_per_strand);

            if target < start || target >= end {
                continue;
            }

            if frame.coin_flip() {
                continue;
            }

            let strand = if frame.coin_flip() {
                Strand::Complement
            } else {
                Strand::Sense
            };

            frame.leds.set(strand, target, WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Sparkle, SparkleWindow};
    use crate::genome::ScrollMapper;
    use crate::patterns::test_helpers::{render_frame, rng};
    use crate::patterns::{HueCycle, Pattern};
    use smart_leds::{
        RGB8,
        colors::{BLACK, WHITE},
    };

    const N: usize = 16;

    fn count_white(leds: &[RGB8]) -> usize {
        leds.iter().filter(|x| **x == WHITE).count()
    }

    /// the hue cycle frame with any white pixels put back
    fn assert_only_sparkles_differ(leds: &[RGB8], now_ms: u64) {
        let mapper = ScrollMapper::new(b"gattaca").unwrap();

        let mut expected = [BLACK; 2 * N];

        render_frame(
            &mut HueCycle::new(),
            &mapper,
            &mut expected,
            now_ms,
            &mut rng(),
            &[0..N],
        );

        for (x, y) in leds.iter().zip(expected.iter()) {
            assert!(x == y || *x == WHITE);
        }
    }

    #[test]
    fn test_window() {
        let window = SparkleWindow::INTERMITTENT;

        assert!(!window.contains(0));
        assert!(!window.contains(15_000));
        assert!(window.contains(15_001));
        assert!(window.contains(24_999));
        assert!(!window.contains(25_000));
        assert!(window.contains(30_000 + 20_000));
    }

    #[test]
    fn test_sparkles_eventually() {
        let mapper = ScrollMapper::new(b"gattaca").unwrap();

        let mut x = Sparkle::new();
        let mut rng = rng();
        let mut leds = [BLACK; 2 * N];

        let mut sparkles = 0;

        for now_ms in (0..2_000).step_by(20) {
            render_frame(&mut x, &mapper, &mut leds, now_ms, &mut rng, &[0..N]);

            let lit = count_white(&leds);

            assert!(lit <= 2);

            sparkles += lit;
        }

        assert!(sparkles > 0);
    }

    #[test]
    fn test_sparkles_stay_in_segment() {
        let mapper = ScrollMapper::new(b"gattaca").unwrap();

        let mut x = Sparkle::new();
        let mut rng = rng();

        for now_ms in (0..2_000).step_by(20) {
            let mut leds = [BLACK; 2 * N];

            render_frame(&mut x, &mapper, &mut leds, now_ms, &mut rng, &[4..8]);

            for (i, led) in leds.iter().enumerate() {
                if i % N < 4 || i % N >= 8 {
                    assert_eq!(*led, BLACK);
                }
            }
        }
    }

    #[test]
    fn test_holds_between_ticks() {
        let mapper = ScrollMapper::new(b"gattaca").unwrap();

        let mut x = Sparkle::new();
        let mut rng = rng();
        let mut leds = [BLACK; 2 * N];

        // arms the gate and draws nothing
        render_frame(&mut x, &mapper, &mut leds, 0, &mut rng, &[0..N]);
        assert_eq!(leds, [BLACK; 2 * N]);

        render_frame(&mut x, &mapper, &mut leds, 20, &mut rng, &[0..N]);
        assert_only_sparkles_differ(&leds, 20);

        let held = leds;

        render_frame(&mut x, &mapper, &mut leds, 25, &mut rng, &[0..N]);
        assert_eq!(leds, held);
    }

    #[test]
    fn test_every_segment_of_a_frame_draws() {
        let mapper = ScrollMapper::new(b"gattaca").unwrap();

        let mut x = Sparkle::new();
        let mut rng = rng();
        let mut leds = [BLACK; 2 * N];

        render_frame(&mut x, &mapper, &mut leds, 0, &mut rng, &[0..8, 8..N]);
        render_frame(&mut x, &mapper, &mut leds, 20, &mut rng, &[0..8, 8..N]);

        assert!(leds.iter().all(|x| *x != BLACK));
    }

    #[test]
    fn test_intermittent_is_quiet_outside_window() {
        let mapper = ScrollMapper::new(b"gattaca").unwrap();

        let mut x = Sparkle::intermittent();
        let mut rng = rng();
        let mut leds = [BLACK; 2 * N];

        assert_eq!(x.name(), "intermittent_sparkle");

        for now_ms in (0..15_000).step_by(20) {
            render_frame(&mut x, &mapper, &mut leds, now_ms, &mut rng, &[0..N]);

            assert_eq!(count_white(&leds), 0);
        }

        // the hue cycle only steps on frames the sparkle gate lets through. armed at 20, then every 260ms
        assert_eq!(x.inner().hue_base(), 57);
    }
}
