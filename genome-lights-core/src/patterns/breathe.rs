use super::{Frame, HueCycle, Pattern};
use crate::clock::Every;
use crate::genome::Base;
use crate::lights::{Strand, beatsin16};

/// Hue offsets for A, C, G and T.
pub const BREATHE_OFFSETS: [u8; 4] = [48, 112, 176, 250];

const BREATHS_PER_MINUTE: u16 = 16;

/// never fade all the way to black
const MAX_FADE: u16 = 240;

/// A hue cycle with both strands slowly breathing in and out of phase with each other.
///
/// Redraws and fades every 10ms. Between redraws the buffer is left alone so the fade never stacks on itself.
#[derive(Debug, Clone)]
pub struct BreatheFade {
    inner: HueCycle,
    every: Every,
}

impl Default for BreatheFade {
    fn default() -> Self {
        Self::new()
    }
}

impl BreatheFade {
    /// the hues step every 250ms like a plain hue cycle
    pub fn new() -> Self {
        Self {
            inner: HueCycle::with_timing(250, BREATHE_OFFSETS),
            every: Every::new(10),
        }
    }

    /// How much each strand is dimmed at `now_ms`. The complementary strand is half a breath behind.
    pub fn fade_amounts(now_ms: u64) -> (u8, u8) {
        let sense = beatsin16(now_ms, BREATHS_PER_MINUTE, 0, MAX_FADE, 0);
        let complement = beatsin16(now_ms, BREATHS_PER_MINUTE, 0, MAX_FADE, 32767);

        (sense as u8, complement as u8)
    }
}

impl Pattern for BreatheFade {
    fn name(&self) -> &'static str {
        "breathe_fade"
    }

    fn render(&mut self, frame: &mut Frame<'_, '_>, start: usize, end: usize) {
        if !self.every.check(frame.now_ms).open() {
            return;
        }

        self.inner.render(frame, start, end);

        let (sense, complement) = Self::fade_amounts(frame.now_ms);

        for i in start..end {
            frame.leds.fade_to_black_by(Strand::Sense, i, sense);
            frame.leds.fade_to_black_by(Strand::Complement, i, complement);
        }
    }

    fn color_for(&self, base: Base) -> smart_leds::RGB8 {
        self.inner.color_for(base)
    }
}

#[cfg(test)]
mod tests {
    use super::BreatheFade;
    use crate::genome::ScrollMapper;
    use crate::lights::{fade_to_black_by, hue};
    use crate::patterns::test_helpers::{render_frame, rng};
    use smart_leds::colors::BLACK;

    #[test]
    fn test_fade_amounts() {
        assert_eq!(BreatheFade::fade_amounts(0), (120, 120));

        let (sense, complement) = BreatheFade::fade_amounts(936);

        assert!(sense >= 238, "{sense}");
        assert!(complement <= 2, "{complement}");
    }

    #[test]
    fn test_strands_breathe_out_of_phase() {
        let mapper = ScrollMapper::new(b"acgt").unwrap();

        let mut x = BreatheFade::new();
        let mut rng = rng();
        let mut leds = [BLACK; 8];

        // arms the redraw gate
        render_frame(&mut x, &mapper, &mut leds, 926, &mut rng, &[0..4]);
        assert_eq!(leds, [BLACK; 8]);

        render_frame(&mut x, &mapper, &mut leds, 936, &mut rng, &[0..4]);

        let (sense, complement) = BreatheFade::fade_amounts(936);

        // the first redraw only arms the hue gate so the offsets are unshifted
        assert_eq!(leds[0], fade_to_black_by(hue(48), sense));
        assert_eq!(leds[1], fade_to_black_by(hue(112), sense));
        assert_eq!(leds[4], fade_to_black_by(hue(250), complement));
        assert_eq!(leds[7], fade_to_black_by(hue(48), complement));
    }

    #[test]
    fn test_holds_between_redraws() {
        let mapper = ScrollMapper::new(b"acgt").unwrap();

        let mut x = BreatheFade::new();
        let mut rng = rng();
        let mut leds = [BLACK; 8];

        render_frame(&mut x, &mapper, &mut leds, 926, &mut rng, &[0..4]);
        render_frame(&mut x, &mapper, &mut leds, 936, &mut rng, &[0..4]);

        let drawn = leds;

        for now_ms in 937..946 {
            render_frame(&mut x, &mapper, &mut leds, now_ms, &mut rng, &[0..4]);
        }

        assert_eq!(leds, drawn);
    }

    #[test]
    fn test_hues_step_every_250ms() {
        let mapper = ScrollMapper::new(b"acgt").unwrap();

        let mut x = BreatheFade::new();
        let mut rng = rng();
        let mut leds = [BLACK; 8];

        // redraws start at 10ms. the hue steps at 260ms and 510ms
        for now_ms in (0..=630).step_by(10) {
            render_frame(&mut x, &mapper, &mut leds, now_ms, &mut rng, &[0..4]);
        }

        assert_eq!(x.inner.hue_base(), 2);
    }
}
