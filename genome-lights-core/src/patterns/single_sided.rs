use smart_leds::colors::BLACK;

use super::{Frame, HueCycle, Pattern};
use crate::lights::Strand;

/// A hue cycle on the sense strand only. The complementary strand stays dark.
#[derive(Debug, Clone, Default)]
pub struct SingleSided {
    inner: HueCycle,
}

impl Pattern for SingleSided {
    fn name(&self) -> &'static str {
        "single_sided"
    }

    fn render(&mut self, frame: &mut Frame<'_, '_>, start: usize, end: usize) {
        self.inner.render(frame, start, end);

        for i in start..end {
            frame.leds.set(Strand::Complement, i, BLACK);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SingleSided;
    use crate::genome::ScrollMapper;
    use crate::patterns::test_helpers::{render_frame, rng};
    use smart_leds::colors::{BLACK, WHITE};

    #[test]
    fn test_complement_is_dark() {
        let mapper = ScrollMapper::new(b"acgtacgt").unwrap();

        let mut leds = [WHITE; 16];

        render_frame(
            &mut SingleSided::default(),
            &mapper,
            &mut leds,
            0,
            &mut rng(),
            &[0..4, 4..8],
        );

        assert!(leds[..8].iter().all(|x| *x != BLACK && *x != WHITE));
        assert_eq!(leds[8..], [BLACK; 8]);
    }
}
