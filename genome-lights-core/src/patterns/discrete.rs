use super::{Frame, Pattern, render_pairs};

/// One fixed color per base. No animation beyond the scrolling.
#[derive(Debug, Clone, Default)]
pub struct DiscretePairs;

impl Pattern for DiscretePairs {
    fn name(&self) -> &'static str {
        "discrete_pairs"
    }

    fn render(&mut self, frame: &mut Frame<'_, '_>, start: usize, end: usize) {
        render_pairs(self, frame, start, end);
    }
}

#[cfg(test)]
mod tests {
    use super::DiscretePairs;
    use crate::genome::ScrollMapper;
    use crate::patterns::test_helpers::{render_frame, rng};
    use smart_leds::colors::{BLACK, BLUE, GREEN, RED, YELLOW};

    #[test]
    fn test_pairs() {
        let mapper = ScrollMapper::new(b"acgt").unwrap();

        let mut leds = [BLACK; 8];

        render_frame(
            &mut DiscretePairs,
            &mapper,
            &mut leds,
            0,
            &mut rng(),
            &[0..4],
        );

        assert_eq!(leds[..4], [RED, YELLOW, GREEN, BLUE]);
        assert_eq!(leds[4..], [BLUE, GREEN, YELLOW, RED]);
    }

    #[test]
    fn test_unknown_is_black() {
        let mapper = ScrollMapper::new(b"anna").unwrap();

        let mut leds = [YELLOW; 8];

        render_frame(
            &mut DiscretePairs,
            &mapper,
            &mut leds,
            0,
            &mut rng(),
            &[0..2, 2..4],
        );

        assert_eq!(leds, [RED, BLACK, BLACK, RED, BLUE, BLACK, BLACK, BLUE]);
    }

    #[test]
    fn test_only_touches_segment() {
        let mapper = ScrollMapper::new(b"acgt").unwrap();

        let mut leds = [BLACK; 8];

        render_frame(
            &mut DiscretePairs,
            &mapper,
            &mut leds,
            0,
            &mut rng(),
            &[1..3],
        );

        assert_eq!(leds, [BLACK, YELLOW, GREEN, BLACK, BLACK, GREEN, YELLOW, BLACK]);
    }
}
