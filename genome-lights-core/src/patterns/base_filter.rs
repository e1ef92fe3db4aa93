use smart_leds::colors::BLACK;

use super::{Frame, HueCycle, Pattern, complementary_base};
use crate::clock::Every;
use crate::genome::Base;
use crate::lights::Strand;
use crate::logging::debug;

/// A hue cycle with every base dark except for two. The two lit bases change every 5 seconds.
///
/// One of the lit bases always pairs weakly (A or T) and the other strongly (C or G).
#[derive(Debug, Clone)]
pub struct BaseFilter {
    inner: HueCycle,
    highlighted: (Base, Base),
    every: Every,
}

impl Default for BaseFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseFilter {
    pub fn new() -> Self {
        Self {
            inner: HueCycle::new(),
            highlighted: (Base::A, Base::C),
            every: Every::new(5_000),
        }
    }

    pub fn highlighted(&self) -> (Base, Base) {
        self.highlighted
    }

    fn is_lit(&self, base: Base) -> bool {
        base == self.highlighted.0 || base == self.highlighted.1
    }

    fn reselect(&mut self, frame: &mut Frame<'_, '_>) {
        let a = Base::ALL[frame.random_below(Base::ALL.len())];

        let b = match (a.is_weak(), frame.coin_flip()) {
            (true, true) => Base::C,
            (true, false) => Base::G,
            (false, true) => Base::A,
            (false, false) => Base::T,
        };

        debug!("highlighting {} and {}", a.as_ascii() as char, b.as_ascii() as char);

        self.highlighted = (a, b);
    }
}

impl Pattern for BaseFilter {
    fn name(&self) -> &'static str {
        "base_filter"
    }

    fn render(&mut self, frame: &mut Frame<'_, '_>, start: usize, end: usize) {
        self.inner.render(frame, start, end);

        for i in start..end {
            let base = frame.mapper.base_at(i);

            if !self.is_lit(base) {
                frame.leds.set(Strand::Sense, i, BLACK);
            }

            if !self.is_lit(complementary_base(base)) {
                frame.leds.set(Strand::Complement, i, BLACK);
            }
        }

        if self.every.check(frame.now_ms).fired() {
            self.reselect(frame);
        }
    }
}
