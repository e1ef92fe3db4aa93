use smart_leds::RGB8;

use super::{
    BaseFilter, BreatheFade, DiscretePairs, FastMovingDropout, Frame, HueCycle, MovingDropout,
    PalettePattern, Pattern, SingleSided, Sparkle,
};
use crate::errors::{GenomeError, GenomeResult};
use crate::genome::Base;
use crate::logging::info;

/// Any pattern in the catalog. An enum keeps every pattern inline without needing an allocator.
#[derive(Debug, Clone)]
pub enum GenomePattern {
    BaseFilter(BaseFilter),
    BreatheFade(BreatheFade),
    DiscretePairs(DiscretePairs),
    FastMovingDropout(FastMovingDropout),
    HueCycle(HueCycle),
    MovingDropout(MovingDropout),
    Palette(PalettePattern),
    SingleSided(SingleSided),
    Sparkle(Sparkle),
}

macro_rules! dispatch {
    ($self:ident, $x:ident => $body:expr) => {
        match $self {
            GenomePattern::BaseFilter($x) => $body,
            GenomePattern::BreatheFade($x) => $body,
            GenomePattern::DiscretePairs($x) => $body,
            GenomePattern::FastMovingDropout($x) => $body,
            GenomePattern::HueCycle($x) => $body,
            GenomePattern::MovingDropout($x) => $body,
            GenomePattern::Palette($x) => $body,
            GenomePattern::SingleSided($x) => $body,
            GenomePattern::Sparkle($x) => $body,
        }
    };
}

impl Pattern for GenomePattern {
    fn name(&self) -> &'static str {
        dispatch!(self, x => x.name())
    }

    fn render(&mut self, frame: &mut Frame<'_, '_>, start: usize, end: usize) {
        dispatch!(self, x => x.render(frame, start, end))
    }

    fn color_for(&self, base: Base) -> RGB8 {
        dispatch!(self, x => x.color_for(base))
    }
}

pub const CATALOG_LEN: usize = 10;

/// Every pattern, each with its own animation state, in a fixed order.
///
/// Which one is active is up to the frame driver. It holds an index into here.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: [GenomePattern; CATALOG_LEN],
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCatalog {
    pub fn new() -> Self {
        let patterns = [
            GenomePattern::DiscretePairs(DiscretePairs),
            GenomePattern::BreatheFade(BreatheFade::new()),
            GenomePattern::Sparkle(Sparkle::intermittent()),
            GenomePattern::BaseFilter(BaseFilter::new()),
            GenomePattern::Palette(PalettePattern::default()),
            GenomePattern::FastMovingDropout(FastMovingDropout::new()),
            GenomePattern::SingleSided(SingleSided::default()),
            GenomePattern::HueCycle(HueCycle::new()),
            GenomePattern::MovingDropout(MovingDropout::new()),
            GenomePattern::Sparkle(Sparkle::new()),
        ];

        Self { patterns }
    }

    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        CATALOG_LEN
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut GenomePattern> {
        self.patterns.get_mut(index)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|x| x.name())
    }

    pub fn position(&self, name: &str) -> GenomeResult<usize> {
        let index = self
            .names()
            .position(|x| x == name)
            .ok_or(GenomeError::UnknownPattern)?;

        info!("pattern {} is #{}", name, index);

        Ok(index)
    }
}
