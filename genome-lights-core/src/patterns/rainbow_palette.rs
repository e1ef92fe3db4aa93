use super::{Frame, Pattern, complementary_base};
use crate::genome::Base;
use crate::lights::{Palette16, Strand};

/// Each base owns a quarter of a rainbow palette. The colors slide along the palette as the window scrolls between
/// whole bases.
#[derive(Debug, Clone)]
pub struct PalettePattern {
    palette: Palette16,
}

impl Default for PalettePattern {
    fn default() -> Self {
        Self::new(Palette16::RAINBOW)
    }
}

impl PalettePattern {
    pub fn new(palette: Palette16) -> Self {
        Self { palette }
    }

    fn offset_for_base(base: Base) -> u8 {
        match base {
            Base::A => 0,
            Base::C => 64,
            Base::T => 128,
            Base::G => 192,
            Base::Unknown => 0,
        }
    }

    /// 64 palette steps per base, so a `fraction` in `[0, 1)` never reaches the next base's colors
    pub fn index_for(base: Base, fraction: f32) -> u8 {
        Self::offset_for_base(base) + (64.0 * fraction) as u8
    }
}

impl Pattern for PalettePattern {
    fn name(&self) -> &'static str {
        "palette"
    }

    fn render(&mut self, frame: &mut Frame<'_, '_>, start: usize, end: usize) {
        let fraction = frame.mapper.fraction();

        for i in start..end {
            let base = frame.mapper.base_at(i);

            let sense = self.palette.color_at(Self::index_for(base, fraction));
            let complement = self
                .palette
                .color_at(Self::index_for(complementary_base(base), fraction));

            frame.leds.set(Strand::Sense, i, sense);
            frame.leds.set(Strand::Complement, i, complement);
        }
    }
}
