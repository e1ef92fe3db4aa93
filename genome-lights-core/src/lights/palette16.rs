use smart_leds::RGB8;

use super::blend;

const fn rgb(x: u32) -> RGB8 {
    RGB8 {
        r: (x >> 16) as u8,
        g: (x >> 8) as u8,
        b: x as u8,
    }
}

/// 16 evenly spaced colors. Any index in 0..=255 blends between two neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette16 {
    pub entries: [RGB8; 16],
}

impl Palette16 {
    /// red, orange, yellow, green, aqua, blue, purple, pink and back to red
    pub const RAINBOW: Self = Self {
        entries: [
            rgb(0xFF0000),
            rgb(0xD52A00),
            rgb(0xAB5500),
            rgb(0xAB7F00),
            rgb(0xABAB00),
            rgb(0x56D500),
            rgb(0x00FF00),
            rgb(0x00D52A),
            rgb(0x00AB55),
            rgb(0x0056AA),
            rgb(0x0000FF),
            rgb(0x2A00D5),
            rgb(0x5500AB),
            rgb(0x7F0081),
            rgb(0xAB0055),
            rgb(0xD5002B),
        ],
    };

    /// The high nibble picks an entry. The low nibble blends towards the next entry, wrapping from the last back to the first.
    pub fn color_at(&self, index: u8) -> RGB8 {
        let hi = (index >> 4) as usize;
        let lo = index & 0x0F;

        let color = self.entries[hi];

        if lo == 0 {
            return color;
        }

        let next = self.entries[(hi + 1) % self.entries.len()];

        blend(color, next, lo << 4)
    }
}
