use palette::{LinSrgb, Mix};
use smart_leds::{
    RGB8,
    hsv::{Hsv, hsv2rgb},
};

/// Fully saturated, full brightness color for a hue. Hues wrap at 256.
pub fn hue(hue: u8) -> RGB8 {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}

/// `x * (scale + 1) / 256`. A scale of 255 leaves `x` untouched.
pub fn scale8(x: u8, scale: u8) -> u8 {
    ((x as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Dim a color by `amount` out of 255.
pub fn fade_to_black_by(color: RGB8, amount: u8) -> RGB8 {
    let scale = 255 - amount;

    RGB8::new(
        scale8(color.r, scale),
        scale8(color.g, scale),
        scale8(color.b, scale),
    )
}

/// Linear mix from `a` towards `b`. `amount_of_b` is out of 256.
pub fn blend(a: RGB8, b: RGB8, amount_of_b: u8) -> RGB8 {
    if amount_of_b == 0 {
        return a;
    }

    let a = LinSrgb::new(a.r, a.g, a.b).into_format::<f32>();
    let b = LinSrgb::new(b.r, b.g, b.b).into_format::<f32>();

    let mixed: LinSrgb<u8> = a.mix(b, amount_of_b as f32 / 256.0).into_format();

    mixed.into_components().into()
}
