//! Everything that touches colors and the led buffer. Patterns build on these.
mod color;
mod palette16;
mod surface;
mod wave;

pub use color::{blend, fade_to_black_by, hue, scale8};
pub use palette16::Palette16;
pub use surface::{PixelSurface, Strand, check_segment, segments};
pub use wave::{beat16, beatsin16, sin16};
