mod color_swatch;
mod mode_chip;

pub use color_swatch::ColorSwatch;
pub use mode_chip::mode_chip;
