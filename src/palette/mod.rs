//! Colors, flower palettes and palette selection

pub mod color;
pub mod selector;

pub use color::{Color, Palette, PETAL_PALETTES, RED_ROSE};
pub use selector::PaletteSelector;
