//! Frame-by-frame animation of the flower garden
//!
//! Drives each flower through growth, bloom and sway, with easing curves
//! shared by the renderers.

mod easing;
pub mod driver;

pub use easing::{Easing, ease};
pub use driver::Garden;
