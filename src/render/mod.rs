//! 2D drawing: the surface abstraction, the canvas backend and the
//! background, stem and flower-head renderers

pub mod surface;
pub mod canvas;
pub mod background;
pub mod stem;
pub mod head;

#[cfg(test)]
pub mod recording;

pub use surface::{Surface, Path, Paint, Stroke, Glow};
pub use canvas::CanvasSurface;
pub use background::{Theme, Viewport};
