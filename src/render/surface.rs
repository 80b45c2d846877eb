//! Immediate-mode 2D drawing vocabulary
//!
//! Renderers build `Path`s and `Paint`s and hand them to a `Surface`. The
//! browser implementation replays them onto a canvas context; tests record
//! them.

use crate::math::Vec2;
use crate::palette::Color;

/// One path command, in the current transformed coordinate space
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    QuadraticTo { control: Vec2, to: Vec2 },
    CubicTo { c1: Vec2, c2: Vec2, to: Vec2 },
    /// Full circle
    Circle { center: Vec2, radius: f64 },
    Close,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Vec2) -> Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn quadratic_to(mut self, control: Vec2, to: Vec2) -> Self {
        self.segments.push(PathSegment::QuadraticTo { control, to });
        self
    }

    pub fn cubic_to(mut self, c1: Vec2, c2: Vec2, to: Vec2) -> Self {
        self.segments.push(PathSegment::CubicTo { c1, c2, to });
        self
    }

    pub fn circle(mut self, center: Vec2, radius: f64) -> Self {
        self.segments.push(PathSegment::Circle { center, radius });
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Last explicit end point, if any
    pub fn end_point(&self) -> Option<Vec2> {
        self.segments.iter().rev().find_map(|s| match s {
            PathSegment::MoveTo(p) => Some(*p),
            PathSegment::QuadraticTo { to, .. } | PathSegment::CubicTo { to, .. } => Some(*to),
            PathSegment::Circle { .. } | PathSegment::Close => None,
        })
    }
}

/// Gradient color stop; `offset` is in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Vec<ColorStop>,
    },
    /// Two-circle radial gradient, as in the canvas API
    Radial {
        inner: Vec2,
        inner_radius: f64,
        outer: Vec2,
        outer_radius: f64,
        stops: Vec<ColorStop>,
    },
}

/// Round-capped stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// Blur-glow applied to subsequent fills and strokes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f64,
    pub color: Color,
}

/// 2D drawing target.
///
/// State set through `set_alpha`, `set_glow`, `translate` and `rotate` is
/// scoped by `save`/`restore`.
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f64);
    fn set_alpha(&mut self, alpha: f64);
    fn set_glow(&mut self, glow: Glow);
    fn fill_rect(&mut self, origin: Vec2, width: f64, height: f64, paint: &Paint);
    fn fill_path(&mut self, path: &Path, paint: &Paint);
    fn stroke_path(&mut self, path: &Path, stroke: Stroke);
}
