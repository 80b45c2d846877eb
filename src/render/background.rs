//! Viewport dimensions and the session background gradient

use super::surface::{ColorStop, Paint, Surface};
use crate::math::{Sampler, Vec2};
use crate::palette::Color;

/// Device pixel ratios above this are not worth the fill cost
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Background color theme, picked once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Deep purple fading to black
    Purple,
    /// Midnight blue fading to black
    Blue,
}

impl Theme {
    pub fn random(sampler: &mut Sampler) -> Self {
        if sampler.chance(0.5) {
            Theme::Purple
        } else {
            Theme::Blue
        }
    }

    pub fn top_color(&self) -> Color {
        match self {
            Theme::Purple => Color::rgb(0x1a, 0x0a, 0x2e),
            Theme::Blue => Color::rgb(0x0a, 0x16, 0x28),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Purple => "purple",
            Theme::Blue => "blue",
        }
    }
}

/// CSS-pixel size of the drawing surface plus its backing-store scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// `pixel_ratio` is capped at `MAX_PIXEL_RATIO`; non-finite or
    /// non-positive values fall back to 1.
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio,
        }
    }

    /// Backing store size in device pixels
    pub fn device_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }
}

/// Vertical gradient covering the viewport, recomputed on resize
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    theme: Theme,
    paint: Paint,
}

impl Background {
    pub fn new(theme: Theme, viewport: &Viewport) -> Self {
        Self {
            theme,
            paint: Self::gradient(theme, viewport),
        }
    }

    fn gradient(theme: Theme, viewport: &Viewport) -> Paint {
        Paint::Linear {
            from: Vec2::ZERO,
            to: Vec2::new(0.0, viewport.height),
            stops: vec![
                ColorStop::new(0.0, theme.top_color()),
                ColorStop::new(1.0, Color::BLACK),
            ],
        }
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        self.paint = Self::gradient(self.theme, viewport);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn paint<S: Surface>(&self, surface: &mut S, viewport: &Viewport) {
        surface.fill_rect(Vec2::ZERO, viewport.width, viewport.height, &self.paint);
    }
}
