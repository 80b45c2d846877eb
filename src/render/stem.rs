//! Curved stem from the ground to the (eased) current tip

use super::surface::{Glow, Path, Stroke, Surface};
use crate::animation::{ease, Easing};
use crate::flower::Flower;
use crate::math::Vec2;

const STEM_GLOW_BLUR: f64 = 4.0;

/// Stem tip and control point at a given growth progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StemGeometry {
    pub tip: Vec2,
    pub control: Vec2,
}

/// Compute the stem shape at `progress` and time `now` (ms).
///
/// The tip follows the eased straight line from start to target. Settled
/// flowers add a sinusoidal breeze offset scaled by the raw progress.
pub fn stem_geometry(flower: &Flower, progress: f64, now: f64) -> StemGeometry {
    let progress = progress.clamp(0.0, 1.0);
    let t = ease(progress, Easing::EaseOutCubic);

    let mut tip = flower.start.lerp(&flower.target, t);
    if flower.bloom_complete() {
        tip.x += flower.sway.offset(now) * progress;
    }

    let mid_y = flower.start.y - (flower.start.y - flower.target.y) * 0.5;
    let control = Vec2::new(tip.x + flower.stem_curve * t, mid_y);

    StemGeometry { tip, control }
}

/// Draw the stem and remember its tip as the flower's head position
pub fn draw_stem<S: Surface>(surface: &mut S, flower: &mut Flower, progress: f64, now: f64) {
    let geometry = stem_geometry(flower, progress, now);

    let path = Path::new()
        .move_to(flower.start)
        .quadratic_to(geometry.control, geometry.tip);

    surface.save();
    surface.set_glow(Glow {
        blur: STEM_GLOW_BLUR,
        color: flower.stem_color,
    });
    surface.stroke_path(
        &path,
        Stroke {
            color: flower.stem_color,
            width: flower.stem_thickness,
        },
    );
    surface.restore();

    flower.set_head(geometry.tip);
}
