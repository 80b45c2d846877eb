//! Flower head: a ring of bezier petals around a glowing center

use super::surface::{ColorStop, Glow, Paint, Path, Surface};
use crate::animation::{ease, Easing};
use crate::flower::{Flower, Petal};
use crate::math::Vec2;
use crate::palette::color::{CENTER_FADE, CENTER_HIGHLIGHT};
use crate::palette::Palette;

/// Alpha byte of the petal tip (about 50%)
const PETAL_EDGE_ALPHA: u8 = 0x80;
const CENTER_RADIUS: f64 = 4.0;

fn petal_glow(palette: &Palette) -> f64 {
    if palette.distinguished {
        14.0
    } else {
        10.0
    }
}

fn center_glow(palette: &Palette) -> f64 {
    if palette.distinguished {
        12.0
    } else {
        8.0
    }
}

/// Head opacity leads the geometry so the bloom pops early
pub fn bloom_opacity(t: f64) -> f64 {
    (t * 1.5).min(1.0)
}

/// Closed teardrop outline pointing along +y, in petal-local space
pub fn petal_path(petal: &Petal, scale: f64) -> Path {
    let length = petal.length * scale;
    let width = petal.width * scale;

    let c1 = Vec2::new(width * petal.curve, length * 0.4);
    let c2 = Vec2::new(width, length * 0.7);
    let tip = Vec2::new(0.0, length);

    Path::new()
        .move_to(Vec2::ZERO)
        .cubic_to(c1, c2, tip)
        .cubic_to(Vec2::new(-c2.x, c2.y), Vec2::new(-c1.x, c1.y), Vec2::ZERO)
        .close()
}

fn petal_paint(palette: &Palette, length: f64) -> Paint {
    Paint::Radial {
        inner: Vec2::ZERO,
        inner_radius: 0.0,
        outer: Vec2::new(0.0, length * 0.7),
        outer_radius: length,
        stops: vec![
            ColorStop::new(0.0, palette.center),
            ColorStop::new(0.6, palette.outer),
            ColorStop::new(1.0, palette.outer.with_alpha(PETAL_EDGE_ALPHA)),
        ],
    }
}

/// Draw the head at `bloom_progress` in [0, 1]. Does nothing until the stem
/// has been drawn at least once.
pub fn draw_flower_head<S: Surface>(surface: &mut S, flower: &Flower, bloom_progress: f64) {
    let Some(head) = flower.head() else {
        return;
    };

    let t = ease(bloom_progress, Easing::EaseOutQuad);
    let palette = &flower.palette;

    surface.save();
    surface.set_alpha(bloom_opacity(t));
    surface.translate(head);

    for petal in &flower.petals {
        surface.save();
        surface.rotate(petal.angle);
        surface.set_glow(Glow {
            blur: petal_glow(palette),
            color: palette.outer,
        });
        surface.fill_path(&petal_path(petal, t), &petal_paint(palette, petal.length * t));
        surface.restore();
    }

    let radius = CENTER_RADIUS * t;
    let center_paint = Paint::Radial {
        inner: Vec2::ZERO,
        inner_radius: 0.0,
        outer: Vec2::ZERO,
        outer_radius: radius * 3.0,
        stops: vec![
            ColorStop::new(0.0, CENTER_HIGHLIGHT),
            ColorStop::new(0.5, palette.center),
            ColorStop::new(1.0, CENTER_FADE),
        ],
    };
    surface.set_glow(Glow {
        blur: center_glow(palette),
        color: palette.center,
    });
    surface.fill_path(&Path::new().circle(Vec2::ZERO, radius * 2.0), &center_paint);

    surface.restore();
}
